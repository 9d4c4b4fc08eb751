use std::fmt;

use serde::{Deserialize, Serialize};

/// Spreadsheet error codes.
///
/// These are first-class calculation results, not Rust errors: a formula that
/// divides by zero *evaluates to* [`ErrorValue::DivisionByZero`] and that value
/// flows through subsequent operators like any other scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorValue {
    /// `#REF!`: a reference is invalid or its worksheet no longer exists.
    CellReference,
    /// `#VALUE!`: an operand could not be coerced to the required type.
    CellValue,
    /// `#DIV/0!`: division (or a negative power of zero) by zero.
    DivisionByZero,
    /// `#NAME?`: an identifier was not recognized.
    NameNotRecognized,
    /// `#N/A`: no value is available at this position.
    NoValueAvailable,
    /// `#NULL!`: an empty range intersection.
    NullValue,
    /// `#NUM!`: a numeric-domain violation.
    NumberInvalid,
}

impl ErrorValue {
    /// The display code shown in a cell, e.g. `#DIV/0!`.
    pub const fn code(self) -> &'static str {
        match self {
            ErrorValue::CellReference => "#REF!",
            ErrorValue::CellValue => "#VALUE!",
            ErrorValue::DivisionByZero => "#DIV/0!",
            ErrorValue::NameNotRecognized => "#NAME?",
            ErrorValue::NoValueAvailable => "#N/A",
            ErrorValue::NullValue => "#NULL!",
            ErrorValue::NumberInvalid => "#NUM!",
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
