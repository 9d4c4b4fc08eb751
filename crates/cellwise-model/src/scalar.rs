use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ErrorValue;

/// A single-cell calculation value: the atomic result kind.
///
/// The union is closed at exactly these four variants so that every consumer
/// matches exhaustively; collection kinds (arrays, references) exist only at
/// the evaluation layer, never inside a `Scalar`.
///
/// The enum uses an explicit `{type, value}` tagged layout for stable
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    /// Logical TRUE/FALSE.
    Logical(bool),
    /// IEEE-754 double precision number.
    Number(f64),
    /// Plain text.
    Text(String),
    /// Spreadsheet error code.
    Error(ErrorValue),
}

impl Scalar {
    pub fn is_error(&self) -> bool {
        matches!(self, Scalar::Error(_))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Logical(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<ErrorValue> for Scalar {
    fn from(value: ErrorValue) -> Self {
        Scalar::Error(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Logical(true) => f.write_str("TRUE"),
            Scalar::Logical(false) => f.write_str("FALSE"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Error(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_impls_pick_the_matching_variant() {
        assert_eq!(Scalar::from(true), Scalar::Logical(true));
        assert_eq!(Scalar::from(2.5), Scalar::Number(2.5));
        assert_eq!(Scalar::from(7), Scalar::Number(7.0));
        assert_eq!(Scalar::from("abc"), Scalar::Text("abc".to_string()));
        assert_eq!(
            Scalar::from(ErrorValue::CellValue),
            Scalar::Error(ErrorValue::CellValue)
        );
    }

    #[test]
    fn display_uses_spreadsheet_spellings() {
        assert_eq!(Scalar::Logical(true).to_string(), "TRUE");
        assert_eq!(Scalar::Logical(false).to_string(), "FALSE");
        assert_eq!(Scalar::Number(1.0).to_string(), "1");
        assert_eq!(Scalar::Number(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Text("x".to_string()).to_string(), "x");
        assert_eq!(
            Scalar::Error(ErrorValue::DivisionByZero).to_string(),
            "#DIV/0!"
        );
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Scalar::Number(1.0), Scalar::Number(1.0));
        assert_ne!(Scalar::Number(1.0), Scalar::Text("1".to_string()));
        assert_ne!(
            Scalar::Error(ErrorValue::CellValue),
            Scalar::Error(ErrorValue::NumberInvalid)
        );
    }
}
