//! Conversions between scalar payload types.
//!
//! Numeric and text coercion are the substance of the arithmetic and
//! concatenation operators: every operand passes through here once its shape
//! is settled. The scalar-level functions return `ErrorValue` so operator
//! code can fold failures straight into the result grid; the value-level
//! entry points add the shape rejections a scalar can never produce.

use cellwise_format::{format_number, Locale};
use cellwise_model::{ErrorValue, Scalar};
use thiserror::Error;

use crate::eval::CalcContext;
use crate::value::Value;

/// How a value-level conversion can fail.
///
/// `Value` wraps a spreadsheet error the caller should surface in the result
/// grid. The other two variants reject operand shapes the conversion does
/// not accept at all; they point at a caller bug rather than bad user data,
/// so they stay distinct from `#VALUE!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("{0}")]
    Value(ErrorValue),
    #[error("an array operand cannot collapse to one value")]
    ArrayOperand,
    #[error("a multi-cell reference cannot collapse to one value")]
    MultiCellReference,
}

impl From<ErrorValue> for CoercionError {
    fn from(error: ErrorValue) -> Self {
        CoercionError::Value(error)
    }
}

/// Parse text as a number under the locale's separators.
///
/// Accepts an optional leading sign, thousands separators in well-formed
/// three-digit groups before the decimal separator, the locale decimal
/// separator, and an ASCII `e`/`E` exponent. Surrounding whitespace is
/// ignored. Anything else is `#VALUE!`; a well-formed number too large for
/// an `f64` is `#NUM!`.
pub fn to_number_text(text: &str, locale: &Locale) -> Result<f64, ErrorValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ErrorValue::CellValue);
    }

    let (sign, body) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once(locale.decimal_sep) {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };

    let int_digits =
        strip_thousands(int_part, locale.thousands_sep).ok_or(ErrorValue::CellValue)?;
    let frac_digits = frac_part.unwrap_or("");
    if !frac_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorValue::CellValue);
    }
    // `.5` and `5.` are fine, a bare separator is not.
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(ErrorValue::CellValue);
    }

    // The exponent takes an optional sign and digits, no separators.
    let exp_canonical = match exponent {
        Some(exp) => {
            let (exp_sign, exp_digits) = match exp.strip_prefix(['+', '-']) {
                Some(rest) => (&exp[..1], rest),
                None => ("", exp),
            };
            if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ErrorValue::CellValue);
            }
            format!("e{exp_sign}{exp_digits}")
        }
        None => String::new(),
    };

    let canonical = format!("{sign}{int_digits}.{frac_digits}{exp_canonical}");
    let number: f64 = match canonical.parse() {
        Ok(n) => n,
        Err(_) => return Err(ErrorValue::CellValue),
    };
    if !number.is_finite() {
        return Err(ErrorValue::NumberInvalid);
    }
    // Collapse negative zero so equality and rendering see a single zero.
    if number == 0.0 {
        return Ok(0.0);
    }
    Ok(number)
}

/// Strip thousands separators from an integer part, validating grouping.
///
/// With separators present, the leading group must be one to three digits
/// and every following group exactly three. Returns the bare digit string;
/// empty input passes through empty so `.5`-style mantissas work.
fn strip_thousands(int_part: &str, sep: char) -> Option<String> {
    let mut groups = int_part.split(sep);
    let first = groups.next().unwrap_or("");
    if !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut digits = String::with_capacity(int_part.len());
    digits.push_str(first);
    let mut grouped = false;
    for group in groups {
        grouped = true;
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    if grouped && (first.is_empty() || first.len() > 3) {
        return None;
    }
    Some(digits)
}

/// The numeric coercion matrix for a settled scalar.
pub fn to_number_scalar(scalar: &Scalar, locale: &Locale) -> Result<f64, ErrorValue> {
    match scalar {
        Scalar::Logical(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Scalar::Number(n) => Ok(*n),
        Scalar::Text(s) => to_number_text(s, locale),
        Scalar::Error(e) => Err(*e),
    }
}

/// Collapse an operand to one number.
///
/// A missing operand is `#VALUE!`. A single-cell reference resolves and
/// converts; arrays and multi-cell references are rejected outright rather
/// than collapsed.
pub fn to_number(value: Option<&Value>, ctx: &CalcContext<'_>) -> Result<f64, CoercionError> {
    let value = match value {
        Some(value) => value,
        None => return Err(ErrorValue::CellValue.into()),
    };
    match value {
        Value::Logical(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(*n),
        Value::Text(s) => Ok(to_number_text(s, &ctx.locale)?),
        Value::Error(e) => Err((*e).into()),
        Value::Array(_) => Err(CoercionError::ArrayOperand),
        Value::Reference(reference) => match reference.single_cell(ctx) {
            Some(scalar) => Ok(to_number_scalar(&scalar, &ctx.locale)?),
            None => Err(CoercionError::MultiCellReference),
        },
    }
}

/// The text coercion matrix for a settled scalar.
///
/// Errors are not stringified; they propagate so the operator can return
/// them as values.
pub fn to_text_scalar(scalar: &Scalar, locale: &Locale) -> Result<String, ErrorValue> {
    match scalar {
        Scalar::Logical(b) => Ok(locale.logical_literal(*b).to_string()),
        Scalar::Number(n) => Ok(format_number(*n, locale)),
        Scalar::Text(s) => Ok(s.clone()),
        Scalar::Error(e) => Err(*e),
    }
}

/// Collapse an operand to text.
///
/// An array collapses to its top-left cell. A single-cell reference
/// resolves and converts; a multi-cell reference is rejected.
pub fn to_text(value: &Value, ctx: &CalcContext<'_>) -> Result<String, CoercionError> {
    match value {
        Value::Logical(b) => Ok(ctx.locale.logical_literal(*b).to_string()),
        Value::Number(n) => Ok(format_number(*n, &ctx.locale)),
        Value::Text(s) => Ok(s.clone()),
        Value::Error(e) => Err((*e).into()),
        Value::Array(array) => Ok(to_text_scalar(array.top_left(), &ctx.locale)?),
        Value::Reference(reference) => match reference.single_cell(ctx) {
            Some(scalar) => Ok(to_text_scalar(&scalar, &ctx.locale)?),
            None => Err(CoercionError::MultiCellReference),
        },
    }
}
