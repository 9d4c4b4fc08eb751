use std::fmt;

use cellwise_model::{ErrorValue, Scalar};
use thiserror::Error;

use crate::eval::Reference;

/// Any value an operand can hold during evaluation.
///
/// The four scalar variants mirror [`Scalar`] exactly; `Array` and
/// `Reference` are the collection shapes operators know how to resolve.
/// Nothing else exists: every evaluation step consumes and produces one of
/// these six variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Logical(bool),
    Number(f64),
    Text(String),
    Error(ErrorValue),
    Array(Array),
    Reference(Reference),
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Narrow to a scalar.
    ///
    /// Collections are not an error condition here; they come back intact in
    /// the `Err` arm so the caller can resolve them instead.
    pub fn into_scalar(self) -> Result<Scalar, Collection> {
        match self {
            Value::Logical(b) => Ok(Scalar::Logical(b)),
            Value::Number(n) => Ok(Scalar::Number(n)),
            Value::Text(s) => Ok(Scalar::Text(s)),
            Value::Error(e) => Ok(Scalar::Error(e)),
            Value::Array(array) => Err(Collection::Array(array)),
            Value::Reference(reference) => Err(Collection::Reference(reference)),
        }
    }
}

/// The two non-scalar shapes a [`Value`] can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Array(Array),
    Reference(Reference),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Logical(b) => Value::Logical(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::Text(s) => Value::Text(s),
            Scalar::Error(e) => Value::Error(e),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Logical(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Value::Error(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Reference> for Value {
    fn from(value: Reference) -> Self {
        Value::Reference(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Logical(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Error(e) => write!(f, "{e}"),
            Value::Array(array) => write!(f, "{array}"),
            // Sheets are tracked by id, so only the range renders.
            Value::Reference(r) => write!(f, "{}", r.range()),
        }
    }
}

/// Rejected [`Array`] shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("arrays need at least one row and one column")]
    Empty,
    #[error("a {height}x{width} array cannot hold {len} cells")]
    CellCount {
        height: usize,
        width: usize,
        len: usize,
    },
    #[error("array rows must all have the same length")]
    Ragged,
}

/// A dense two-dimensional block of scalars.
///
/// Shape is fixed at construction: `height >= 1`, `width >= 1`, and the
/// row-major cell vector holds exactly `height * width` scalars. Elements
/// are always scalars; arrays never nest and never hold references.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    height: usize,
    width: usize,
    cells: Vec<Scalar>,
}

impl Array {
    /// Build an array from row-major cells.
    pub fn new(height: usize, width: usize, cells: Vec<Scalar>) -> Result<Self, ArrayError> {
        if height == 0 || width == 0 {
            return Err(ArrayError::Empty);
        }
        match height.checked_mul(width) {
            Some(expected) if expected == cells.len() => Ok(Self {
                height,
                width,
                cells,
            }),
            _ => Err(ArrayError::CellCount {
                height,
                width,
                len: cells.len(),
            }),
        }
    }

    /// Build an array from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self, ArrayError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ArrayError::Empty);
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(ArrayError::Ragged);
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Constructor for shapes the engine has already sized itself.
    pub(crate) fn from_parts(height: usize, width: usize, cells: Vec<Scalar>) -> Self {
        debug_assert!(height >= 1 && width >= 1);
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read a cell by 0-based row/column. Out-of-shape reads are `None`.
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// The top-left cell. Arrays are never empty, so this always exists.
    pub fn top_left(&self) -> &Scalar {
        &self.cells[0]
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Scalar> {
        self.cells.iter()
    }
}

impl fmt::Display for Array {
    /// Renders the `{1,2;3,4}` array-literal form, with text cells quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for row in 0..self.height {
            if row > 0 {
                f.write_str(";")?;
            }
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(",")?;
                }
                match &self.cells[row * self.width + col] {
                    Scalar::Text(s) => write!(f, "\"{s}\"")?,
                    other => write!(f, "{other}")?,
                }
            }
        }
        f.write_str("}")
    }
}
