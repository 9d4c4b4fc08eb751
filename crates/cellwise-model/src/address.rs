use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported 1-based row number (Excel-compatible).
pub const MAX_ROWS: u32 = 1_048_576;
/// Largest supported number of columns (`XFD`, Excel-compatible).
pub const MAX_COLS: u32 = 16_384;

/// A single cell position within a worksheet.
///
/// Rows and columns are 0-indexed: `row = 0, col = 0` is the cell `A1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

/// Errors raised when parsing an A1-style cell or range reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum A1ParseError {
    #[error("empty reference")]
    Empty,
    #[error("malformed A1 reference `{0}`")]
    Malformed(String),
    #[error("column is outside the sheet bounds")]
    ColumnOutOfBounds,
    #[error("row is outside the sheet bounds")]
    RowOutOfBounds,
}

impl CellRef {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference such as `B7` or `$B$7` (case-insensitive).
    pub fn from_a1(input: &str) -> Result<Self, A1ParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(A1ParseError::Empty);
        }

        let rest = s.strip_prefix('$').unwrap_or(s);
        let letters_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let letters = &rest[..letters_end];
        let mut digits = &rest[letters_end..];
        if let Some(stripped) = digits.strip_prefix('$') {
            digits = stripped;
        }
        if letters.is_empty()
            || digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(A1ParseError::Malformed(s.to_string()));
        }

        let col = column_index(letters)?;
        let row: u32 = digits.parse().map_err(|_| A1ParseError::RowOutOfBounds)?;
        if row == 0 || row > MAX_ROWS {
            return Err(A1ParseError::RowOutOfBounds);
        }
        Ok(Self::new(row - 1, col))
    }

    /// Render in A1 notation, e.g. `A1` or `BC32`.
    pub fn to_a1(self) -> String {
        format!("{}{}", column_name(self.col), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// A rectangular worksheet region, inclusive at both corners.
///
/// Always normalized: `start.row <= end.row` and `start.col <= end.col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    start: CellRef,
    end: CellRef,
}

impl Range {
    /// Build a range from two corners in any order, normalizing them.
    pub fn new(a: CellRef, b: CellRef) -> Self {
        Self {
            start: CellRef::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellRef::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// The single-cell range covering `cell`.
    pub fn single(cell: CellRef) -> Self {
        Self::new(cell, cell)
    }

    /// Parse `A1:B2` or a bare cell like `C3`.
    pub fn from_a1(input: &str) -> Result<Self, A1ParseError> {
        let s = input.trim();
        match s.split_once(':') {
            Some((a, b)) => Ok(Self::new(CellRef::from_a1(a)?, CellRef::from_a1(b)?)),
            None => Ok(Self::single(CellRef::from_a1(s)?)),
        }
    }

    #[inline]
    pub const fn start(&self) -> CellRef {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> CellRef {
        self.end
    }

    /// Number of columns spanned.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Number of rows spanned.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    #[inline]
    pub const fn is_single_cell(&self) -> bool {
        self.start.row == self.end.row && self.start.col == self.end.col
    }

    #[inline]
    pub const fn contains(&self, addr: CellRef) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Iterate the covered cells in row-major order (left to right, then top
    /// to bottom).
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        let Range { start, end } = *self;
        (start.row..=end.row)
            .flat_map(move |row| (start.col..=end.col).map(move |col| CellRef::new(row, col)))
    }

    pub fn to_a1(self) -> String {
        if self.is_single_cell() {
            self.start.to_a1()
        } else {
            format!("{}:{}", self.start.to_a1(), self.end.to_a1())
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

fn column_index(letters: &str) -> Result<u32, A1ParseError> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        let digit = u32::from(b.to_ascii_uppercase() - b'A') + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or(A1ParseError::ColumnOutOfBounds)?;
    }
    if col > MAX_COLS {
        return Err(A1ParseError::ColumnOutOfBounds);
    }
    Ok(col - 1)
}

fn column_name(col: u32) -> String {
    let mut n = u64::from(col) + 1;
    let mut letters = [0u8; 8];
    let mut used = 0;
    while n > 0 {
        letters[used] = b'A' + ((n - 1) % 26) as u8;
        used += 1;
        n = (n - 1) / 26;
    }
    letters[..used].reverse();
    // Only ASCII letters were written above.
    String::from_utf8_lossy(&letters[..used]).into_owned()
}
