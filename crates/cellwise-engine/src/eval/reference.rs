use cellwise_model::{CellRef, ErrorValue, Range, Scalar, SheetId};

use crate::eval::CalcContext;
use crate::value::Array;

/// An unresolved rectangle of worksheet cells.
///
/// A reference carries an address, never data. Operators resolve it against
/// a [`CalcContext`] only at the moment a concrete operand is needed, trying
/// the single-cell form first and falling back to materializing the full
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    sheet: SheetId,
    range: Range,
}

impl Reference {
    pub fn new(sheet: SheetId, range: Range) -> Self {
        Self { sheet, range }
    }

    /// Reference a single cell.
    pub fn cell(sheet: SheetId, addr: CellRef) -> Self {
        Self::new(sheet, Range::single(addr))
    }

    #[inline]
    pub fn sheet(&self) -> SheetId {
        self.sheet
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Columns spanned. Known from the address alone; no cells are read.
    #[inline]
    pub fn width(&self) -> u32 {
        self.range.width()
    }

    /// Rows spanned. Known from the address alone; no cells are read.
    #[inline]
    pub fn height(&self) -> u32 {
        self.range.height()
    }

    #[inline]
    pub fn is_single_cell(&self) -> bool {
        self.range.is_single_cell()
    }

    /// Resolve to the one cell this reference addresses.
    ///
    /// `None` means the reference spans more than one cell and the caller
    /// should fall back to [`Reference::to_array`]. A single-cell reference
    /// into a worksheet that no longer exists does resolve, to a `#REF!`
    /// error scalar.
    pub fn single_cell(&self, ctx: &CalcContext<'_>) -> Option<Scalar> {
        if !self.is_single_cell() {
            return None;
        }
        if !ctx.sheet_exists(self.sheet) {
            return Some(Scalar::Error(ErrorValue::CellReference));
        }
        Some(ctx.cell_value(self.sheet, self.range.start()))
    }

    /// Materialize the full rectangle, row-major.
    ///
    /// The shape always equals the address extent. A vanished worksheet
    /// yields the extent filled with `#REF!` errors rather than a smaller
    /// or empty array.
    pub fn to_array(&self, ctx: &CalcContext<'_>) -> Array {
        let height = self.height() as usize;
        let width = self.width() as usize;
        if !ctx.sheet_exists(self.sheet) {
            let cells = vec![Scalar::Error(ErrorValue::CellReference); height * width];
            return Array::from_parts(height, width, cells);
        }
        let mut cells = Vec::with_capacity(height * width);
        for addr in self.range.cells() {
            cells.push(ctx.cell_value(self.sheet, addr));
        }
        Array::from_parts(height, width, cells)
    }
}
