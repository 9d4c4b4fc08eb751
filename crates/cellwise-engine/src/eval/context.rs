use cellwise_format::Locale;
use cellwise_model::{CellRef, ErrorValue, Scalar, SheetId, Workbook};

/// Read-only access to worksheet cells.
///
/// The engine stores no cells itself; hosts implement this over whatever
/// storage they have. Reads are total: implementations decide what an unset
/// cell reads as (the [`Workbook`] impl reads it as `0`).
pub trait CellProvider {
    fn sheet_exists(&self, sheet: SheetId) -> bool;

    fn cell_value(&self, sheet: SheetId, addr: CellRef) -> Scalar;
}

impl CellProvider for Workbook {
    fn sheet_exists(&self, sheet: SheetId) -> bool {
        self.sheet(sheet).is_some()
    }

    fn cell_value(&self, sheet: SheetId, addr: CellRef) -> Scalar {
        match self.sheet(sheet) {
            Some(worksheet) => worksheet.value(addr),
            None => Scalar::Error(ErrorValue::CellReference),
        }
    }
}

/// Everything one evaluation needs: the coercion locale, the worksheet being
/// evaluated, and read access to cells.
///
/// Built fresh per evaluation and threaded by shared reference; the engine
/// keeps no state between calls.
#[derive(Clone, Copy)]
pub struct CalcContext<'a> {
    pub locale: Locale,
    pub sheet: SheetId,
    provider: &'a dyn CellProvider,
}

impl<'a> CalcContext<'a> {
    pub fn new(provider: &'a dyn CellProvider, sheet: SheetId, locale: Locale) -> Self {
        Self {
            locale,
            sheet,
            provider,
        }
    }

    #[inline]
    pub fn sheet_exists(&self, sheet: SheetId) -> bool {
        self.provider.sheet_exists(sheet)
    }

    #[inline]
    pub fn cell_value(&self, sheet: SheetId, addr: CellRef) -> Scalar {
        self.provider.cell_value(sheet, addr)
    }
}
