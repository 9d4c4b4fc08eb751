//! `cellwise-model` defines the core in-memory spreadsheet data structures.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the calculation engine (operators, coercion, evaluation)
//! - host applications storing typed cell values
//! - IPC and persistence boundaries via `serde` (JSON-safe schema)

mod address;
mod error;
mod scalar;
mod workbook;

pub use address::{A1ParseError, CellRef, Range, MAX_COLS, MAX_ROWS};
pub use error::ErrorValue;
pub use scalar::Scalar;
pub use workbook::{SheetId, Workbook, Worksheet};
