//! Operand resolution and operator evaluation.

mod context;
mod operators;
mod reference;

pub use context::{CalcContext, CellProvider};
pub use operators::BinaryOp;
pub use reference::Reference;
