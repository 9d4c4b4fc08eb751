#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! The value model and binary-operator core of a spreadsheet formula
//! evaluator.
//!
//! Operands are [`Value`]s: the four scalar payloads from
//! [`cellwise_model::Scalar`], dense two-dimensional [`Array`]s, and lazy
//! worksheet [`Reference`]s. [`BinaryOp::apply`] combines any two of them
//! under one uniform algorithm: resolve references against a
//! [`CalcContext`], broadcast scalars over arrays, take the shape union of
//! two arrays, and coerce per-position payloads through the [`coercion`]
//! routines.
//!
//! Spreadsheet errors are values, not Rust errors: a failed coercion or a
//! zero divisor produces an error scalar in the result, and evaluation
//! continues at every other position. Rust `Result`s appear only at the
//! host-facing seams (array construction, the converter entry points).

pub mod coercion;
pub mod eval;
pub mod value;

pub use coercion::CoercionError;
pub use eval::{BinaryOp, CalcContext, CellProvider, Reference};
pub use value::{Array, ArrayError, Collection, Value};
