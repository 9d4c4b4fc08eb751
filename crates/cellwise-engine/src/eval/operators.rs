use cellwise_format::Locale;
use cellwise_model::{ErrorValue, Scalar};

use crate::coercion;
use crate::eval::CalcContext;
use crate::value::{Array, Collection, Value};

/// The binary operators the engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Concat,
}

impl BinaryOp {
    /// Apply the operator to two operands.
    ///
    /// Every failure mode surfaces as an error scalar inside the returned
    /// value; this never panics on operand data and never returns a Rust
    /// error. The same four-step shape dispatch runs for every operator:
    /// resolve references, then scalar/scalar, scalar broadcast over an
    /// array, or the shape union of two arrays.
    pub fn apply(self, lhs: Value, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        let lhs = resolve_operand(lhs, ctx);
        let rhs = resolve_operand(rhs, ctx);
        match (lhs, rhs) {
            (Operand::Scalar(l), Operand::Scalar(r)) => {
                Value::from(self.apply_scalars(&l, &r, &ctx.locale))
            }
            (Operand::Scalar(l), Operand::Array(r)) => {
                Value::Array(broadcast(&r, |cell| self.apply_scalars(&l, cell, &ctx.locale)))
            }
            (Operand::Array(l), Operand::Scalar(r)) => {
                Value::Array(broadcast(&l, |cell| self.apply_scalars(cell, &r, &ctx.locale)))
            }
            (Operand::Array(l), Operand::Array(r)) => {
                Value::Array(self.apply_arrays(&l, &r, &ctx.locale))
            }
        }
    }

    /// Combine two arrays over the union of their shapes.
    ///
    /// The result is as tall as the taller operand and as wide as the wider
    /// one. Positions covered by both operands combine normally; positions
    /// either operand does not reach become `#N/A`.
    fn apply_arrays(self, lhs: &Array, rhs: &Array, locale: &Locale) -> Array {
        let height = lhs.height().max(rhs.height());
        let width = lhs.width().max(rhs.width());
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                let cell = match (lhs.get(row, col), rhs.get(row, col)) {
                    (Some(l), Some(r)) => self.apply_scalars(l, r, locale),
                    _ => Scalar::Error(ErrorValue::NoValueAvailable),
                };
                cells.push(cell);
            }
        }
        Array::from_parts(height, width, cells)
    }

    /// Operator semantics on two concrete scalars.
    ///
    /// Error operands short-circuit before any coercion. When both sides
    /// carry an error, the left one wins.
    fn apply_scalars(self, lhs: &Scalar, rhs: &Scalar, locale: &Locale) -> Scalar {
        if let Scalar::Error(e) = lhs {
            return Scalar::Error(*e);
        }
        if let Scalar::Error(e) = rhs {
            return Scalar::Error(*e);
        }
        match self {
            BinaryOp::Add => numeric(lhs, rhs, locale, |l, r| Scalar::Number(l + r)),
            BinaryOp::Sub => numeric(lhs, rhs, locale, |l, r| Scalar::Number(l - r)),
            BinaryOp::Mul => numeric(lhs, rhs, locale, |l, r| Scalar::Number(l * r)),
            BinaryOp::Div => numeric(lhs, rhs, locale, div),
            BinaryOp::Pow => numeric(lhs, rhs, locale, pow),
            BinaryOp::Concat => concat(lhs, rhs, locale),
        }
    }
}

/// A fully resolved operand: scalar or materialized array.
enum Operand {
    Scalar(Scalar),
    Array(Array),
}

/// References resolve here, and only here: the single-cell form first, then
/// the materialized rectangle. Scalars and arrays pass through.
fn resolve_operand(value: Value, ctx: &CalcContext<'_>) -> Operand {
    match value.into_scalar() {
        Ok(scalar) => Operand::Scalar(scalar),
        Err(Collection::Array(array)) => Operand::Array(array),
        Err(Collection::Reference(reference)) => match reference.single_cell(ctx) {
            Some(scalar) => Operand::Scalar(scalar),
            None => Operand::Array(reference.to_array(ctx)),
        },
    }
}

/// Map a scalar over every cell of an array, keeping its shape.
fn broadcast(array: &Array, f: impl Fn(&Scalar) -> Scalar) -> Array {
    let cells = array.iter().map(f).collect();
    Array::from_parts(array.height(), array.width(), cells)
}

fn numeric(
    lhs: &Scalar,
    rhs: &Scalar,
    locale: &Locale,
    f: impl FnOnce(f64, f64) -> Scalar,
) -> Scalar {
    let l = match coercion::to_number_scalar(lhs, locale) {
        Ok(n) => n,
        Err(e) => return Scalar::Error(e),
    };
    let r = match coercion::to_number_scalar(rhs, locale) {
        Ok(n) => n,
        Err(e) => return Scalar::Error(e),
    };
    f(l, r)
}

/// Division checks the divisor after coercion, so `"0"` and `FALSE` divide
/// like the number zero.
fn div(l: f64, r: f64) -> Scalar {
    if r == 0.0 {
        Scalar::Error(ErrorValue::DivisionByZero)
    } else {
        Scalar::Number(l / r)
    }
}

/// Exponentiation has the only numeric-domain checks in the engine.
/// `0^0` is indeterminate and `0^negative` divides by zero; any non-real
/// or overflowing result is `#NUM!`.
fn pow(base: f64, exponent: f64) -> Scalar {
    if base == 0.0 {
        if exponent == 0.0 {
            return Scalar::Error(ErrorValue::NumberInvalid);
        }
        if exponent < 0.0 {
            return Scalar::Error(ErrorValue::DivisionByZero);
        }
    }
    let result = base.powf(exponent);
    if result.is_finite() {
        Scalar::Number(result)
    } else {
        Scalar::Error(ErrorValue::NumberInvalid)
    }
}

fn concat(lhs: &Scalar, rhs: &Scalar, locale: &Locale) -> Scalar {
    let l = match coercion::to_text_scalar(lhs, locale) {
        Ok(s) => s,
        Err(e) => return Scalar::Error(e),
    };
    let r = match coercion::to_text_scalar(rhs, locale) {
        Ok(s) => s,
        Err(e) => return Scalar::Error(e),
    };
    Scalar::Text(format!("{l}{r}"))
}

/// Operator methods on values, mirroring how a formula evaluator invokes
/// them once per AST node.
impl Value {
    pub fn add(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Add.apply(self, rhs, ctx)
    }

    pub fn sub(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Sub.apply(self, rhs, ctx)
    }

    pub fn mul(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Mul.apply(self, rhs, ctx)
    }

    pub fn div(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Div.apply(self, rhs, ctx)
    }

    pub fn pow(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Pow.apply(self, rhs, ctx)
    }

    pub fn concat(self, rhs: Value, ctx: &CalcContext<'_>) -> Value {
        BinaryOp::Concat.apply(self, rhs, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellwise_model::Workbook;
    use pretty_assertions::assert_eq;

    fn ctx_over(wb: &Workbook) -> CalcContext<'_> {
        CalcContext::new(wb, 0, Locale::en_us())
    }

    #[test]
    fn scalar_dispatch_applies_the_operator_directly() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        assert_eq!(
            BinaryOp::Add.apply(Value::from(2.0), Value::from(3.0), &ctx),
            Value::Number(5.0)
        );
        assert_eq!(
            BinaryOp::Concat.apply(Value::from("a"), Value::from("b"), &ctx),
            Value::Text("ab".to_string())
        );
    }

    #[test]
    fn left_error_wins_when_both_sides_fail() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        assert_eq!(
            BinaryOp::Add.apply(
                Value::from(ErrorValue::NumberInvalid),
                Value::from(ErrorValue::DivisionByZero),
                &ctx,
            ),
            Value::Error(ErrorValue::NumberInvalid)
        );
        // The short-circuit beats coercion: the right side never parses.
        assert_eq!(
            BinaryOp::Mul.apply(
                Value::from(ErrorValue::NoValueAvailable),
                Value::from("not a number"),
                &ctx,
            ),
            Value::Error(ErrorValue::NoValueAvailable)
        );
    }

    #[test]
    fn division_checks_the_coerced_divisor() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        for zero in [Value::from(0.0), Value::from("0"), Value::from(false)] {
            assert_eq!(
                BinaryOp::Div.apply(Value::from(1.0), zero, &ctx),
                Value::Error(ErrorValue::DivisionByZero)
            );
        }
    }

    #[test]
    fn pow_covers_its_error_domain() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        let pow = |l: f64, r: f64| BinaryOp::Pow.apply(Value::from(l), Value::from(r), &ctx);
        assert_eq!(pow(0.0, 0.0), Value::Error(ErrorValue::NumberInvalid));
        assert_eq!(pow(0.0, -2.0), Value::Error(ErrorValue::DivisionByZero));
        assert_eq!(pow(-1.0, 0.5), Value::Error(ErrorValue::NumberInvalid));
        assert_eq!(pow(1e308, 2.0), Value::Error(ErrorValue::NumberInvalid));
        assert_eq!(pow(2.0, 10.0), Value::Number(1024.0));
        assert_eq!(pow(0.0, 2.0), Value::Number(0.0));
    }

    #[test]
    fn shape_union_pads_uncovered_positions_with_na() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        let column = Array::from_rows(vec![
            vec![Scalar::Number(1.0)],
            vec![Scalar::Number(2.0)],
        ])
        .unwrap();
        let row = Array::from_rows(vec![vec![Scalar::Number(3.0), Scalar::Number(4.0)]]).unwrap();

        let out = BinaryOp::Add.apply(Value::Array(column), Value::Array(row), &ctx);
        let expected = Array::from_rows(vec![
            vec![
                Scalar::Number(4.0),
                Scalar::Error(ErrorValue::NoValueAvailable),
            ],
            vec![
                Scalar::Error(ErrorValue::NoValueAvailable),
                Scalar::Error(ErrorValue::NoValueAvailable),
            ],
        ])
        .unwrap();
        assert_eq!(out, Value::Array(expected));
    }

    #[test]
    fn scalar_broadcast_preserves_operand_order() {
        let wb = Workbook::new();
        let ctx = ctx_over(&wb);
        let row = Array::from_rows(vec![vec![Scalar::Number(1.0), Scalar::Number(4.0)]]).unwrap();

        let left = BinaryOp::Div.apply(Value::from(2.0), Value::Array(row.clone()), &ctx);
        let expected = Array::from_rows(vec![vec![Scalar::Number(2.0), Scalar::Number(0.5)]]);
        assert_eq!(left, Value::Array(expected.unwrap()));

        let right = BinaryOp::Div.apply(Value::Array(row), Value::from(2.0), &ctx);
        let expected = Array::from_rows(vec![vec![Scalar::Number(0.5), Scalar::Number(2.0)]]);
        assert_eq!(right, Value::Array(expected.unwrap()));
    }
}
