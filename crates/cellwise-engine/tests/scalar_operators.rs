use cellwise_engine::{BinaryOp, CalcContext, Value};
use cellwise_format::Locale;
use cellwise_model::{ErrorValue, Workbook};
use pretty_assertions::assert_eq;

fn en_ctx(wb: &Workbook) -> CalcContext<'_> {
    CalcContext::new(wb, 0, Locale::en_us())
}

#[test]
fn arithmetic_coerces_logicals_and_text() {
    let wb = Workbook::new();
    let ctx = en_ctx(&wb);

    assert_eq!(Value::from(2.0).add(Value::from(3.0), &ctx), Value::Number(5.0));
    assert_eq!(Value::from(true).add(Value::from(true), &ctx), Value::Number(2.0));
    assert_eq!(Value::from("2").mul(Value::from("3"), &ctx), Value::Number(6.0));
    assert_eq!(
        Value::from("1,000").sub(Value::from(1.0), &ctx),
        Value::Number(999.0)
    );
    assert_eq!(Value::from(false).mul(Value::from(9.0), &ctx), Value::Number(0.0));
}

#[test]
fn unparsable_text_becomes_value_error() {
    let wb = Workbook::new();
    let ctx = en_ctx(&wb);

    assert_eq!(
        Value::from("one").add(Value::from(1.0), &ctx),
        Value::Error(ErrorValue::CellValue)
    );
    assert_eq!(
        Value::from(1.0).div(Value::from(""), &ctx),
        Value::Error(ErrorValue::CellValue)
    );
}

#[test]
fn numeric_text_parses_with_the_context_locale() {
    let wb = Workbook::new();
    let de = CalcContext::new(&wb, 0, Locale::de_de());

    assert_eq!(
        Value::from("1.234,5").add(Value::from("0,5"), &de),
        Value::Number(1235.0)
    );
    // The en-US spelling is malformed under de-DE separators.
    assert_eq!(
        Value::from("1,234.5").add(Value::from(0.0), &de),
        Value::Error(ErrorValue::CellValue)
    );
}

#[test]
fn division_by_coerced_zero() {
    let wb = Workbook::new();
    let ctx = en_ctx(&wb);

    assert_eq!(
        Value::from(10.0).div(Value::from(0.0), &ctx),
        Value::Error(ErrorValue::DivisionByZero)
    );
    assert_eq!(
        Value::from(10.0).div(Value::from(false), &ctx),
        Value::Error(ErrorValue::DivisionByZero)
    );
    assert_eq!(
        Value::from(10.0).div(Value::from("0"), &ctx),
        Value::Error(ErrorValue::DivisionByZero)
    );
    assert_eq!(Value::from(10.0).div(Value::from(4.0), &ctx), Value::Number(2.5));
}

#[test]
fn pow_error_domain() {
    let wb = Workbook::new();
    let ctx = en_ctx(&wb);

    assert_eq!(Value::from(2.0).pow(Value::from(10.0), &ctx), Value::Number(1024.0));
    assert_eq!(
        Value::from(0.0).pow(Value::from(0.0), &ctx),
        Value::Error(ErrorValue::NumberInvalid)
    );
    assert_eq!(
        Value::from(0.0).pow(Value::from(-1.0), &ctx),
        Value::Error(ErrorValue::DivisionByZero)
    );
    assert_eq!(
        Value::from(-1.0).pow(Value::from(0.5), &ctx),
        Value::Error(ErrorValue::NumberInvalid)
    );
}

#[test]
fn concat_renders_operands_with_the_locale() {
    let wb = Workbook::new();
    let en = en_ctx(&wb);
    let de = CalcContext::new(&wb, 0, Locale::de_de());

    assert_eq!(
        Value::from("total: ").concat(Value::from(12.5), &en),
        Value::Text("total: 12.5".to_string())
    );
    assert_eq!(
        Value::from("Summe: ").concat(Value::from(12.5), &de),
        Value::Text("Summe: 12,5".to_string())
    );
    // Logical literals do not vary by locale.
    assert_eq!(
        Value::from(true).concat(Value::from(false), &de),
        Value::Text("TRUEFALSE".to_string())
    );
    assert_eq!(
        Value::from(1.0).concat(Value::from(2.0), &en),
        Value::Text("12".to_string())
    );
}

#[test]
fn errors_pass_through_every_operator() {
    let wb = Workbook::new();
    let ctx = en_ctx(&wb);
    let ops = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Concat,
    ];

    for op in ops {
        assert_eq!(
            op.apply(Value::from(ErrorValue::CellReference), Value::from(1.0), &ctx),
            Value::Error(ErrorValue::CellReference),
            "left error through {op:?}"
        );
        assert_eq!(
            op.apply(Value::from(1.0), Value::from(ErrorValue::NoValueAvailable), &ctx),
            Value::Error(ErrorValue::NoValueAvailable),
            "right error through {op:?}"
        );
        assert_eq!(
            op.apply(
                Value::from(ErrorValue::DivisionByZero),
                Value::from(ErrorValue::NumberInvalid),
                &ctx,
            ),
            Value::Error(ErrorValue::DivisionByZero),
            "left error wins through {op:?}"
        );
    }
}
