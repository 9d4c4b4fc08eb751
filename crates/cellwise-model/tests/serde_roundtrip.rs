use cellwise_model::{CellRef, ErrorValue, Scalar, Workbook};
use pretty_assertions::assert_eq;

#[test]
fn scalar_json_schema_is_stable() {
    let cases = [
        (
            Scalar::Logical(true),
            serde_json::json!({"type": "logical", "value": true}),
        ),
        (
            Scalar::Number(2.5),
            serde_json::json!({"type": "number", "value": 2.5}),
        ),
        (
            Scalar::Text("total".to_string()),
            serde_json::json!({"type": "text", "value": "total"}),
        ),
        (
            Scalar::Error(ErrorValue::DivisionByZero),
            serde_json::json!({"type": "error", "value": "division_by_zero"}),
        ),
    ];

    for (scalar, expected) in cases {
        let json = serde_json::to_value(&scalar).expect("serialize Scalar");
        assert_eq!(json, expected);
        let roundtrip: Scalar = serde_json::from_value(json).expect("deserialize Scalar");
        assert_eq!(roundtrip, scalar);
    }
}

#[test]
fn workbook_roundtrips_with_sorted_cell_pairs() {
    let mut wb = Workbook::new();
    let id = wb.add_sheet("Sheet1");
    let sheet = wb.sheet_mut(id).expect("sheet exists");
    // Insert out of order; serialization sorts by address.
    sheet.set_value(CellRef::new(1, 0), 2.0);
    sheet.set_value(CellRef::new(0, 0), "x");

    let json = serde_json::to_value(&wb).expect("serialize Workbook");
    assert_eq!(
        json,
        serde_json::json!({
            "sheets": [{
                "name": "Sheet1",
                "cells": [
                    [{"row": 0, "col": 0}, {"type": "text", "value": "x"}],
                    [{"row": 1, "col": 0}, {"type": "number", "value": 2.0}],
                ],
            }],
        })
    );

    let roundtrip: Workbook = serde_json::from_value(json).expect("deserialize Workbook");
    let sheet = roundtrip.sheet(0).expect("sheet restored");
    assert_eq!(sheet.value(CellRef::new(0, 0)), Scalar::Text("x".into()));
    assert_eq!(sheet.value(CellRef::new(1, 0)), Scalar::Number(2.0));
}

#[test]
fn worksheet_without_cells_field_deserializes_empty() {
    let json = serde_json::json!({"sheets": [{"name": "Blank"}]});
    let wb: Workbook = serde_json::from_value(json).expect("deserialize Workbook");
    let sheet = wb.sheet(0).expect("sheet restored");
    assert_eq!(sheet.value(CellRef::new(0, 0)), Scalar::Number(0.0));
}
