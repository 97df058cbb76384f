//! Tests for the custom datatype form and its validator.
mod common;
use common::*;
use btforms::prelude::*;

#[test]
fn test_form_opens_on_existing_datatypes() {
    let form = DataTypeForm::new(&create_color_datatypes());

    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0].name, "Color");
    assert_eq!(form.rows()[0].values_text, "red,\ngreen,\nblue");
    assert!(form.verdict().valid);
    assert_eq!(form.verdict().message, "OK");
}

#[test]
fn test_new_datatype_is_committed() {
    let mut form = DataTypeForm::new(&DataTypes::new());
    let row = form.add_row();
    assert_eq!(form.rows()[row].name, "datatype_name");

    form.set_name(row, "Color").unwrap();
    form.set_values(row, "red,\ngreen,blue").unwrap();

    let committed = form.accept().expect("form should be valid");
    assert_eq!(committed, create_color_datatypes());
}

#[test]
fn test_value_cells_are_echoed_in_canonical_form() {
    let mut form = DataTypeForm::new(&DataTypes::new());
    let first = form.add_row();
    let second = form.add_row();
    form.set_values(first, " a , b ").unwrap();
    assert_eq!(form.rows()[first].values_text, "a,\nb");

    // Editing any cell rewrites every value cell.
    form.set_name(second, "Other").unwrap();
    assert_eq!(form.rows()[first].values_text, "a,\nb");
    assert_eq!(form.rows()[second].values_text, "");
}

#[test]
fn test_duplicated_names_are_rejected() {
    let mut form = DataTypeForm::new(&create_color_datatypes());
    let row = form.add_row();
    form.set_name(row, "Color").unwrap();
    form.set_values(row, "cyan").unwrap();

    let verdict = form.verdict();
    assert!(!verdict.valid);
    assert_eq!(verdict.message, "Duplicated datatype name");
    assert_eq!(
        form.accept(),
        Err(FormError::Rejected(ValidationError::DuplicatedDataTypeName))
    );
}

#[test]
fn test_invalid_names() {
    let mut form = DataTypeForm::new(&DataTypes::new());
    let row = form.add_row();

    form.set_name(row, "").unwrap();
    assert_eq!(
        form.verdict().message,
        "Invalid name: use only letters, digits and underscores"
    );

    form.set_name(row, "bad name").unwrap();
    assert!(!form.verdict().valid);

    form.set_name(row, "ns::Color").unwrap();
    assert!(form.verdict().valid);
}

#[test]
fn test_invalid_values_flag_their_row() {
    let mut form = DataTypeForm::new(&DataTypes::new());
    let row = form.add_row();
    form.set_name(row, "Shape").unwrap();
    form.set_values(row, "circle, half-moon").unwrap();

    assert_eq!(
        form.verdict().message,
        "Invalid values: use only letters, digits and underscores"
    );
    assert!(form.report().is_flagged(row));

    // Values may not be namespaced like names can.
    form.set_values(row, "geo:circle").unwrap();
    assert!(form.report().is_flagged(row));

    form.set_values(row, "circle, square").unwrap();
    assert!(!form.report().is_flagged(row));
    assert!(form.verdict().valid);
}

#[test]
fn test_last_failing_rule_is_displayed() {
    let entries = vec![
        DataTypeEntry::new("bad name", vec!["ok".to_string()]),
        DataTypeEntry::new("Good", vec!["not-ok".to_string()]),
    ];
    let report = DataTypeValidator::validate(&entries);

    assert_eq!(
        report.issues,
        vec![
            ValidationError::InvalidDataTypeName { row: 0 },
            ValidationError::InvalidDataTypeValues { row: 1 },
        ]
    );
    assert_eq!(
        report.verdict().message,
        "Invalid values: use only letters, digits and underscores"
    );

    let entries = vec![
        DataTypeEntry::new("Same", vec!["x-y".to_string()]),
        DataTypeEntry::new("Same", vec![]),
    ];
    let report = DataTypeValidator::validate(&entries);
    assert_eq!(report.flagged_rows, vec![0]);
    assert_eq!(
        report.displayed_issue(),
        Some(&ValidationError::DuplicatedDataTypeName)
    );
}

#[test]
fn test_remove_rows() {
    let mut form = DataTypeForm::new(&DataTypes::new());
    for name in ["A", "B", "C"] {
        let row = form.add_row();
        form.set_name(row, name).unwrap();
    }

    assert!(!form.can_remove(&[]));
    assert!(form.can_remove(&[0]));

    form.remove_rows(&[1, 0, 1]).unwrap();
    assert_eq!(form.rows().len(), 1);
    assert_eq!(form.rows()[0].name, "C");

    assert_eq!(
        form.remove_rows(&[3]),
        Err(FormError::RowOutOfRange { row: 3, len: 1 })
    );
    assert_eq!(
        form.set_values(5, "x"),
        Err(FormError::RowOutOfRange { row: 5, len: 1 })
    );
}

#[test]
fn test_removing_duplicate_restores_validity() {
    let mut form = DataTypeForm::new(&create_color_datatypes());
    let row = form.add_row();
    form.set_name(row, "Color").unwrap();
    assert!(!form.verdict().valid);

    form.remove_rows(&[row]).unwrap();
    assert!(form.verdict().valid);
}
