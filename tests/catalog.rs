//! Tests for loading and saving catalogs.
mod common;
use btforms::prelude::*;
use common::*;

const CATALOG_JSON: &str = r#"{
    "datatypes": { "Color": ["red", "green", "blue"] },
    "models": {
        "Foo": {
            "kind": "Action",
            "id": "Foo",
            "ports": {
                "paint": { "direction": "Output", "type_name": "Color", "default_value": "blue" },
                "speed": { "direction": "Input", "type_name": "float", "default_value": "1.5" }
            }
        },
        "Sub": {
            "kind": "SubTree",
            "id": "Sub",
            "ports": {
                "__shared_blackboard": { "direction": "Input", "type_name": "float", "default_value": "true" }
            }
        }
    }
}"#;

#[test]
fn test_catalog_from_json() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("Failed to parse catalog");

    assert_eq!(catalog.datatypes, create_color_datatypes());
    assert_eq!(catalog.models, create_existing_models());
}

#[test]
fn test_catalog_json_round_trip() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let json = catalog.to_json_pretty().unwrap();
    assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
}

#[test]
fn test_catalog_sections_are_optional() {
    let catalog = Catalog::from_json("{}").unwrap();
    assert!(catalog.datatypes.is_empty());
    assert!(catalog.models.is_empty());
}

#[test]
fn test_catalog_save_and_reload() {
    let path = std::env::temp_dir().join(format!("btforms-catalog-{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    catalog.save(path).unwrap();
    let reloaded = Catalog::from_file(path).unwrap();
    std::fs::remove_file(path).unwrap();

    assert_eq!(reloaded, catalog);
}

#[test]
fn test_catalog_errors() {
    let missing = Catalog::from_file("/nonexistent/btforms/catalog.json");
    assert!(matches!(missing, Err(CatalogError::Io { .. })));

    let malformed = Catalog::from_json(r#"{ "models": { "Foo": { "kind": "Robot" } } }"#);
    assert!(matches!(malformed, Err(CatalogError::Json(_))));
}

#[test]
fn test_catalog_feeds_both_forms() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

    let datatype_form = DataTypeForm::new(&catalog.datatypes);
    assert!(datatype_form.verdict().valid);

    let node_form = NodeForm::builder(&catalog.models, &catalog.datatypes)
        .editing("Foo")
        .build();
    assert!(node_form.verdict().valid);
    assert_eq!(node_form.type_choices(), vec!["float", "Color"]);
}
