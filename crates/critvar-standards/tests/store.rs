use std::fs;

use critvar_standards::{StoreError, VariableStore, default_catalog};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> VariableStore {
    VariableStore::open(dir.path().join("variables.json")).expect("open store")
}

#[test]
fn missing_file_yields_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.catalog(), &default_catalog().unwrap());
    assert_eq!(store.count(), 8);
    assert!(!store.path().exists());
}

#[test]
fn invalid_json_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(&path, "{ not json").unwrap();
    let store = VariableStore::open(&path).unwrap();
    assert_eq!(store.count(), 8);
    assert!(store.exists("glucosa"));
}

#[test]
fn create_persists_and_reloads_in_order() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let created = store
        .create(" Colesterol ", ["colesterol", " cholesterol ", ""])
        .unwrap();
    assert_eq!(created.key, "colesterol");
    assert_eq!(created.synonyms, vec!["colesterol", "cholesterol"]);

    let reopened = store_in(&dir);
    assert_eq!(reopened.names().last(), Some(&"colesterol"));
    assert_eq!(reopened.names()[0], "glucosa");
    assert_eq!(reopened.count(), 9);
}

#[test]
fn create_rejects_duplicates_and_empty_synonyms() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    assert!(matches!(
        store.create("BMI", ["x"]),
        Err(StoreError::Model(_))
    ));
    assert!(matches!(
        store.create("nuevo", [" "]),
        Err(StoreError::Model(_))
    ));
    assert!(!store.path().exists());
}

#[test]
fn update_keeps_position() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.update("bmi", ["imc"]).unwrap();
    let reopened = store_in(&dir);
    assert_eq!(reopened.names()[1], "bmi");
    assert_eq!(reopened.get("bmi").unwrap().synonyms, vec!["imc"]);
    assert!(matches!(
        store.update("unknown", ["x"]),
        Err(StoreError::UnknownVariable(_))
    ));
}

#[test]
fn delete_and_reset() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let removed = store.delete("embarazo").unwrap();
    assert_eq!(removed.key, "embarazo");
    assert!(!store_in(&dir).exists("embarazo"));
    assert!(matches!(
        store.delete("embarazo"),
        Err(StoreError::UnknownVariable(_))
    ));

    store.reset().unwrap();
    assert!(store_in(&dir).exists("embarazo"));
}

#[test]
fn synonym_edits() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    assert!(store.add_synonym("edad", "age_years").unwrap());
    assert!(!store.add_synonym("edad", " age_years ").unwrap());
    assert!(matches!(
        store.add_synonym("edad", "  "),
        Err(StoreError::EmptySynonym)
    ));
    assert_eq!(
        store_in(&dir).get("edad").unwrap().synonyms.last().map(String::as_str),
        Some("age_years")
    );

    store.remove_synonym("edad", "age_years").unwrap();
    assert!(matches!(
        store.remove_synonym("edad", "age_years"),
        Err(StoreError::UnknownSynonym { .. })
    ));

    store.update("edad", ["edad"]).unwrap();
    assert!(matches!(
        store.remove_synonym("edad", "edad"),
        Err(StoreError::LastSynonym(_))
    ));
}

#[test]
fn saved_file_is_plain_object() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.reset().unwrap();
    let text = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys[..4], ["glucosa", "bmi", "edad", "hba1c"]);
    assert_eq!(object["bmi"][0], "bmi");
}

#[test]
fn invalid_entries_are_skipped_not_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(
        &path,
        r#"{"colesterol": ["cholesterol", "ldl"], "vacia": [], "Colesterol": ["hdl"]}"#,
    )
    .unwrap();

    let mut store = VariableStore::open(&path).unwrap();
    assert_eq!(store.names(), vec!["colesterol"]);
    assert_eq!(
        store.get("colesterol").unwrap().synonyms,
        vec!["cholesterol", "ldl"]
    );

    store.create("nueva", ["new"]).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["colesterol", "nueva"]);
}

#[test]
fn non_object_document_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("variables.json");
    fs::write(&path, r#"["glucosa"]"#).unwrap();
    let store = VariableStore::open(&path).unwrap();
    assert_eq!(store.catalog(), &default_catalog().unwrap());
}
