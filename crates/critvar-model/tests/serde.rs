use critvar_model::{MatchOptions, MatchPolicy, QualityLevel, VariableCatalog};
use serde_json::json;

#[test]
fn threshold_is_validated_on_deserialize() {
    let options: MatchOptions = serde_json::from_value(json!({ "threshold": 0.8 })).unwrap();
    assert_eq!(options.threshold.value(), 0.8);

    let defaulted: MatchOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(defaulted.threshold.value(), 0.6);

    assert!(serde_json::from_value::<MatchOptions>(json!({ "threshold": 1.01 })).is_err());
}

#[test]
fn catalog_serializes_as_list_in_order() {
    let catalog = VariableCatalog::from_pairs([
        ("glucosa", vec!["glucose"]),
        ("dieta", vec!["diet", "frutas"]),
    ])
    .unwrap();
    let value = serde_json::to_value(&catalog).unwrap();
    assert_eq!(
        value,
        json!([
            { "key": "glucosa", "synonyms": ["glucose"], "policy": "standard" },
            { "key": "dieta", "synonyms": ["diet", "frutas"], "policy": "diet_aggregate" }
        ])
    );
    let back: VariableCatalog = serde_json::from_value(value).unwrap();
    assert_eq!(back.get("dieta").unwrap().policy, MatchPolicy::DietAggregate);
}

#[test]
fn quality_levels_order_and_serialize_lowercase() {
    assert!(QualityLevel::Excellent > QualityLevel::Good);
    assert!(QualityLevel::Fair > QualityLevel::Poor);
    assert_eq!(serde_json::to_value(QualityLevel::Fair).unwrap(), json!("fair"));
}
