use critvar_map::{SearchEngine, build_candidates, search_candidates};
use critvar_model::{MatchOptions, QualityLevel, VariableCatalog};
use critvar_standards::default_catalog;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn exact_match_after_normalization() {
    let catalog = default_catalog().unwrap();
    let engine = SearchEngine::default();
    let results = engine.search(
        &catalog,
        &columns(&["Glucose", "BMI", "patient_age", "hba1c_value"]),
    );

    let glucosa = &results[0];
    assert_eq!(glucosa.variable, "glucosa");
    assert!(glucosa.found);
    assert_eq!(glucosa.column.as_deref(), Some("Glucose"));
    assert_eq!(glucosa.confidence, 1.0);
    assert_eq!(glucosa.synonym.as_deref(), Some("glucose"));

    let bmi = &results[1];
    assert!(bmi.found);
    assert_eq!(bmi.column.as_deref(), Some("BMI"));

    let edad = &results[2];
    assert!(edad.found);
    assert_eq!(edad.column.as_deref(), Some("patient_age"));
    assert_eq!(edad.confidence, 1.0);

    let hba1c = &results[3];
    assert!(hba1c.found);
    assert_eq!(hba1c.column.as_deref(), Some("hba1c_value"));
}

#[test]
fn diet_reports_fruit_and_vegetable_columns() {
    let catalog = default_catalog().unwrap();
    let dieta = catalog.get("dieta").unwrap();
    let engine = SearchEngine::default();
    let result = engine.match_one(
        dieta,
        &["consumo_frutas_diario", "consumo_vegetales_diario"],
    );

    assert!(result.found);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.column.as_deref(), Some("consumo_frutas_diario"));
    let notes = result.notes().unwrap();
    assert!(notes.contains("Fruits detected: 1 column(s)"), "{notes}");
    assert!(notes.contains("Vegetables detected: 1 column(s)"), "{notes}");
    assert!(!notes.contains("General diet"), "{notes}");
}

#[test]
fn empty_column_list_finds_nothing() {
    let catalog = default_catalog().unwrap();
    let engine = SearchEngine::default();
    let outcome = engine.analyze::<String>(&catalog, &[]);

    assert_eq!(outcome.results.len(), catalog.len());
    for result in &outcome.results {
        assert!(!result.found, "{}", result.variable);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.column, None);
    }
    let dieta = outcome.results.iter().find(|r| r.variable == "dieta").unwrap();
    assert_eq!(dieta.notes(), Some("No diet matches found"));
    assert_eq!(outcome.statistics.coverage_percent, 0.0);
    assert_eq!(outcome.quality, QualityLevel::Poor);
    assert_eq!(outcome.suggestions.len(), 1);
}

#[test]
fn strict_threshold_rejects_partial_overlap() {
    let catalog = default_catalog().unwrap();
    let options = MatchOptions::with_threshold(0.95).unwrap();
    let results = SearchEngine::default().search_with(&catalog, &["azucar_sangre"], &options);
    let glucosa = &results[0];
    assert!(!glucosa.found);
    assert!(glucosa.confidence < 0.95);
    assert_eq!(glucosa.threshold, 0.95);
}

#[test]
fn variables_may_share_a_column() {
    let catalog =
        VariableCatalog::from_pairs([("edad", vec!["edad"]), ("age", vec!["age", "edad"])])
            .unwrap();
    let results = SearchEngine::default().search(&catalog, &["edad"]);
    assert!(results.iter().all(|r| r.found));
    assert!(results.iter().all(|r| r.column.as_deref() == Some("edad")));
}

#[test]
fn results_follow_catalog_order() {
    let catalog = VariableCatalog::from_pairs([
        ("zeta", vec!["zeta"]),
        ("alpha", vec!["alpha"]),
        ("mid", vec!["mid"]),
    ])
    .unwrap();
    let results = SearchEngine::default().search(&catalog, &["alpha", "mid"]);
    let order: Vec<&str> = results.iter().map(|r| r.variable.as_str()).collect();
    assert_eq!(order, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn repeated_searches_are_identical() {
    let catalog = default_catalog().unwrap();
    let names = columns(&[
        "Edad",
        "IMC",
        "glucemia_ayunas",
        "frutas",
        "verduras",
        "dieta_general",
        "sexo",
    ]);
    let engine = SearchEngine::default();
    let first = engine.analyze(&catalog, &names);
    let second = engine.analyze(&catalog, &names);
    assert_eq!(first, second);

    let candidates = build_candidates(&names);
    assert_eq!(
        search_candidates(&catalog, &candidates, engine.options()),
        first.results
    );
}
