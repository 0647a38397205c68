pub mod error;
pub mod matching;
pub mod options;
pub mod variable;

pub use error::{ModelError, Result};
pub use matching::{
    BucketMatch, DietBreakdown, DietCategory, DietDetails, MatchResult, QualityLevel,
    SearchOutcome, SearchStatistics,
};
pub use options::{DEFAULT_THRESHOLD, HIGH_CONFIDENCE, MatchOptions, Threshold};
pub use variable::{
    DIET_KEYS, MatchPolicy, VariableCatalog, VariableDefinition, canonical_key, clean_synonyms,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_breakdown_counts() {
        let mut breakdown = DietBreakdown::default();
        breakdown.bucket_mut(DietCategory::Fruit).push(BucketMatch {
            column: "fruit_intake".to_string(),
            score: 1.0,
            synonym: "fruit intake".to_string(),
        });
        breakdown.bucket_mut(DietCategory::General).push(BucketMatch {
            column: "diet".to_string(),
            score: 0.8,
            synonym: "diet".to_string(),
        });
        assert_eq!(breakdown.total(), 2);
        assert_eq!(breakdown.bucket(DietCategory::Vegetable).len(), 0);
        let columns: Vec<&str> = breakdown.iter().map(|m| m.column.as_str()).collect();
        assert_eq!(columns, vec!["fruit_intake", "diet"]);
    }

    #[test]
    fn match_result_serializes_without_empty_diet() {
        let result = MatchResult::not_found("bmi", 0.6);
        let json = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(json["variable"], "bmi");
        assert_eq!(json["found"], false);
        assert!(json.get("diet").is_none());
        let round: MatchResult = serde_json::from_value(json).expect("deserialize result");
        assert_eq!(round, result);
    }
}
