//! Search statistics, improvement suggestions and quality classification.

use std::collections::BTreeSet;

use critvar_model::{HIGH_CONFIDENCE, MatchOptions, MatchResult, QualityLevel, SearchStatistics};

use crate::utils::round_to;

/// Share of dataset columns that may stay unclassified before a review is
/// suggested.
const UNCLASSIFIED_COLUMN_RATIO: f64 = 0.5;

/// Computes coverage and mean confidence for a result list.
pub fn compute_statistics(results: &[MatchResult], options: &MatchOptions) -> SearchStatistics {
    let total = results.len();
    let found: Vec<&MatchResult> = results.iter().filter(|r| r.found).collect();
    let missing = results
        .iter()
        .filter(|r| !r.found)
        .map(|r| r.variable.clone())
        .collect();

    let coverage_percent = if total > 0 {
        round_to(found.len() as f64 / total as f64 * 100.0, 1)
    } else {
        0.0
    };
    let mean_confidence = if found.is_empty() {
        0.0
    } else {
        let sum: f64 = found.iter().map(|r| r.confidence).sum();
        round_to(sum / found.len() as f64, 3)
    };

    SearchStatistics {
        total_variables: total,
        found_variables: found.len(),
        missing_variables: missing,
        coverage_percent,
        mean_confidence,
        threshold: options.threshold.value(),
    }
}

/// Hints for improving the next search, in a fixed order:
/// missing variables, low-confidence matches, unclassified columns.
pub fn improvement_suggestions<S: AsRef<str>>(
    results: &[MatchResult],
    columns: &[S],
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let missing: Vec<&str> = results
        .iter()
        .filter(|r| !r.found)
        .map(|r| r.variable.as_str())
        .collect();
    if !missing.is_empty() {
        suggestions.push(format!(
            "Consider adding synonyms for: {}",
            missing.join(", ")
        ));
    }

    let low_confidence: Vec<&str> = results
        .iter()
        .filter(|r| r.found && r.confidence < HIGH_CONFIDENCE)
        .map(|r| r.variable.as_str())
        .collect();
    if !low_confidence.is_empty() {
        suggestions.push(format!(
            "Review low-confidence matches: {}",
            low_confidence.join(", ")
        ));
    }

    let claimed: BTreeSet<&str> = results
        .iter()
        .filter(|r| r.found)
        .filter_map(|r| r.column.as_deref())
        .collect();
    let unclassified = columns
        .iter()
        .map(AsRef::as_ref)
        .collect::<BTreeSet<&str>>()
        .difference(&claimed)
        .count();
    if unclassified as f64 > columns.len() as f64 * UNCLASSIFIED_COLUMN_RATIO {
        suggestions.push(format!(
            "There are {unclassified} unclassified columns. \
             Consider reviewing whether they contain relevant information."
        ));
    }

    suggestions
}

/// Classifies a dataset from its coverage percentage and mean confidence.
/// The first satisfied tier wins.
pub fn classify_quality(coverage_percent: f64, mean_confidence: f64) -> QualityLevel {
    if coverage_percent >= 80.0 && mean_confidence >= 0.9 {
        QualityLevel::Excellent
    } else if coverage_percent >= 60.0 && mean_confidence >= 0.8 {
        QualityLevel::Good
    } else if coverage_percent >= 40.0 && mean_confidence >= 0.7 {
        QualityLevel::Fair
    } else {
        QualityLevel::Poor
    }
}
