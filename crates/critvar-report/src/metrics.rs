//! Confidence distribution and per-category coverage.

use serde::Serialize;

use critvar_map::round_to;
use critvar_model::MatchResult;

/// Variables describing the patient.
pub const DEMOGRAPHIC_VARIABLES: [&str; 2] = ["edad", "embarazo"];
/// Measurements and diagnoses.
pub const CLINICAL_VARIABLES: [&str; 5] =
    ["glucosa", "bmi", "hba1c", "obesidad", "polidipsia"];
pub const LIFESTYLE_VARIABLES: [&str; 1] = ["dieta"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceDistribution {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Coverage per category as `"found/total"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCoverage {
    pub demographic: String,
    pub clinical: String,
    pub lifestyle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedMetrics {
    pub confidence: ConfidenceDistribution,
    pub category_coverage: CategoryCoverage,
    pub total_matches: usize,
    pub total_variables: usize,
}

/// Derives metrics from a result list; `None` when it is empty.
///
/// The confidence distribution covers found results only and is all zeroes
/// when nothing was found.
pub fn advanced_metrics(results: &[MatchResult]) -> Option<AdvancedMetrics> {
    if results.is_empty() {
        return None;
    }

    let confidences: Vec<f64> = results
        .iter()
        .filter(|r| r.found)
        .map(|r| r.confidence)
        .collect();
    let confidence = if confidences.is_empty() {
        ConfidenceDistribution {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
        }
    } else {
        let min = confidences.iter().copied().fold(f64::INFINITY, f64::min);
        let max = confidences.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = confidences.iter().sum::<f64>() / confidences.len() as f64;
        ConfidenceDistribution {
            min: round_to(min, 3),
            max: round_to(max, 3),
            mean: round_to(mean, 3),
        }
    };

    Some(AdvancedMetrics {
        confidence,
        category_coverage: CategoryCoverage {
            demographic: category_ratio(results, &DEMOGRAPHIC_VARIABLES),
            clinical: category_ratio(results, &CLINICAL_VARIABLES),
            lifestyle: category_ratio(results, &LIFESTYLE_VARIABLES),
        },
        total_matches: confidences.len(),
        total_variables: results.len(),
    })
}

fn category_ratio(results: &[MatchResult], category: &[&str]) -> String {
    let found = results
        .iter()
        .filter(|r| r.found && category.contains(&r.variable.as_str()))
        .count();
    format!("{found}/{}", category.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(variable: &str, found: bool, confidence: f64) -> MatchResult {
        MatchResult {
            variable: variable.to_string(),
            found,
            column: Some(variable.to_string()),
            confidence,
            synonym: None,
            threshold: 0.6,
            diet: None,
        }
    }

    #[test]
    fn metrics_over_found_results() {
        let results = vec![
            result("edad", true, 1.0),
            result("glucosa", true, 0.857),
            result("bmi", true, 0.75),
            result("dieta", false, 0.4),
        ];
        let metrics = advanced_metrics(&results).unwrap();
        assert_eq!(metrics.confidence.min, 0.75);
        assert_eq!(metrics.confidence.max, 1.0);
        assert_eq!(metrics.confidence.mean, 0.869);
        assert_eq!(metrics.category_coverage.demographic, "1/2");
        assert_eq!(metrics.category_coverage.clinical, "2/5");
        assert_eq!(metrics.category_coverage.lifestyle, "0/1");
        assert_eq!(metrics.total_matches, 3);
        assert_eq!(metrics.total_variables, 4);
    }

    #[test]
    fn empty_results_have_no_metrics() {
        assert!(advanced_metrics(&[]).is_none());
        let metrics = advanced_metrics(&[result("edad", false, 0.2)]).unwrap();
        assert_eq!(metrics.confidence.max, 0.0);
        assert_eq!(metrics.total_matches, 0);
    }
}
