//! Executive summary of a search outcome.

use serde::Serialize;

use critvar_model::{HIGH_CONFIDENCE, MatchResult, QualityLevel, SearchOutcome};
use critvar_standards::CORE_CRITICAL_VARIABLES;

/// Lower bound of the medium confidence band.
pub const MEDIUM_CONFIDENCE: f64 = 0.7;

/// Found results grouped by confidence band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfidenceBreakdown {
    /// Confidence >= 0.9.
    pub high: usize,
    /// Confidence in [0.7, 0.9).
    pub medium: usize,
    /// Confidence < 0.7.
    pub low: usize,
}

impl ConfidenceBreakdown {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut breakdown = Self::default();
        for result in results.iter().filter(|r| r.found) {
            if result.confidence >= HIGH_CONFIDENCE {
                breakdown.high += 1;
            } else if result.confidence >= MEDIUM_CONFIDENCE {
                breakdown.medium += 1;
            } else {
                breakdown.low += 1;
            }
        }
        breakdown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub coverage_percent: f64,
    pub core_found: usize,
    pub core_total: usize,
    pub mean_confidence: f64,
    pub confidence: ConfidenceBreakdown,
    pub quality: QualityLevel,
    /// Human-readable highlights, most general first.
    pub findings: Vec<String>,
}

impl ReportSummary {
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        let core_found = core_found(&outcome.results);
        Self {
            coverage_percent: outcome.statistics.coverage_percent,
            core_found,
            core_total: CORE_CRITICAL_VARIABLES.len(),
            mean_confidence: outcome.statistics.mean_confidence,
            confidence: ConfidenceBreakdown::from_results(&outcome.results),
            quality: outcome.quality,
            findings: findings(outcome, core_found),
        }
    }
}

fn core_found(results: &[MatchResult]) -> usize {
    results
        .iter()
        .filter(|r| r.found && CORE_CRITICAL_VARIABLES.contains(&r.variable.as_str()))
        .count()
}

fn findings(outcome: &SearchOutcome, core_found: usize) -> Vec<String> {
    let mut findings = Vec::new();

    let coverage = outcome.statistics.coverage_percent;
    findings.push(if coverage >= 80.0 {
        format!("Excellent variable coverage ({coverage:.1}%)")
    } else if coverage >= 60.0 {
        format!("Good variable coverage ({coverage:.1}%)")
    } else {
        format!("Limited variable coverage ({coverage:.1}%)")
    });

    let core_total = CORE_CRITICAL_VARIABLES.len();
    findings.push(
        if core_found == core_total {
            "All core critical variables are present"
        } else if core_found as f64 >= core_total as f64 * 0.75 {
            "Most core critical variables are present"
        } else {
            "Important core critical variables are missing"
        }
        .to_string(),
    );

    let confidence = outcome.statistics.mean_confidence;
    findings.push(
        if confidence >= 0.9 {
            "High confidence in the detected matches"
        } else if confidence >= 0.8 {
            "Moderate confidence in the detected matches"
        } else {
            "Low confidence in some matches"
        }
        .to_string(),
    );

    let diet_notes = outcome
        .results
        .iter()
        .find(|r| r.found && r.diet.is_some())
        .and_then(MatchResult::notes)
        .filter(|notes| !notes.is_empty());
    if let Some(notes) = diet_notes {
        findings.push(format!("Diet information detected: {notes}"));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(variable: &str, confidence: f64) -> MatchResult {
        MatchResult {
            variable: variable.to_string(),
            found: true,
            column: Some(variable.to_string()),
            confidence,
            synonym: Some(variable.to_string()),
            threshold: 0.6,
            diet: None,
        }
    }

    #[test]
    fn confidence_bands() {
        let results = vec![
            found("a", 1.0),
            found("b", 0.9),
            found("c", 0.75),
            found("d", 0.65),
            MatchResult::not_found("e", 0.6),
        ];
        assert_eq!(
            ConfidenceBreakdown::from_results(&results),
            ConfidenceBreakdown {
                high: 2,
                medium: 1,
                low: 1
            }
        );
    }

    #[test]
    fn core_count_ignores_other_variables() {
        let results = vec![
            found("glucosa", 1.0),
            found("bmi", 1.0),
            found("dieta", 1.0),
            MatchResult::not_found("edad", 0.6),
        ];
        assert_eq!(core_found(&results), 2);
    }
}
