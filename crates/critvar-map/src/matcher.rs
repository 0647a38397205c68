//! Per-variable matching policies.

use critvar_model::{
    BucketMatch, DietBreakdown, DietCategory, DietDetails, MatchOptions, MatchPolicy, MatchResult,
    VariableDefinition,
};
use tracing::trace;

use crate::candidates::Candidate;
use crate::patterns::classify_diet_column;
use crate::score::similarity;
use crate::utils::{normalize_text, round_to};

/// Notes attached to a diet result when no column cleared the threshold.
pub const DIET_NO_MATCH_NOTE: &str = "No diet matches found";

struct Synonym<'a> {
    original: &'a str,
    normalized: String,
}

fn normalize_synonyms(synonyms: &[String]) -> Vec<Synonym<'_>> {
    synonyms
        .iter()
        .map(|s| Synonym {
            original: s.as_str(),
            normalized: normalize_text(s),
        })
        .collect()
}

/// Matches one variable using the policy recorded on its definition.
pub fn match_variable(
    definition: &VariableDefinition,
    candidates: &[Candidate],
    options: &MatchOptions,
) -> MatchResult {
    match definition.policy {
        MatchPolicy::Standard => {
            match_standard(&definition.key, &definition.synonyms, candidates, options)
        }
        MatchPolicy::DietAggregate => {
            match_diet(&definition.key, &definition.synonyms, candidates, options)
        }
    }
}

/// Single best `(column, synonym)` pair for a variable.
///
/// Candidates are the outer loop and synonyms the inner one; a pair only
/// replaces the current best when its score is strictly greater, so the
/// first pair seen wins ties. The rounded best score is reported even when
/// it falls short of the threshold, and acceptance is decided on that
/// rounded score so a found result never reports less than the threshold.
pub fn match_standard(
    variable: &str,
    synonyms: &[String],
    candidates: &[Candidate],
    options: &MatchOptions,
) -> MatchResult {
    let threshold = options.threshold;
    let synonyms = normalize_synonyms(synonyms);

    let mut best_score = 0.0;
    let mut best: Option<(&Candidate, &str)> = None;
    for candidate in candidates {
        for synonym in &synonyms {
            let score = similarity(&candidate.normalized, &synonym.normalized);
            if score > best_score {
                best_score = score;
                best = Some((candidate, synonym.original));
            }
        }
    }

    let Some((candidate, synonym)) = best else {
        return MatchResult::not_found(variable, threshold.value());
    };
    trace!(
        variable,
        column = %candidate.original,
        synonym,
        score = best_score,
        "best standard match"
    );
    let confidence = round_to(best_score, 3);
    MatchResult {
        variable: variable.to_string(),
        found: threshold.accepts(confidence),
        column: Some(candidate.original.clone()),
        confidence,
        synonym: Some(synonym.to_string()),
        threshold: threshold.value(),
        diet: None,
    }
}

/// Every column above the threshold, grouped into fruit, vegetable and
/// general diet buckets.
///
/// Each candidate contributes at most one entry: the synonym with its
/// highest accepted score (first seen on ties). Scores are accepted on
/// their 3-decimal rounding, the precision confidences are reported at.
/// The representative column is the highest-scoring entry scanning fruit,
/// vegetable, then general.
pub fn match_diet(
    variable: &str,
    synonyms: &[String],
    candidates: &[Candidate],
    options: &MatchOptions,
) -> MatchResult {
    let threshold = options.threshold;
    let synonyms = normalize_synonyms(synonyms);

    let mut breakdown = DietBreakdown::default();
    for candidate in candidates {
        let mut accepted: Option<(f64, &str)> = None;
        for synonym in &synonyms {
            let score = similarity(&candidate.normalized, &synonym.normalized);
            if !threshold.accepts(round_to(score, 3)) {
                continue;
            }
            if accepted.is_none_or(|(best, _)| score > best) {
                accepted = Some((score, synonym.original));
            }
        }
        if let Some((score, synonym)) = accepted {
            let category = classify_diet_column(&candidate.normalized);
            trace!(variable, column = %candidate.original, %category, score, "diet column");
            breakdown.bucket_mut(category).push(BucketMatch {
                column: candidate.original.clone(),
                score,
                synonym: synonym.to_string(),
            });
        }
    }

    let mut representative: Option<&BucketMatch> = None;
    for entry in breakdown.iter() {
        if representative.is_none_or(|best| entry.score > best.score) {
            representative = Some(entry);
        }
    }

    let Some(best) = representative else {
        return MatchResult {
            diet: Some(DietDetails {
                notes: DIET_NO_MATCH_NOTE.to_string(),
                breakdown: DietBreakdown::default(),
            }),
            ..MatchResult::not_found(variable, threshold.value())
        };
    };

    let column = best.column.clone();
    let confidence = round_to(best.score, 3);
    let synonym = best.synonym.clone();
    let notes = diet_notes(&breakdown);
    MatchResult {
        variable: variable.to_string(),
        found: true,
        column: Some(column),
        confidence,
        synonym: Some(synonym),
        threshold: threshold.value(),
        diet: Some(DietDetails { notes, breakdown }),
    }
}

/// Summarizes non-empty buckets, e.g.
/// `Fruits detected: 2 column(s); Vegetables detected: 1 column(s)`.
pub fn diet_notes(breakdown: &DietBreakdown) -> String {
    let mut notes = Vec::new();
    for category in [
        DietCategory::Fruit,
        DietCategory::Vegetable,
        DietCategory::General,
    ] {
        let count = breakdown.bucket(category).len();
        if count == 0 {
            continue;
        }
        let label = match category {
            DietCategory::Fruit => "Fruits detected",
            DietCategory::Vegetable => "Vegetables detected",
            DietCategory::General => "General diet",
        };
        notes.push(format!("{label}: {count} column(s)"));
    }
    notes.join("; ")
}
