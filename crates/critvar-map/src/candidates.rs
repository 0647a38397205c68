//! Precomputed column candidates.

use crate::utils::normalize_text;

/// A dataset column paired with its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Column name exactly as it appears in the dataset header.
    pub original: String,
    /// Comparison form produced by [`normalize_text`].
    pub normalized: String,
}

impl Candidate {
    pub fn new(column: impl Into<String>) -> Self {
        let original = column.into();
        let normalized = normalize_text(&original);
        Self {
            original,
            normalized,
        }
    }
}

/// Normalizes every column once, preserving order.
///
/// Duplicate and empty names are kept; each stays an independent candidate.
pub fn build_candidates<S: AsRef<str>>(columns: &[S]) -> Vec<Candidate> {
    columns
        .iter()
        .map(|column| Candidate::new(column.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_duplicates_and_empty_names() {
        let candidates = build_candidates(&["Edad", "", "Edad", "Peso (kg)"]);
        let normalized: Vec<&str> = candidates.iter().map(|c| c.normalized.as_str()).collect();
        assert_eq!(normalized, vec!["edad", "", "edad", "peso kg"]);
        assert_eq!(candidates[3].original, "Peso (kg)");
    }

}
