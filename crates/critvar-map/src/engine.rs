//! Search orchestration over a whole variable catalogue.

use critvar_model::{
    MatchOptions, MatchResult, ModelError, SearchOutcome, Threshold, VariableCatalog,
    VariableDefinition,
};
use tracing::{debug, info, warn};

use crate::candidates::{Candidate, build_candidates};
use crate::matcher::match_variable;
use crate::stats::{classify_quality, compute_statistics, improvement_suggestions};

/// Engine for locating critical variables among dataset columns.
///
/// Each variable is matched independently and greedily: two variables may
/// claim the same column, and one variable's outcome never affects another.
/// The engine owns a copy of its [`MatchOptions`]; callers that need a
/// different threshold for a single search pass it to
/// [`SearchEngine::search_with`] instead of mutating the engine.
///
/// # Example
///
/// ```ignore
/// use critvar_map::SearchEngine;
///
/// let engine = SearchEngine::default();
/// let outcome = engine.analyze(&catalog, &["Glucose".to_string(), "BMI".to_string()]);
/// println!("coverage: {}%", outcome.statistics.coverage_percent);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    options: MatchOptions,
}

impl SearchEngine {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn threshold(&self) -> Threshold {
        self.options.threshold
    }

    /// Adjusts the threshold used by later searches.
    ///
    /// Out-of-range values are rejected and the current threshold is kept.
    pub fn set_threshold(&mut self, value: f64) -> Result<(), ModelError> {
        let previous = self.options.threshold;
        self.options.set_threshold(value).inspect_err(|_| {
            warn!(requested = value, kept = %previous, "rejected similarity threshold");
        })
    }

    /// Matches every variable in catalogue order with the engine's options.
    pub fn search<S: AsRef<str>>(
        &self,
        catalog: &VariableCatalog,
        columns: &[S],
    ) -> Vec<MatchResult> {
        self.search_with(catalog, columns, &self.options)
    }

    /// Matches every variable in catalogue order with explicit options.
    pub fn search_with<S: AsRef<str>>(
        &self,
        catalog: &VariableCatalog,
        columns: &[S],
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        let candidates = build_candidates(columns);
        search_candidates(catalog, &candidates, options)
    }

    /// Matches a single variable.
    pub fn match_one<S: AsRef<str>>(
        &self,
        definition: &VariableDefinition,
        columns: &[S],
    ) -> MatchResult {
        let candidates = build_candidates(columns);
        match_variable(definition, &candidates, &self.options)
    }

    /// Runs a search and derives statistics, suggestions and quality.
    pub fn analyze<S: AsRef<str>>(
        &self,
        catalog: &VariableCatalog,
        columns: &[S],
    ) -> SearchOutcome {
        self.analyze_with(catalog, columns, &self.options)
    }

    pub fn analyze_with<S: AsRef<str>>(
        &self,
        catalog: &VariableCatalog,
        columns: &[S],
        options: &MatchOptions,
    ) -> SearchOutcome {
        let results = self.search_with(catalog, columns, options);
        let statistics = compute_statistics(&results, options);
        let suggestions = improvement_suggestions(&results, columns);
        let quality = classify_quality(statistics.coverage_percent, statistics.mean_confidence);
        info!(
            variables = statistics.total_variables,
            found = statistics.found_variables,
            coverage = statistics.coverage_percent,
            mean_confidence = statistics.mean_confidence,
            %quality,
            "variable search complete"
        );
        SearchOutcome {
            results,
            statistics,
            suggestions,
            quality,
        }
    }
}

/// Matches every variable against prebuilt candidates.
pub fn search_candidates(
    catalog: &VariableCatalog,
    candidates: &[Candidate],
    options: &MatchOptions,
) -> Vec<MatchResult> {
    catalog
        .iter()
        .map(|definition| {
            let result = match_variable(definition, candidates, options);
            debug!(
                variable = %definition.key,
                policy = %definition.policy,
                found = result.found,
                column = result.column.as_deref().unwrap_or("-"),
                confidence = result.confidence,
                "matched variable"
            );
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_threshold_keeps_previous() {
        let mut engine = SearchEngine::default();
        engine.set_threshold(0.8).unwrap();
        assert!(engine.set_threshold(1.2).is_err());
        assert!(engine.set_threshold(-0.01).is_err());
        assert_eq!(engine.threshold().value(), 0.8);
    }

    #[test]
    fn search_with_does_not_touch_engine_options() {
        let engine = SearchEngine::default();
        let catalog = VariableCatalog::from_pairs([("glucosa", vec!["azucar en sangre"])]).unwrap();
        let strict = MatchOptions::with_threshold(0.95).unwrap();
        let strict_results = engine.search_with(&catalog, &["azucar_sangre"], &strict);
        let default_results = engine.search(&catalog, &["azucar_sangre"]);
        assert!(!strict_results[0].found);
        assert!(default_results[0].found);
        assert_eq!(engine.threshold().value(), 0.6);
    }
}
