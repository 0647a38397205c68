//! Search result types shared by the matching engine and the report layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of matching one variable against a dataset's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Variable key this result belongs to.
    pub variable: String,
    /// True when the best score cleared the threshold.
    pub found: bool,
    /// Best-matching column, if any candidate existed.
    pub column: Option<String>,
    /// Best score rounded to three decimals.
    pub confidence: f64,
    /// Synonym that produced the best score.
    pub synonym: Option<String>,
    /// Threshold the search ran with.
    pub threshold: f64,
    /// Extra detail for diet variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietDetails>,
}

impl MatchResult {
    /// A result for a variable with nothing to compare against.
    pub fn not_found(variable: impl Into<String>, threshold: f64) -> Self {
        Self {
            variable: variable.into(),
            found: false,
            column: None,
            confidence: 0.0,
            synonym: None,
            threshold,
            diet: None,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        self.diet.as_ref().map(|d| d.notes.as_str())
    }
}

/// Diet columns grouped by food category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietDetails {
    /// Human-readable per-category counts.
    pub notes: String,
    pub breakdown: DietBreakdown,
}

/// Category a diet column falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    Fruit,
    Vegetable,
    General,
}

impl DietCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::General => "general",
        }
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column accepted for a diet variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketMatch {
    pub column: String,
    /// Unrounded similarity score.
    pub score: f64,
    pub synonym: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietBreakdown {
    pub fruit: Vec<BucketMatch>,
    pub vegetable: Vec<BucketMatch>,
    pub general: Vec<BucketMatch>,
}

impl DietBreakdown {
    pub fn bucket(&self, category: DietCategory) -> &[BucketMatch] {
        match category {
            DietCategory::Fruit => &self.fruit,
            DietCategory::Vegetable => &self.vegetable,
            DietCategory::General => &self.general,
        }
    }

    pub fn bucket_mut(&mut self, category: DietCategory) -> &mut Vec<BucketMatch> {
        match category {
            DietCategory::Fruit => &mut self.fruit,
            DietCategory::Vegetable => &mut self.vegetable,
            DietCategory::General => &mut self.general,
        }
    }

    /// All entries in fruit, vegetable, general order.
    pub fn iter(&self) -> impl Iterator<Item = &BucketMatch> {
        self.fruit
            .iter()
            .chain(self.vegetable.iter())
            .chain(self.general.iter())
    }

    pub fn total(&self) -> usize {
        self.fruit.len() + self.vegetable.len() + self.general.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Aggregate numbers for one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStatistics {
    pub total_variables: usize,
    pub found_variables: usize,
    pub missing_variables: Vec<String>,
    /// Found over total, as a percentage with one decimal.
    pub coverage_percent: f64,
    /// Mean confidence of found variables, three decimals.
    pub mean_confidence: f64,
    pub threshold: f64,
}

/// Overall dataset quality derived from coverage and mean confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one search produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<MatchResult>,
    pub statistics: SearchStatistics,
    pub suggestions: Vec<String>,
    pub quality: QualityLevel,
}
