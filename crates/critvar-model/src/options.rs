//! Matching configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Similarity threshold used when no configuration overrides it.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Confidence at or above which a match needs no manual review.
pub const HIGH_CONFIDENCE: f64 = 0.9;

/// Minimum similarity a column must reach to be accepted, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Validates `value`; NaN and anything outside `[0.0, 1.0]` is rejected.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when `score` clears this threshold (inclusive).
    pub fn accepts(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options threaded through every matching call.
///
/// Searches never read shared configuration; each one receives its own copy
/// of these options, so adjusting them cannot affect a search in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Minimum similarity for a match to be accepted.
    #[serde(default)]
    pub threshold: Threshold,
}

impl MatchOptions {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// Builds options from a raw threshold value.
    pub fn with_threshold(value: f64) -> Result<Self> {
        Ok(Self::new(Threshold::new(value)?))
    }

    /// Replaces the threshold. On error the previous value is kept.
    pub fn set_threshold(&mut self, value: f64) -> Result<()> {
        self.threshold = Threshold::new(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.01),
            Err(ModelError::InvalidThreshold(1.01))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn rejected_threshold_keeps_previous_value() {
        let mut options = MatchOptions::with_threshold(0.75).unwrap();
        assert!(options.set_threshold(1.5).is_err());
        assert_eq!(options.threshold.value(), 0.75);
        options.set_threshold(0.8).unwrap();
        assert_eq!(options.threshold.value(), 0.8);
    }

    #[test]
    fn default_threshold_is_point_six() {
        assert_eq!(MatchOptions::default().threshold.value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn threshold_deserialization_validates() {
        let ok: MatchOptions = serde_json::from_str(r#"{"threshold":0.7}"#).unwrap();
        assert_eq!(ok.threshold.value(), 0.7);
        let bad = serde_json::from_str::<MatchOptions>(r#"{"threshold":2.0}"#);
        assert!(bad.is_err());
    }
}
