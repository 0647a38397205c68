//! Full analysis report.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use critvar_ingest::DatasetProfile;
use critvar_model::SearchOutcome;

use crate::export::results_to_csv;
use crate::metrics::{AdvancedMetrics, advanced_metrics};
use crate::summary::ReportSummary;

/// Version of the report layout.
pub const REPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    /// RFC 3339 timestamp, UTC, second precision.
    pub generated_at: String,
    pub report_version: String,
    pub generator: String,
}

impl ReportMetadata {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            generated_at: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            report_version: REPORT_VERSION.to_string(),
            generator: format!("critvar {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Everything known about one analysed dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub dataset: DatasetProfile,
    pub analysis: SearchOutcome,
    pub summary: ReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AdvancedMetrics>,
}

impl AnalysisReport {
    pub fn new(dataset: DatasetProfile, analysis: SearchOutcome) -> Self {
        Self::at(dataset, analysis, Utc::now())
    }

    /// Builds a report stamped with `timestamp`.
    pub fn at(dataset: DatasetProfile, analysis: SearchOutcome, timestamp: DateTime<Utc>) -> Self {
        let summary = ReportSummary::from_outcome(&analysis);
        let metrics = advanced_metrics(&analysis.results);
        Self {
            metadata: ReportMetadata::at(timestamp),
            dataset,
            analysis,
            summary,
            metrics,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize analysis report")
    }

    pub fn to_csv(&self) -> Result<String> {
        results_to_csv(&self.analysis.results)
    }
}
