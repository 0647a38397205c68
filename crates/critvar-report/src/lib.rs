//! Report assembly for critical variable analysis.
//!
//! Combines a dataset profile with a search outcome into an
//! [`AnalysisReport`]: summary findings, confidence bands, per-category
//! coverage, and JSON or CSV exports.

pub mod export;
pub mod metrics;
pub mod report;
pub mod summary;

pub use export::{CSV_HEADER, results_to_csv};
pub use metrics::{
    AdvancedMetrics, CLINICAL_VARIABLES, CategoryCoverage, ConfidenceDistribution,
    DEMOGRAPHIC_VARIABLES, LIFESTYLE_VARIABLES, advanced_metrics,
};
pub use report::{AnalysisReport, REPORT_VERSION, ReportMetadata};
pub use summary::{ConfidenceBreakdown, MEDIUM_CONFIDENCE, ReportSummary};
