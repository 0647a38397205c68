//! CLI library components for critical variable analysis.

pub mod config;
pub mod logging;
