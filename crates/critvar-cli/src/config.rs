//! CLI settings from `critvar.toml`, the environment and flags.
//!
//! ```toml
//! threshold = 0.7
//! variables_file = "config/variables.json"
//! ```
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! `CRITVAR_VARIABLES_FILE`, command-line flags.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use critvar_model::Threshold;
use critvar_standards::DEFAULT_VARIABLES_FILE;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "critvar.toml";

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub threshold: Option<Threshold>,
    pub variables_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).with_context(|| format!("parse config file {}", path.display()))
    }
}

/// Loads the config file.
///
/// An explicit path must exist; the default `critvar.toml` is optional.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if !required && !path.exists() {
        return Ok(FileConfig::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config = FileConfig::parse(&text, &path)?;
    debug!(path = %path.display(), ?config, "loaded config file");
    Ok(config)
}

/// Effective settings for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub threshold: Threshold,
    pub variables_file: PathBuf,
}

/// Values that override the config file, highest precedence last.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Value of `CRITVAR_VARIABLES_FILE`, if set.
    pub env_variables_file: Option<OsString>,
    pub threshold: Option<f64>,
    pub variables_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let threshold = match overrides.threshold {
            Some(value) => Threshold::new(value).context("invalid --threshold")?,
            None => file.threshold.unwrap_or_default(),
        };
        let variables_file = overrides
            .variables_file
            .or_else(|| {
                overrides
                    .env_variables_file
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or(file.variables_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VARIABLES_FILE));
        Ok(Self {
            threshold,
            variables_file,
        })
    }
}
