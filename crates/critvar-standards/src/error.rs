//! Error types for the variable store.

use std::path::PathBuf;

use critvar_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading or changing the variable store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Variable key is not in the catalogue.
    #[error("variable not found: {0}")]
    UnknownVariable(String),

    /// Synonym is not listed for the variable.
    #[error("synonym '{synonym}' not found for variable '{variable}'")]
    UnknownSynonym { variable: String, synonym: String },

    /// Removing the synonym would leave the variable without any.
    #[error("cannot remove the last synonym of variable '{0}'")]
    LastSynonym(String),

    /// Synonym is empty after trimming.
    #[error("synonym must not be empty")]
    EmptySynonym,

    /// Definition rejected by the model (empty key, no synonyms, duplicate).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Stored catalogue does not have the expected shape.
    #[error("invalid variable file {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("failed to read variable file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write variable file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize variables: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
