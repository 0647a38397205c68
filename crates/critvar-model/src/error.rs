use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
    #[error("variable key must not be empty")]
    EmptyVariableKey,
    #[error("variable '{0}' needs at least one non-empty synonym")]
    EmptySynonyms(String),
    #[error("variable '{0}' is already defined")]
    DuplicateVariable(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
