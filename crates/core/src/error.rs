use thiserror::Error;

pub type ScopeResult<T> = Result<T, ScopeError>;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Campaign not found: {0}")]
    NotFound(String),

    #[error("Report rendering error: {0}")]
    Report(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
