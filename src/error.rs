//! Error types for regdex

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegdexError>;

#[derive(Debug, Error)]
pub enum RegdexError {
    /// Dataset fetch or parse failed. Fatal to initialization; there is no
    /// automatic retry.
    #[error("failed to load dataset: {0}")]
    DatasetLoad(String),

    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("catalog build failed: {0}")]
    BuildFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
