//! Error types for dataset generation and artifact export

use thiserror::Error;

/// Errors that can occur while generating or persisting a dataset
#[derive(Error, Debug)]
pub enum GraphSeedError {
    /// Invalid dataset profile (empty vocabulary, negative window, ...)
    #[error("Profile error: {0}")]
    Profile(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Artifact read/write error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphSeedResult<T> = Result<T, GraphSeedError>;
