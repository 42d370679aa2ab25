//! Error types for the Graphseed SDK

use thiserror::Error;

/// Errors that can occur when talking to the graph database
#[derive(Error, Debug)]
pub enum GraphClientError {
    /// Query parsing or execution error reported by the server
    #[error("Query error: {0}")]
    QueryError(String),

    /// Network unreachable, connect timeout, or credentials rejected
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Invalid connection configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP transport error other than a connection failure
    #[error("HTTP error: {0}")]
    HttpError(reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error (config file reads)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type GraphClientResult<T> = Result<T, GraphClientError>;

impl From<reqwest::Error> for GraphClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            GraphClientError::ConnectionError(err.to_string())
        } else {
            GraphClientError::HttpError(err)
        }
    }
}
