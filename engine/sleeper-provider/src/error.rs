//! Error types for the data provider

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sleeper API returned {status} for {endpoint}")]
    Status { endpoint: String, status: reqwest::StatusCode },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Player cache error at {}: {source}", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ProviderError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ProviderError::InvalidConfig { message: message.into() }
    }

    /// True for failures reaching the upstream (as opposed to bad local state)
    pub fn is_transport(&self) -> bool {
        matches!(self, ProviderError::Http(_) | ProviderError::Status { .. })
    }
}
