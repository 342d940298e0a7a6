//! Error types for the rippled RPC client

use thiserror::Error;

use crate::status::Status;

/// Main error type for the rippled RPC client
#[derive(Error, Debug)]
pub enum RippledError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Request encoding error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Undecodable response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Request rejected by server: {0}")]
    Protocol(Status),
}

impl RippledError {
    /// The server could not be reached or did not answer with a usable body.
    pub fn is_transport(&self) -> bool {
        matches!(self, RippledError::Transport(_) | RippledError::Decode { .. })
    }

    /// The server answered, but the operation did not succeed.
    pub fn is_protocol(&self) -> bool {
        matches!(self, RippledError::Protocol(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RippledError>;
