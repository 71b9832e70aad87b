//! Error types for the idgate core

use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while minting session credentials
#[derive(Error, Debug)]
pub enum CoreError {
    /// Subject identifier was empty
    #[error("subject must not be empty")]
    EmptySubject,

    /// Signing key could not be parsed
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// Token signing failed
    #[error("credential signing failed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for CoreError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        CoreError::Signing(err.to_string())
    }
}
