//! Error types for assertion verification

use thiserror::Error;

/// Result type for verification operations
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors that can occur while verifying an identity assertion
///
/// These variants exist for server-side diagnostics only. The RPC boundary
/// maps every one of them to the same uniform unauthorized outcome.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Assertion token was empty
    #[error("Assertion token is empty")]
    EmptyToken,

    /// Assertion is not a well-formed token
    #[error("Invalid assertion format: {0}")]
    InvalidFormat(String),

    /// Token algorithm is not in the allowed set
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// No key in the issuer's JWKS matches the token
    #[error("Key not found: {0}")]
    UnknownKey(String),

    /// Signature did not verify under the issuer's key
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Assertion has expired
    #[error("Assertion expired")]
    Expired,

    /// Assertion is not yet valid
    #[error("Assertion not yet valid")]
    NotYetValid,

    /// Audience claim does not match the expected audience
    #[error("Invalid audience")]
    InvalidAudience,

    /// Issuer claim does not match the trusted issuer
    #[error("Invalid issuer")]
    InvalidIssuer,

    /// JWKS could not be fetched from the issuer
    #[error("Failed to fetch JWKS: {0}")]
    JwksFetch(String),

    /// Email-verification flag was absent or false
    #[error("Email not verified")]
    EmailNotVerified,

    /// Catch-all validation failure
    #[error("Assertion validation failed: {0}")]
    ValidationFailed(String),
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            ErrorKind::ImmatureSignature => VerifyError::NotYetValid,
            ErrorKind::InvalidSignature => VerifyError::InvalidSignature(err.to_string()),
            ErrorKind::InvalidAudience => VerifyError::InvalidAudience,
            ErrorKind::InvalidIssuer => VerifyError::InvalidIssuer,
            ErrorKind::InvalidToken => VerifyError::InvalidFormat(err.to_string()),
            _ => VerifyError::ValidationFailed(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::JwksFetch(err.to_string())
    }
}
