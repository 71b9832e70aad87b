//! Mock assertion verifier
//!
//! For testing purposes - validates synthetic assertions without a provider.

use async_trait::async_trait;

use idgate_core::IdentityClaims;

use crate::error::{Result, VerifyError};
use crate::verifier::IdentityVerifier;

/// Mock verifier for testing
///
/// Accepts assertions in the format:
/// - "subject" - verifies as that subject with a verified email
/// - "unverified:subject" - simulates the email-verification policy failure
/// - "FAIL:message" - returns a validation error with the given message
///
/// The verifier is constructed with the audience its synthetic assertions
/// are considered issued for; a different `expected_audience` at verify time
/// simulates an audience mismatch.
pub struct MockVerifier {
    audience: String,
}

impl MockVerifier {
    /// Create a mock verifier whose assertions carry the given audience
    pub fn new(audience: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for MockVerifier {
    async fn verify(&self, assertion: &str, expected_audience: &str) -> Result<IdentityClaims> {
        if assertion.is_empty() {
            return Err(VerifyError::EmptyToken);
        }

        if let Some(message) = assertion.strip_prefix("FAIL:") {
            return Err(VerifyError::ValidationFailed(message.to_string()));
        }

        if expected_audience != self.audience {
            return Err(VerifyError::InvalidAudience);
        }

        if assertion.starts_with("unverified:") {
            return Err(VerifyError::EmailNotVerified);
        }

        let subject = assertion;
        Ok(IdentityClaims::new(true)
            .with_subject(subject)
            .with_email(format!("{}@example.com", subject))
            .with_audience(self.audience.clone()))
    }

    fn description(&self) -> &str {
        "mock identity verifier"
    }
}
