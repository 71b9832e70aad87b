//! The verification seam between the RPC surface and identity providers

use async_trait::async_trait;
use idgate_core::IdentityClaims;

use crate::error::Result;

/// Trait for identity assertion verifiers
///
/// An implementation validates an externally-issued assertion against its
/// trust anchor and extracts a normalized claim set. Verification is a pure
/// check: no local state changes beyond diagnostic logging and key-material
/// caching.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify an assertion and extract its claims
    ///
    /// # Arguments
    /// * `assertion` - The raw assertion token string
    /// * `expected_audience` - The audience the assertion must be issued for
    ///
    /// # Returns
    /// * `Ok(IdentityClaims)` - Verified claims with `email_verified == true`
    /// * `Err(VerifyError)` - If any validation or policy check fails
    async fn verify(&self, assertion: &str, expected_audience: &str) -> Result<IdentityClaims>;

    /// Get a description of this verifier (for logging)
    fn description(&self) -> &str {
        "identity verifier"
    }
}
