//! Identity assertion verification
//!
//! This crate validates externally-issued identity assertions (OIDC ID
//! tokens) before the platform will exchange them for an internally-signed
//! session credential.
//!
//! ## Architecture
//!
//! Verification sits behind the [`IdentityVerifier`] trait so the RPC
//! surface can swap implementations:
//!
//! - **`OidcVerifier`**: validates assertions against a trusted issuer using
//!   its published JWKS (fetched over HTTP with a bounded timeout, cached)
//! - **`MockVerifier`**: deterministic in-process verifier for tests
//!
//! ## Usage
//!
//! ```ignore
//! use idgate_verify::{OidcConfig, OidcVerifier, IdentityVerifier};
//!
//! let verifier = OidcVerifier::new(OidcConfig::new(
//!     "https://accounts.google.com",
//!     "https://www.googleapis.com/oauth2/v3/certs",
//! ));
//!
//! let claims = verifier.verify("eyJ...", "my-client-id").await?;
//! println!("subject: {:?}", claims.subject);
//! ```
//!
//! All failure modes carry a diagnostic variant of [`VerifyError`]; the RPC
//! boundary collapses them into one uniform unauthorized outcome so callers
//! cannot enumerate rejection reasons.

pub mod error;
pub mod mock;
pub mod oidc;
pub mod verifier;

pub use error::{Result, VerifyError};
pub use mock::MockVerifier;
pub use oidc::{OidcConfig, OidcVerifier};
pub use verifier::IdentityVerifier;
