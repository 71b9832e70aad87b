//! Core types for the idgate IAM service
//!
//! This crate holds the building blocks of the token exchange:
//!
//! - `IdentityClaims`: the normalized claim set extracted from an
//!   externally-issued identity assertion
//! - `SessionClaims`: the claim set carried by an internally-issued
//!   session credential
//! - `SessionIssuer`: mints RS256-signed session credentials from a
//!   process-wide signing key
//!
//! Verification of external assertions lives in `idgate-verify`; the
//! RPC surface lives in `idgate-server`.

pub mod claims;
pub mod error;
pub mod issuer;

pub use claims::{IdentityClaims, SessionClaims};
pub use error::{CoreError, Result};
pub use issuer::{IssuerConfig, SessionIssuer, SessionKey};
