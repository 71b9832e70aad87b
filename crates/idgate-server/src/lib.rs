//! IAM Server
//!
//! The idgate IAM server is the token-exchange endpoint that:
//! - Verifies externally-issued identity assertions against a trusted
//!   identity provider
//! - Enforces the email-verification policy gate
//! - Issues internally-signed session credentials downstream services trust
//!
//! ## API Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check with verifier info
//! - `POST /v1/iam/login` - Exchange an identity assertion for a session credential
//! - `POST /v1/iam/whoami` - Placeholder caller identity
//! - `POST /v1/iam/register` - Registration (not implemented)
//!
//! Every authorization-related failure on the login path collapses to one
//! uniform unauthorized response; rejection reasons are only visible in
//! server-side logs.

pub mod api;
pub mod profile;

pub use api::create_router;
pub use api::handlers::{AppState, IamConfig};
pub use profile::{MemoryProfileStore, ProfileStore, UserProfile};
