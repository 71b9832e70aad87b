//! User profile storage abstraction
//!
//! After a successful exchange the server records the claim data the
//! provider asserted about the user. Profile data never influences the
//! issuance decision; the store is a post-issuance hook. This module
//! provides a trait-based abstraction so an in-memory backend (default)
//! can later be replaced with a persistent one.

pub mod memory;

pub use memory::MemoryProfileStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

use idgate_core::IdentityClaims;

/// Error type for profile store operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Profile backend error: {0}")]
    Backend(String),
}

/// Profile record for an authenticated user
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Subject identifier from the verified assertion
    pub subject: String,
    /// Email address
    pub email: Option<String>,
    /// Family name
    pub family_name: Option<String>,
    /// Given name
    pub given_name: Option<String>,
    /// Full display name
    pub full_name: Option<String>,
    /// Profile picture URI
    pub picture: Option<String>,
    /// When this record was last written
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile record from a verified claim set
    pub fn from_claims(subject: impl Into<String>, claims: &IdentityClaims) -> Self {
        Self {
            subject: subject.into(),
            email: claims.email.clone(),
            family_name: claims.family_name.clone(),
            given_name: claims.given_name.clone(),
            full_name: claims.full_name.clone(),
            picture: claims.picture.clone(),
            updated_at: Utc::now(),
        }
    }
}

/// Storage backend trait for user profiles
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ProfileStore: Send + Sync + Debug {
    /// Insert or update a profile record, keyed by subject
    async fn upsert(&self, profile: UserProfile) -> Result<(), ProfileStoreError>;

    /// Look up a profile by subject
    async fn get(&self, subject: &str) -> Result<Option<UserProfile>, ProfileStoreError>;

    /// Number of stored profiles
    async fn count(&self) -> Result<usize, ProfileStoreError>;
}
