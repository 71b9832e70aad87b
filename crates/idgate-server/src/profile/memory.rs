//! In-memory profile store
//!
//! Default backend using an in-memory hashmap. Suitable for development and
//! single-instance deployments. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;

use super::{ProfileStore, ProfileStoreError, UserProfile};

/// In-memory profile store implementation
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn upsert(&self, profile: UserProfile) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().unwrap();
        info!(subject = %profile.subject, "Upserting user profile");
        profiles.insert(profile.subject.clone(), profile);
        Ok(())
    }

    async fn get(&self, subject: &str) -> Result<Option<UserProfile>, ProfileStoreError> {
        let profiles = self.profiles.read().unwrap();
        Ok(profiles.get(subject).cloned())
    }

    async fn count(&self) -> Result<usize, ProfileStoreError> {
        let profiles = self.profiles.read().unwrap();
        Ok(profiles.len())
    }
}
