//! Volatile in-process secret store.

use crate::store::SecretStore;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use sealbox_core::{Secret, SecretId};

/// An in-memory secret store.
///
/// Secrets do not survive a restart and carry no age metadata, so the
/// retention sweep does not apply. Safe for concurrent use: `consume` rides
/// on the map's atomic remove, so exactly one of any number of concurrent
/// consumers for the same id observes the secret.
pub struct MemoryStore {
    entries: DashMap<SecretId, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn create(&self, secret: Secret, _now: DateTime<Utc>) -> Result<()> {
        // Last write wins on an id collision.
        self.entries.insert(secret.id, secret.payload);
        Ok(())
    }

    async fn consume(&self, id: SecretId) -> Result<Option<Secret>> {
        Ok(self
            .entries
            .remove(&id)
            .map(|(id, payload)| Secret::new(id, payload)))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.entries.len() as u64)
    }
}
