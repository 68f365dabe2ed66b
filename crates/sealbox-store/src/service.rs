//! Collaborator-facing secret operations.
//!
//! The hosting application (HTTP layer, CLI, whatever) talks to this facade
//! rather than to a store directly: it normalizes and validates input,
//! generates identifiers, and wraps returned plaintext in a redacting type.

use crate::store::SecretStore;
use crate::{Result, StoreError};
use chrono::Utc;
use sealbox_core::{Secret, SecretId, SecretText};
use std::sync::Arc;
use tracing::debug;

/// Input limits applied at creation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreLimits {
    /// Maximum secret length in characters; `None` means unlimited.
    pub max_secret_chars: Option<usize>,
}

/// The secret lifecycle facade.
///
/// Holds the fully composed store (typically an `EncryptingStore` around a
/// backend chosen from configuration) behind a trait object, so the
/// composition stays a construction-time decision.
pub struct SecretService {
    store: Arc<dyn SecretStore>,
    limits: StoreLimits,
}

impl SecretService {
    /// Build a service over a composed store.
    pub fn new(store: Arc<dyn SecretStore>, limits: StoreLimits) -> Self {
        Self { store, limits }
    }

    /// Store a new secret and return its identifier.
    ///
    /// The text is trimmed first; empty or over-limit input is rejected
    /// with [`StoreError::InvalidSecret`].
    pub async fn create_secret(&self, text: &str) -> Result<SecretId> {
        let normalized = text.trim();
        if normalized.is_empty() {
            return Err(StoreError::InvalidSecret(
                "secret must not be empty".to_string(),
            ));
        }
        if let Some(max) = self.limits.max_secret_chars {
            let chars = normalized.chars().count();
            if chars > max {
                return Err(StoreError::InvalidSecret(format!(
                    "secret must not be longer than {max} characters (got {chars})"
                )));
            }
        }

        let id = SecretId::random();
        self.store
            .create(Secret::new(id, normalized), Utc::now())
            .await?;

        debug!(%id, "secret created");
        Ok(id)
    }

    /// Consume the secret with the given id, destroying it.
    ///
    /// Returns `None` when the secret never existed or was already read.
    pub async fn consume_secret(&self, id: SecretId) -> Result<Option<SecretText>> {
        let consumed = self.store.consume(id).await?;
        if consumed.is_some() {
            debug!(%id, "secret consumed");
        }
        Ok(consumed.map(|secret| SecretText::new(secret.payload)))
    }

    /// Number of live secrets.
    pub async fn count_secrets(&self) -> Result<u64> {
        self.store.count().await
    }
}
