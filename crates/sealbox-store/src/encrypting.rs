//! Encryption-at-rest decorator for any secret store.

use crate::store::{ExpiringSecretStore, SecretStore};
use crate::{Result, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sealbox_core::{Secret, SecretId};
use sealbox_crypto::{Cipher, CryptoError};

/// Wraps an inner [`SecretStore`], encrypting payloads on the way in and
/// decrypting them on the way out. Everything else delegates unchanged, so
/// any store can be composed with encryption at construction time.
pub struct EncryptingStore<S> {
    inner: S,
    cipher: Cipher,
}

impl<S> EncryptingStore<S> {
    /// Compose a store with a cipher.
    pub fn new(inner: S, cipher: Cipher) -> Self {
        Self { inner, cipher }
    }
}

#[async_trait]
impl<S: SecretStore> SecretStore for EncryptingStore<S> {
    async fn create(&self, secret: Secret, now: DateTime<Utc>) -> Result<()> {
        let payload = self.cipher.encrypt(secret.payload.as_bytes());
        self.inner.create(Secret::new(secret.id, payload), now).await
    }

    async fn consume(&self, id: SecretId) -> Result<Option<Secret>> {
        let Some(secret) = self.inner.consume(id).await? else {
            return Ok(None);
        };

        // The inner store DID return a payload here, so any decrypt failure
        // is corruption or a key mismatch and must surface as such, never
        // folded into "not found".
        let plaintext = self
            .cipher
            .decrypt(&secret.payload)
            .map_err(StoreError::DataIntegrity)?;
        let plaintext = String::from_utf8(plaintext).map_err(|_| {
            StoreError::DataIntegrity(CryptoError::MalformedPayload(
                "decrypted payload is not valid UTF-8".to_string(),
            ))
        })?;

        Ok(Some(Secret::new(id, plaintext)))
    }

    async fn count(&self) -> Result<u64> {
        // Ciphertext count equals secret count.
        self.inner.count().await
    }
}

#[async_trait]
impl<S: ExpiringSecretStore> ExpiringSecretStore for EncryptingStore<S> {
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        self.inner.delete_older_than(cutoff).await
    }
}
