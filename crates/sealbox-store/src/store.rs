//! Storage traits for the secret lifecycle.

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sealbox_core::{Secret, SecretId};

/// Trait for secret storage backends.
///
/// The single hard invariant is per-id exclusivity on consume: once a
/// `consume` call returns a secret, no other call, concurrent or later,
/// can return a secret for that id. Implementations must make removal and
/// return one indivisible step.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Insert a secret. A same-id collision is last-write-wins; with random
    /// 128-bit ids this is practically unreachable.
    ///
    /// `now` is recorded as the creation time by stores that track age;
    /// volatile stores ignore it.
    async fn create(&self, secret: Secret, now: DateTime<Utc>) -> Result<()>;

    /// Atomically remove and return the secret with the given id.
    ///
    /// Returns `Ok(None)` when no such secret exists. Absence is an
    /// expected outcome, not an error.
    async fn consume(&self, id: SecretId) -> Result<Option<Secret>>;

    /// Number of live secrets.
    async fn count(&self) -> Result<u64>;
}

/// A store that tracks creation time and supports bulk expiry.
#[async_trait]
pub trait ExpiringSecretStore: SecretStore {
    /// Delete every secret created before `cutoff` in one bulk operation,
    /// returning how many were removed. Payloads are not inspected.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}
