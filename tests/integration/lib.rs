//! Shared helpers for Sealbox integration tests.

use sealbox_crypto::Cipher;
use sealbox_store::{EncryptingStore, MemoryStore, SecretService, SqliteStore, StoreLimits};
use std::sync::Arc;
use tempfile::TempDir;

/// Key used across integration scenarios: 32 raw UTF-8 bytes.
pub const TEST_KEY: &str = "12345678901234567890123456789012";

/// A service over an encrypting volatile store.
pub fn memory_service() -> SecretService {
    let store = EncryptingStore::new(MemoryStore::new(), cipher());
    SecretService::new(Arc::new(store), StoreLimits::default())
}

/// A cipher with the shared test key.
pub fn cipher() -> Cipher {
    Cipher::new(TEST_KEY).expect("test key resolves")
}

/// A durable store in a fresh temp directory. The directory guard must be
/// kept alive for the lifetime of the store.
pub async fn temp_sqlite_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite:{}", dir.path().join("secrets.db").display());
    let store = SqliteStore::connect(&url).await.expect("connect sqlite");
    (dir, store)
}
