//! Error types for secret storage.
//!
//! An absent secret is not an error: `consume` returns `Ok(None)` so callers
//! can tell "never existed / already read" apart from real failures.

use sealbox_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted secret failed validation (empty after trimming, or over
    /// the configured length limit).
    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    /// The inner store returned a payload that could not be decrypted.
    ///
    /// This signals key mismatch or corruption, never legitimate absence,
    /// and is deliberately kept distinct from a `None` consume result.
    #[error("stored payload could not be decrypted: {0}")]
    DataIntegrity(#[source] CryptoError),

    /// Storage-layer failure; propagated to the caller as-is.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
