//! Error types for payload encryption.

use thiserror::Error;

/// Errors that can occur while resolving a key or transforming a payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The configured key is empty or whitespace-only.
    #[error("encryption key is not configured")]
    KeyNotConfigured,

    /// The key neither is 32 raw bytes nor decodes from Base64 to 32 bytes.
    #[error("encryption key must resolve to exactly 32 bytes, got {0}")]
    KeyInvalidLength(usize),

    /// A decrypt input no longer than the 16-byte IV has no ciphertext.
    #[error("encrypted payload is too short")]
    PayloadTooShort,

    /// Invalid Base64, or the block cipher rejected the payload.
    #[error("malformed encrypted payload: {0}")]
    MalformedPayload(String),
}

/// Convenience result alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
