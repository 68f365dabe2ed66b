//! The secret data model and secure plaintext handling.

use crate::id::SecretId;
use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single unit of protected content.
///
/// `payload` is opaque to this type: plaintext at the service boundary,
/// Base64 ciphertext at the store boundary. Which one it holds depends on
/// where in the composition the value lives. A secret has no update
/// operation; it is created once and destroyed by the first consume (or by
/// the retention sweep).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    /// Unique identifier, immutable once assigned.
    pub id: SecretId,

    /// Opaque content.
    pub payload: String,
}

impl Secret {
    /// Create a secret from an id and payload.
    pub fn new(id: SecretId, payload: impl Into<String>) -> Self {
        Self {
            id,
            payload: payload.into(),
        }
    }
}

/// Sensitive text that must not outlive its use: the plaintext handed back
/// by a consume, or the cipher key read from configuration.
///
/// The backing string is zeroed on drop. Debug and Display both emit
/// `[REDACTED]`, so a `SecretText` embedded in a config struct or an error
/// can never leak through logging.
///
/// Deserializes from a plain string so it can sit directly in config
/// structs. There is deliberately no `Serialize` impl: nothing in this
/// system writes secrets back out, and serializing would defeat the
/// redaction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretText {
    value: String,
}

impl SecretText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Expose the plaintext. Callers must not log or persist the result.
    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }
}

impl fmt::Debug for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl PartialEq for SecretText {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.value.as_bytes(), other.value.as_bytes())
    }
}

impl Eq for SecretText {}

impl<'de> Deserialize<'de> for SecretText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl From<String> for SecretText {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Comparison whose running time depends only on the input lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
