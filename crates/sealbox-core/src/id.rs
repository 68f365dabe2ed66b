//! Secret identifiers and their compact URL-safe encoding.
//!
//! A [`SecretId`] is a 128-bit random value. Its canonical external form is
//! 22 characters of URL-safe Base64 (RFC 4648 `base64url`, no padding); the
//! 36-character hyphenated UUID form is accepted as an input fallback.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Length of the compact encoding: 16 bytes of Base64 without padding.
pub const ENCODED_LEN: usize = 22;

/// A unique identifier for a secret.
///
/// Never nil: construction rejects the all-zero value, so any `SecretId`
/// in circulation refers to a real, generated identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretId(Uuid);

impl SecretId {
    /// Generate a fresh identifier from 128 cryptographically random bits.
    pub fn random() -> Self {
        // Version-4 UUIDs always carry version/variant bits, so the result
        // cannot be nil.
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, rejecting the nil value.
    pub fn from_uuid(value: Uuid) -> Option<Self> {
        if value.is_nil() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Reconstruct an id from its 16 raw bytes, rejecting all-zero input.
    pub fn from_bytes(bytes: [u8; 16]) -> Option<Self> {
        Self::from_uuid(Uuid::from_bytes(bytes))
    }

    /// The 16 raw bytes of the identifier.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The underlying UUID value.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Encode as the 22-character URL-safe token.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.as_bytes())
    }

    /// Parse an identifier from text.
    ///
    /// Accepts either the 22-character compact token or a hyphenated UUID
    /// string. Any other input yields `None`; this never panics.
    pub fn decode(text: &str) -> Option<Self> {
        let text = text.trim();

        if text.len() == ENCODED_LEN {
            if !text
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
            {
                return None;
            }
            let bytes = URL_SAFE_NO_PAD.decode(text).ok()?;
            let bytes: [u8; 16] = bytes.try_into().ok()?;
            return Self::from_bytes(bytes);
        }

        let parsed = Uuid::try_parse(text).ok()?;
        Self::from_uuid(parsed)
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretId({})", self.encode())
    }
}

impl Serialize for SecretId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for SecretId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        SecretId::decode(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid secret id: {text}")))
    }
}
