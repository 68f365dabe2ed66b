//! AES-256-CBC with PKCS#7 padding and a random IV prefix.
//!
//! Key material is supplied as a single configured string and resolved in
//! order: 32 raw UTF-8 bytes first, then Base64 (standard or URL-safe,
//! missing padding tolerated) decoding to 32 bytes. Anything else fails.

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Size of the initialization vector prefix (AES block size).
pub const IV_SIZE: usize = 16;

/// Required key length after resolution (AES-256).
const KEY_SIZE: usize = 32;

/// A symmetric cipher over opaque payloads.
///
/// Stateless once the key is resolved: one instance can be shared across
/// arbitrarily many concurrent callers. The key is zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Cipher {
    key: [u8; KEY_SIZE],
}

// Never print key material
impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cipher([REDACTED])")
    }
}

impl Cipher {
    /// Build a cipher from the configured key string.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            key: resolve_key(key)?,
        })
    }

    /// Encrypt `plaintext`, returning Base64 of `IV || CIPHERTEXT`.
    ///
    /// A fresh random IV is drawn per call, so two encryptions of the same
    /// plaintext yield different payloads.
    pub fn encrypt(&self, plaintext: &[u8]) -> String {
        let mut iv = [0u8; IV_SIZE];
        rand::thread_rng().fill_bytes(&mut iv);

        let ciphertext =
            Aes256CbcEnc::new(&self.key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut combined = Vec::with_capacity(IV_SIZE + ciphertext.len());
        combined.extend_from_slice(&iv);
        combined.extend_from_slice(&ciphertext);

        STANDARD.encode(combined)
    }

    /// Decrypt a payload previously produced by [`Cipher::encrypt`].
    pub fn decrypt(&self, payload: &str) -> Result<Vec<u8>> {
        let combined = STANDARD
            .decode(payload.trim())
            .map_err(|e| CryptoError::MalformedPayload(e.to_string()))?;

        if combined.len() <= IV_SIZE {
            return Err(CryptoError::PayloadTooShort);
        }

        let (iv, ciphertext) = combined.split_at(IV_SIZE);
        let decryptor = Aes256CbcDec::new_from_slices(&self.key, iv)
            .map_err(|e| CryptoError::MalformedPayload(e.to_string()))?;

        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::MalformedPayload("invalid block padding".to_string()))
    }
}

/// Resolve the configured key string to 32 bytes of key material.
fn resolve_key(key: &str) -> Result<[u8; KEY_SIZE]> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(CryptoError::KeyNotConfigured);
    }

    let raw = trimmed.as_bytes();
    if let Ok(key) = <[u8; KEY_SIZE]>::try_from(raw) {
        return Ok(key);
    }

    let normalized =
        normalize_base64(trimmed).ok_or(CryptoError::KeyInvalidLength(raw.len()))?;
    let decoded = STANDARD
        .decode(normalized)
        .map_err(|_| CryptoError::KeyInvalidLength(raw.len()))?;

    let len = decoded.len();
    <[u8; KEY_SIZE]>::try_from(decoded.as_slice()).map_err(|_| CryptoError::KeyInvalidLength(len))
}

/// Map URL-safe Base64 to the standard alphabet and restore stripped padding.
fn normalize_base64(input: &str) -> Option<String> {
    let substituted = input.replace('-', "+").replace('_', "/");
    match substituted.len() % 4 {
        0 => Some(substituted),
        2 => Some(substituted + "=="),
        3 => Some(substituted + "="),
        _ => None,
    }
}
