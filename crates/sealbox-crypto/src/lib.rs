//! AES-256-CBC encryption-at-rest for Sealbox payloads.
//!
//! The wire format is a Base64 string of `IV || CIPHERTEXT`: every encrypt
//! call draws a fresh random 16-byte IV, so identical plaintexts never
//! produce identical payloads.

pub mod cipher;
pub mod error;

pub use cipher::{Cipher, IV_SIZE};
pub use error::{CryptoError, Result};
