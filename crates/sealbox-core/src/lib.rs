//! # sealbox-core
//!
//! Core types, configuration, and utilities shared across Sealbox crates:
//!
//! - **Identifiers**: [`SecretId`], a 128-bit id with a compact URL-safe encoding
//! - **Types**: [`Secret`] and the zero-on-drop [`SecretText`] plaintext wrapper
//! - **Configuration**: validated config structs consumed by the store and sweeper

pub mod config;
pub mod error;
pub mod id;
pub mod secret;

// Re-exports for convenience
pub use config::{CryptoConfig, RetentionConfig, SealboxConfig, StorageConfig, StorageMode};
pub use error::ConfigError;
pub use id::SecretId;
pub use secret::{Secret, SecretText};
