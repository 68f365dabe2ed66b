//! Secret persistence for Sealbox.
//!
//! The [`SecretStore`] trait has two implementations: [`MemoryStore`], a
//! volatile in-process map, and [`SqliteStore`], a durable table-backed
//! store whose consume is a single atomic delete-and-return statement.
//! [`EncryptingStore`] wraps any store with encryption at rest, and
//! [`SecretService`] is the facade the hosting application talks to.

pub mod encrypting;
pub mod error;
pub mod memory;
pub mod service;
pub mod sqlite;
pub mod store;

pub use encrypting::EncryptingStore;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use service::{SecretService, StoreLimits};
pub use sqlite::SqliteStore;
pub use store::{ExpiringSecretStore, SecretStore};
