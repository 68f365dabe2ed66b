//! Configuration consumed by the secret lifecycle core.
//!
//! Parsing config files is the hosting application's job; this module only
//! defines the shapes and validates them. Validation failures are fatal at
//! startup ([`ConfigError`]), never retried.

use crate::error::ConfigError;
use crate::secret::SecretText;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum allowed sweep interval.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Maximum allowed sweep interval (365 days).
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Top-level configuration for the secret store core.
///
/// Deserialize only: config flows into the process, never back out, and the
/// embedded cipher key must not be serializable.
#[derive(Debug, Clone, Deserialize)]
pub struct SealboxConfig {
    /// Cipher key configuration.
    pub crypto: CryptoConfig,

    /// Storage backend selection and limits.
    pub storage: StorageConfig,

    /// Retention sweep settings. Only meaningful for durable storage;
    /// absent means no sweep is scheduled.
    #[serde(default)]
    pub retention: Option<RetentionConfig>,
}

impl SealboxConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.crypto.validate()?;
        self.storage.validate()?;
        if let Some(retention) = &self.retention {
            retention.validate()?;
        }
        Ok(())
    }
}

/// Cipher key configuration.
///
/// The key string is resolved to 32 bytes by the cipher itself; this level
/// only rejects a missing key.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptoConfig {
    /// Key material: either 32 raw UTF-8 bytes or Base64 decoding to 32 bytes.
    pub key: SecretText,
}

impl CryptoConfig {
    /// Reject an empty or whitespace-only key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.expose().trim().is_empty() {
            return Err(ConfigError::MissingKey);
        }
        Ok(())
    }
}

/// Which storage backend persists secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// In-process map; secrets do not survive a restart.
    Memory,
    /// SQLite table; supports the retention sweep.
    Sqlite,
}

/// Storage backend selection and input limits.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Backend to use.
    pub mode: StorageMode,

    /// Connection string for the sqlite backend. Ignored in memory mode.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Optional maximum secret length in characters. `None` means unlimited.
    #[serde(default)]
    pub max_secret_chars: Option<usize>,
}

impl StorageConfig {
    /// Require a database URL when the durable backend is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == StorageMode::Sqlite && self.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }
}

/// Settings for the retention sweep.
#[derive(Debug, Clone, Deserialize)]
pub struct RetentionConfig {
    /// How many days a secret may live before it is eligible for deletion.
    pub days_to_keep: u32,

    /// How often the sweep runs.
    pub sweep_interval: Duration,
}

impl RetentionConfig {
    /// Enforce the documented bounds: at least one day kept, interval
    /// between one second and 365 days.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days_to_keep < 1 {
            return Err(ConfigError::RetentionTooShort);
        }
        if self.sweep_interval < MIN_SWEEP_INTERVAL || self.sweep_interval > MAX_SWEEP_INTERVAL {
            return Err(ConfigError::SweepIntervalOutOfRange(self.sweep_interval));
        }
        Ok(())
    }
}
