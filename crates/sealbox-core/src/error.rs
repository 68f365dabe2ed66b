//! Error types for Sealbox core.

use std::time::Duration;
use thiserror::Error;

/// Configuration-related errors.
///
/// All of these are fatal at startup; nothing in this crate retries a bad
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("crypto key is not configured")]
    MissingKey,

    #[error("storage mode 'sqlite' requires a database_url")]
    MissingDatabaseUrl,

    #[error("retention days_to_keep must be at least 1")]
    RetentionTooShort,

    #[error("sweep_interval {0:?} is outside the allowed range (1 second to 365 days)")]
    SweepIntervalOutOfRange(Duration),
}
