//! Periodic retention sweep for durable secret storage.
//!
//! Secrets that were never read do not live forever: the sweeper deletes
//! rows older than the configured retention window. It only makes sense
//! against an [`ExpiringSecretStore`](sealbox_store::ExpiringSecretStore);
//! deployments on the volatile store have no age metadata and simply never
//! start it.

pub mod sweeper;

pub use sweeper::RetentionSweeper;
