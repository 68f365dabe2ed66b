//! The retention sweep loop.

use chrono::{Duration, Utc};
use sealbox_core::config::RetentionConfig;
use sealbox_store::{ExpiringSecretStore, Result};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info};

/// Periodically deletes secrets older than the retention window.
///
/// The loop sweeps once at startup and then once per configured interval.
/// A shutdown signal observed before or during the wait ends the loop; a
/// delete already in flight is allowed to complete or fail normally. A
/// failed delete ends the run with an error; restart and backoff policy
/// belongs to whatever supervises the task.
pub struct RetentionSweeper<S> {
    store: Arc<S>,
    config: RetentionConfig,
}

impl<S: ExpiringSecretStore> RetentionSweeper<S> {
    /// Build a sweeper over a durable store. `config` is expected to have
    /// been validated at startup.
    pub fn new(store: Arc<S>, config: RetentionConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep: compute the cutoff and issue the bulk delete.
    pub async fn sweep_once(&self) -> Result<u64> {
        let cutoff = Utc::now() - Duration::days(i64::from(self.config.days_to_keep));
        let deleted = self.store.delete_older_than(cutoff).await?;
        if deleted > 0 {
            info!(deleted, %cutoff, "retention sweep removed expired secrets");
        } else {
            debug!(%cutoff, "retention sweep found nothing to remove");
        }
        Ok(deleted)
    }

    /// Run the sweep loop until `shutdown` fires or a sweep fails.
    ///
    /// The wait between sweeps is a cancellable suspension, so shutdown is
    /// prompt even with a long interval. Dropping the sender counts as a
    /// shutdown signal.
    pub async fn run(&self, mut shutdown: oneshot::Receiver<()>) -> Result<()> {
        info!(
            days_to_keep = self.config.days_to_keep,
            interval_secs = self.config.sweep_interval.as_secs(),
            "retention sweeper started"
        );

        loop {
            // A signal that arrived before this iteration is terminal: no
            // further sweep starts, matching the signal-during-wait case.
            if !matches!(shutdown.try_recv(), Err(TryRecvError::Empty)) {
                debug!("retention sweeper stopping");
                return Ok(());
            }

            self.sweep_once().await?;

            tokio::select! {
                _ = &mut shutdown => {
                    debug!("retention sweeper stopping");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.config.sweep_interval) => {}
            }
        }
    }
}
