//! Retention sweep scenarios against the durable store.

use chrono::{Duration, Utc};
use sealbox_core::config::RetentionConfig;
use sealbox_core::{Secret, SecretId};
use sealbox_integration_tests::{cipher, temp_sqlite_store};
use sealbox_store::{EncryptingStore, SecretStore};
use sealbox_sweeper::RetentionSweeper;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tokio::sync::oneshot;

fn retention(days: u32) -> RetentionConfig {
    RetentionConfig {
        days_to_keep: days,
        sweep_interval: StdDuration::from_secs(3600),
    }
}

#[tokio::test]
async fn test_sweep_removes_only_expired_secrets() {
    let (_dir, store) = temp_sqlite_store().await;
    let store = Arc::new(EncryptingStore::new(store, cipher()));
    let now = Utc::now();

    let old_id = SecretId::random();
    let fresh_id = SecretId::random();
    store
        .create(Secret::new(old_id, "ten days old"), now - Duration::days(10))
        .await
        .unwrap();
    store
        .create(Secret::new(fresh_id, "one day old"), now - Duration::days(1))
        .await
        .unwrap();

    let sweeper = RetentionSweeper::new(store.clone(), retention(7));
    assert_eq!(sweeper.sweep_once().await.unwrap(), 1);

    // The sweep never looked inside the payloads; the fresh one still
    // decrypts fine afterwards.
    assert!(store.consume(old_id).await.unwrap().is_none());
    let fresh = store.consume(fresh_id).await.unwrap().unwrap();
    assert_eq!(fresh.payload, "one day old");
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let (_dir, store) = temp_sqlite_store().await;
    let store = Arc::new(store);
    store
        .create(
            Secret::new(SecretId::random(), "expired"),
            Utc::now() - Duration::days(30),
        )
        .await
        .unwrap();

    let sweeper = RetentionSweeper::new(store.clone(), retention(7));
    assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
    assert_eq!(sweeper.sweep_once().await.unwrap(), 0);
}

#[tokio::test]
async fn test_sweeper_runs_at_startup_and_shuts_down() {
    let (_dir, store) = temp_sqlite_store().await;
    let store = Arc::new(store);
    store
        .create(
            Secret::new(SecretId::random(), "expired"),
            Utc::now() - Duration::days(30),
        )
        .await
        .unwrap();
    store
        .create(Secret::new(SecretId::random(), "current"), Utc::now())
        .await
        .unwrap();

    let sweeper = RetentionSweeper::new(store.clone(), retention(7));
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let handle = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    // The startup sweep runs before the first wait; no interval needs to
    // elapse for the expired row to disappear.
    tokio::time::sleep(StdDuration::from_millis(100)).await;
    assert_eq!(store.count().await.unwrap(), 1);

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(StdDuration::from_secs(1), handle)
        .await
        .expect("sweeper stops promptly")
        .unwrap()
        .unwrap();
}
