//! End-to-end secret lifecycle scenarios across the composed stack.

use sealbox_core::SecretId;
use sealbox_integration_tests::{cipher, memory_service, temp_sqlite_store};
use sealbox_store::{EncryptingStore, SecretService, StoreError, StoreLimits};
use std::sync::Arc;

#[tokio::test]
async fn test_create_consume_consume_again() {
    let service = memory_service();

    let id = service.create_secret("keep it safe").await.unwrap();

    // The id travels to the client as a 22-character token and back.
    let token = id.encode();
    assert_eq!(token.len(), 22);
    let decoded = SecretId::decode(&token).expect("token decodes");

    assert_eq!(service.count_secrets().await.unwrap(), 1);
    let text = service.consume_secret(decoded).await.unwrap().unwrap();
    assert_eq!(text.expose(), "keep it safe");
    assert_eq!(service.count_secrets().await.unwrap(), 0);

    assert!(service.consume_secret(decoded).await.unwrap().is_none());
}

#[tokio::test]
async fn test_long_form_id_is_accepted() {
    let service = memory_service();
    let id = service.create_secret("fallback form").await.unwrap();

    let long_form = id.as_uuid().to_string();
    let decoded = SecretId::decode(&long_form).unwrap();
    assert_eq!(
        service
            .consume_secret(decoded)
            .await
            .unwrap()
            .unwrap()
            .expose(),
        "fallback form"
    );
}

#[tokio::test]
async fn test_invalid_input_is_a_validation_failure_not_absence() {
    let service = memory_service();

    match service.create_secret("   ").await {
        Err(StoreError::InvalidSecret(_)) => {}
        other => panic!("expected InvalidSecret, got {other:?}"),
    }

    // An undecodable id never even reaches the store.
    assert!(SecretId::decode("definitely not an id").is_none());
}

#[tokio::test]
async fn test_lifecycle_over_sqlite() {
    let (_dir, store) = temp_sqlite_store().await;
    let service = SecretService::new(
        Arc::new(EncryptingStore::new(store, cipher())),
        StoreLimits::default(),
    );

    let id = service.create_secret("durable secret").await.unwrap();
    assert_eq!(service.count_secrets().await.unwrap(), 1);

    let text = service.consume_secret(id).await.unwrap().unwrap();
    assert_eq!(text.expose(), "durable secret");
    assert!(service.consume_secret(id).await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_consume_through_full_stack() {
    let service = Arc::new(memory_service());
    let id = service.create_secret("contested").await.unwrap();

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.consume_secret(id).await.unwrap() })
        })
        .collect();

    let results = futures::future::join_all(tasks).await;
    let winners = results
        .into_iter()
        .filter(|r| r.as_ref().unwrap().is_some())
        .count();

    assert_eq!(winners, 1, "single delivery must hold through the decorator");
    assert_eq!(service.count_secrets().await.unwrap(), 0);
}
