use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use queue_cell::QueueDecayWorker;
use shared_database::{InMemoryStore, SharedStore};
use shared_utils::test_utils::TestConfig;

#[test]
fn test_worker_disabled_when_tick_is_zero() {
    let store: SharedStore = Arc::new(InMemoryStore::new());
    let config = TestConfig::default().to_app_config();

    assert!(QueueDecayWorker::from_config(store, &config).is_none());
}

#[test]
fn test_worker_enabled_with_positive_tick() {
    let store: SharedStore = Arc::new(InMemoryStore::new());
    let mut config = TestConfig::default().to_app_config();
    config.queue_tick_seconds = 30;

    assert!(QueueDecayWorker::from_config(store, &config).is_some());
}

#[tokio::test]
async fn test_worker_decays_waits_until_shutdown() {
    let store: SharedStore = Arc::new(InMemoryStore::seeded());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = QueueDecayWorker::new(store.clone(), Duration::from_millis(10)).spawn(shutdown_rx);
    tokio::time::sleep(Duration::from_millis(80)).await;

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap();

    let after_stop = store.get_patient("P003").await.unwrap().estimated_wait;
    assert!(after_stop < 22);

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(store.get_patient("P003").await.unwrap().estimated_wait, after_stop);
}
