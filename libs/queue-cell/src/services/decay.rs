use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, instrument};

use shared_config::AppConfig;
use shared_database::SharedStore;

/// Periodically runs one queue decay step against the store.
pub struct QueueDecayWorker {
    store: SharedStore,
    period: Duration,
}

impl QueueDecayWorker {
    pub fn new(store: SharedStore, period: Duration) -> Self {
        Self { store, period }
    }

    /// `None` when the simulation is switched off.
    pub fn from_config(store: SharedStore, config: &AppConfig) -> Option<Self> {
        config
            .is_queue_simulation_enabled()
            .then(|| Self::new(store, Duration::from_secs(config.queue_tick_seconds)))
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }

    #[instrument(skip(self, shutdown), fields(period_ms = self.period.as_millis() as u64))]
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!("Queue decay worker started");

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.store.advance_queue().await;
                    debug!("Queue decay step applied");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Queue decay worker stopped");
    }
}
