//! Background janitor that purges expired mappings.
//!
//! The loop alternates between two states, running a purge cycle and
//! sleeping, until the shutdown signal fires. A failed cycle is logged and
//! the loop carries on; nothing here ever terminates the process.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::domain::repositories::{MappingRepository, StoreError};

/// Default time between purge cycles.
pub const DEFAULT_JANITOR_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Runs a single purge cycle, deleting every mapping that expired before `now`.
///
/// # Errors
///
/// Returns the store error unchanged; callers decide whether to swallow it.
pub async fn purge_expired(
    repository: &dyn MappingRepository,
    now: DateTime<Utc>,
) -> Result<u64, StoreError> {
    let removed = repository.delete_expired(now).await?;
    metrics::counter!("shorturl_janitor_removed_total").increment(removed);
    Ok(removed)
}

/// Runs the janitor until `shutdown` carries `true` or its sender is dropped.
///
/// The first cycle runs immediately. A slow cycle delays the next tick but
/// never overlaps with it.
pub async fn run_janitor(
    repository: Arc<dyn MappingRepository>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(interval_secs = interval.as_secs(), "Janitor started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match purge_expired(repository.as_ref(), Utc::now()).await {
                    Ok(removed) => info!(removed, "Deleted expired URLs"),
                    Err(e) => error!(error = %e, "Error deleting expired URLs"),
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Janitor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_purge_expired_returns_count() {
        let mut repo = MockMappingRepository::new();
        let now = Utc::now();

        repo.expect_delete_expired()
            .withf(move |t| *t == now)
            .times(1)
            .returning(|_| Ok(3));

        assert_eq!(purge_expired(&repo, now).await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_janitor_runs_immediately_then_on_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockMappingRepository::new();
        repo.expect_delete_expired().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        });

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_janitor(
            Arc::new(repo),
            Duration::from_secs(60),
            rx,
        ));

        time::sleep(Duration::from_secs(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_janitor_survives_failed_cycle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockMappingRepository::new();
        repo.expect_delete_expired().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(StoreError::Backend("connection refused".to_string()))
            } else {
                Ok(2)
            }
        });

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_janitor(
            Arc::new(repo),
            Duration::from_secs(10),
            rx,
        ));

        time::sleep(Duration::from_secs(25)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_janitor_stops_when_sender_dropped() {
        let mut repo = MockMappingRepository::new();
        repo.expect_delete_expired().returning(|_| Ok(0));

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_janitor(
            Arc::new(repo),
            Duration::from_secs(3600),
            rx,
        ));

        drop(tx);
        handle.await.unwrap();
    }
}
