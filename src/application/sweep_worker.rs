//! Background task that periodically evicts expired entries.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::application::services::RegistryService;
use crate::domain::repositories::EntryRepository;

/// Runs the sweep loop until `shutdown` flips to `true` or its sender is dropped.
///
/// The first sweep happens one `period` after start, then every `period`
/// after that. Each pass evicts entries older than `ttl` relative to the
/// wall clock at the time of the pass.
///
/// # Shutdown
///
/// Cancellation is cooperative: the loop checks the watch channel between
/// ticks and never interrupts a sweep in progress.
pub async fn run_sweep_worker<R: EntryRepository>(
    registry: Arc<RegistryService<R>>,
    ttl: TimeDelta,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        ttl_seconds = ttl.num_seconds(),
        period_seconds = period.as_secs(),
        "Sweep worker started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = registry.sweep(Utc::now(), ttl).await;
                let remaining = registry.len().await;

                if removed > 0 {
                    info!(removed, remaining, "Expired entries swept");
                } else {
                    debug!(remaining, "Sweep found nothing to evict");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Sweep worker stopped");
}
