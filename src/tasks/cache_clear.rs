//! Cache Clear Task
//!
//! Background task that empties every cache region at fixed wall-clock
//! boundaries (with the default 60 second interval, the top of every minute).

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Time left from `now_ms` (Unix milliseconds) until the next multiple of
/// `interval_secs` since the epoch.
///
/// Exactly on a boundary, the next one is a full interval away.
pub fn duration_until_next_boundary(now_ms: i64, interval_secs: u64) -> Duration {
    let interval_ms = interval_secs.max(1).saturating_mul(1000) as i64;
    let into_period = now_ms.rem_euclid(interval_ms);
    Duration::from_millis((interval_ms - into_period) as u64)
}

/// Spawns a background task that clears the whole cache on every boundary.
///
/// # Arguments
/// * `cache` - cache shared with the product service
/// * `interval_secs` - boundary spacing in seconds
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = shared_cache();
/// let clear_handle = spawn_cache_clear_task(cache.clone(), 60);
/// // Later, during shutdown:
/// clear_handle.abort();
/// ```
pub fn spawn_cache_clear_task(cache: SharedCache, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting cache clear task with interval of {} seconds",
            interval_secs
        );

        loop {
            let wait = duration_until_next_boundary(
                chrono::Utc::now().timestamp_millis(),
                interval_secs,
            );
            tokio::time::sleep(wait).await;

            let (removed, regions) = {
                let mut cache_guard = cache.write().await;
                let regions = cache_guard.region_names().len();
                (cache_guard.clear_all(), regions)
            };

            if removed > 0 {
                info!(
                    "Cache clear: removed {} entries from {} regions",
                    removed, regions
                );
            } else {
                debug!("Cache clear: nothing cached");
            }
        }
    })
}
