//! Expiration Sweeper Task
//!
//! Background task that periodically removes expired entries from the store.
//!
//! Each sweep runs in two phases: a read-locked scan that collects expired
//! keys, then a write-locked bulk delete of exactly those keys. Splitting
//! the phases keeps the exclusive lock out of the O(n) scan, at the cost of
//! a narrow window where a concurrent `put` to a collected key is deleted
//! along with the stale entry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Store;

/// Spawns the background sweeper for a store.
///
/// The task ticks on a fixed interval. On each tick it collects expired
/// keys under the shared lock and, only when something was found, reclaims
/// them under the exclusive lock. Ticks with nothing to collect are cheap
/// no-ops, so the sweeper always runs: even with a non-expiring default TTL,
/// individual entries written with a TTL override still need collection.
///
/// The task stops when the `lifetime` signal reads `true` or its sender is
/// dropped; the interval timer is released with the task. Store operations
/// are unaffected by the stop, the bucket merely ceases automatic
/// expiration from that point on.
///
/// # Arguments
/// * `store` - Shared handle to the store to sweep
/// * `interval` - Time between sweep ticks
/// * `lifetime` - Cancellation signal bounding the task's lifetime
///
/// # Returns
/// A JoinHandle for the spawned task, usable to abort it during shutdown.
pub fn spawn_sweeper(
    store: Arc<RwLock<Store>>,
    interval: Duration,
    mut lifetime: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // `changed()` only resolves on a version bump, so a signal that was
        // cancelled before the task started must be caught here.
        if *lifetime.borrow() {
            debug!("Expiration sweeper lifetime already cancelled, not starting");
            return;
        }

        info!(interval_ms = interval.as_millis() as u64, "Starting expiration sweeper");

        let mut ticker = tokio::time::interval(interval);
        // The first tick of a tokio interval fires immediately; consume it
        // so the first sweep happens a full interval after startup.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Phase one: scan under the read lock only.
                    let expired = {
                        let store_guard = store.read().await;
                        store_guard.collect_expired()
                    };

                    if expired.is_empty() {
                        debug!("sweep: no expired entries");
                        continue;
                    }

                    // Phase two: bulk delete under the write lock.
                    {
                        let mut store_guard = store.write().await;
                        store_guard.reclaim(&expired);
                    }

                    info!(reclaimed = expired.len(), "sweep: removed expired entries");
                }
                changed = lifetime.changed() => {
                    // A dropped sender cancels the sweeper just like an
                    // explicit signal.
                    if changed.is_err() || *lifetime.borrow() {
                        debug!("Expiration sweeper received cancellation, stopping");
                        return;
                    }
                }
            }
        }
    })
}
