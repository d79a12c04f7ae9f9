//! Bucket Module
//!
//! The public façade: composes the store with its background sweeper and
//! exposes `put`/`get`/`del` to the embedding service.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{PutOption, Store};
use crate::config::BucketConfig;
use crate::tasks::spawn_sweeper;

// == Bucket ==
/// A concurrency-safe, in-process byte cache with TTL expiration.
///
/// Each bucket owns one independent sweeper task, started at construction
/// and bound to the externally supplied `lifetime` signal. Sending `true`
/// on that signal (or dropping its sender) stops automatic expiration;
/// `put`/`get`/`del` keep working against the store afterwards. Dropping
/// the bucket aborts the sweeper outright.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use memobucket::Bucket;
/// use tokio::sync::watch;
///
/// #[tokio::main]
/// async fn main() {
///     let (_lifetime_tx, lifetime_rx) = watch::channel(false);
///     let bucket = Bucket::new(lifetime_rx, Some(Duration::from_secs(300)));
///
///     bucket.put("greeting", &b"hello"[..], &[]).await;
///     assert_eq!(bucket.get("greeting").await.as_deref(), Some(&b"hello"[..]));
/// }
/// ```
#[derive(Debug)]
pub struct Bucket {
    /// Shared storage, also held by the sweeper task
    store: Arc<RwLock<Store>>,
    /// Handle to this bucket's sweeper task
    sweeper: JoinHandle<()>,
}

impl Bucket {
    // == Constructor ==
    /// Creates a bucket with the given default TTL and a 1-second sweep
    /// interval.
    ///
    /// # Arguments
    /// * `lifetime` - Cancellation signal bounding the sweeper task
    /// * `default_ttl` - TTL for entries written without [`with_ttl`];
    ///   `None` (or zero) means they never expire
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime context; the bucket needs
    /// the runtime to spawn its sweeper.
    ///
    /// [`with_ttl`]: crate::cache::with_ttl
    pub fn new(lifetime: watch::Receiver<bool>, default_ttl: Option<Duration>) -> Self {
        let config = BucketConfig {
            default_ttl,
            ..BucketConfig::default()
        };
        Self::with_config(lifetime, config)
    }

    /// Creates a bucket from an explicit configuration.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime context.
    pub fn with_config(lifetime: watch::Receiver<bool>, config: BucketConfig) -> Self {
        let store = Arc::new(RwLock::new(Store::new(config.default_ttl)));
        let sweeper = spawn_sweeper(Arc::clone(&store), config.sweep_interval, lifetime);

        Self { store, sweeper }
    }

    // == Put ==
    /// Inserts or overwrites the value under `key`.
    ///
    /// An overwrite replaces the prior entry wholesale and resets its
    /// expiration clock. Options apply in call order, last one wins.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Bytes>, options: &[PutOption]) {
        let mut store = self.store.write().await;
        store.put(key.into(), value.into(), options);
    }

    // == Get ==
    /// Returns the value under `key`, or `None` if absent.
    ///
    /// Expiration is lazy: an entry past its TTL stays visible until the
    /// next sweep removes it, so staleness is bounded by the sweep interval.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Del ==
    /// Removes the entry under `key`; no-op if absent.
    pub async fn del(&self, key: &str) {
        let mut store = self.store.write().await;
        store.del(key);
    }

    // == Length ==
    /// Returns the current number of entries, including expired-but-unswept
    /// ones.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    // == Is Empty ==
    /// Returns true if the bucket holds no entries.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.is_empty()
    }
}

impl Drop for Bucket {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
