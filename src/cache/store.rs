//! Cache Store Module
//!
//! The concurrent map at the heart of the bucket: a `HashMap` of entries
//! plus the operations the sweeper needs to collect and reclaim expired
//! keys. The struct itself is unsynchronized; the owning [`Bucket`] wraps it
//! in an `Arc<RwLock<Store>>` and enforces the locking discipline.
//!
//! [`Bucket`]: crate::Bucket

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::cache::{Entry, PutOption};

// == Cache Store ==
/// Key-value storage with a bucket-wide default TTL.
///
/// Expiration is lazy: `get` never checks the clock. Stale entries stay
/// visible until the sweeper's next collect/reclaim cycle removes them.
#[derive(Debug, Default)]
pub struct Store {
    /// Key-value storage
    entries: HashMap<String, Entry>,
    /// Default TTL for entries without an override; `None` means entries
    /// never expire unless they carry their own TTL
    default_ttl: Option<Duration>,
}

impl Store {
    // == Constructor ==
    /// Creates an empty store with the given default TTL.
    ///
    /// # Arguments
    /// * `default_ttl` - Applied to entries without a per-key override;
    ///   `None` or zero disables automatic expiration for them
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Put ==
    /// Stores a key-value pair, overwriting any existing entry wholesale.
    ///
    /// The entry's creation timestamp is captured here, so an overwrite
    /// resets the expiration clock. Options are applied in call order; the
    /// last option to set a field wins.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The payload bytes
    /// * `options` - Per-call modifiers such as [`with_ttl`]
    ///
    /// [`with_ttl`]: crate::cache::with_ttl
    pub fn put(&mut self, key: String, value: Bytes, options: &[PutOption]) {
        let mut entry = Entry::new(value);

        for option in options {
            option.apply(&mut entry);
        }

        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves the value stored under `key`, or `None` if absent.
    ///
    /// Deliberately lazy: an entry whose TTL has elapsed but which has not
    /// yet been swept is still returned. `get` never pays scanning cost;
    /// staleness is bounded by the sweep interval.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Del ==
    /// Removes the entry under `key`. No-op if the key is absent.
    pub fn del(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Collect Expired ==
    /// Scans for keys whose entries have outlived their effective TTL.
    ///
    /// Read-only; called by the sweeper under the shared lock so readers
    /// are not blocked during the O(n) scan. The timestamp is captured once
    /// for the whole scan.
    pub fn collect_expired(&self) -> Vec<String> {
        let now = Instant::now();

        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, self.default_ttl))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Reclaim ==
    /// Deletes the given keys in bulk.
    ///
    /// Called by the sweeper under the exclusive lock with the keys a prior
    /// `collect_expired` returned. Deletion is unconditional: a write that
    /// raced into the gap between the two phases is dropped along with the
    /// stale entry. That window is an accepted trade-off for not holding
    /// the write lock across the scan.
    pub fn reclaim(&mut self, keys: &[String]) {
        for key in keys {
            self.entries.remove(key);
        }
    }

    // == Length ==
    /// Returns the current number of entries, swept or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
