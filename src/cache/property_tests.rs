//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's core guarantees over arbitrary keys,
//! values, and operation sequences.

use proptest::prelude::*;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{with_ttl, Store};

// == Strategies ==
/// Generates cache keys (including the empty key, which is valid)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,32}"
}

/// Generates arbitrary byte payloads (including empty)
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// A single cache operation for sequence-based tests
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: Vec<u8> },
    Del { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Del { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key and value, a put followed by a get returns that value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = Store::new(None);

        store.put(key.clone(), Bytes::from(value.clone()), &[]);

        prop_assert_eq!(store.get(&key), Some(Bytes::from(value)));
    }

    // For any key, writing v1 then v2 leaves exactly one entry holding v2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = Store::new(None);

        store.put(key.clone(), Bytes::from(value1), &[]);
        store.put(key.clone(), Bytes::from(value2.clone()), &[]);

        prop_assert_eq!(store.get(&key), Some(Bytes::from(value2)));
        prop_assert_eq!(store.len(), 1);
    }

    // For any stored key, a delete makes a subsequent get miss.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = Store::new(None);

        store.put(key.clone(), Bytes::from(value), &[]);
        prop_assert!(store.get(&key).is_some());

        store.del(&key);
        prop_assert_eq!(store.get(&key), None);
    }

    // For any option sequence, the last TTL option determines the override.
    #[test]
    fn prop_last_ttl_option_wins(ttls in prop::collection::vec(1u64..10_000, 1..8)) {
        let mut entry = crate::cache::Entry::new(Bytes::from_static(b"v"));

        for &secs in &ttls {
            with_ttl(Duration::from_secs(secs)).apply(&mut entry);
        }

        let last = Duration::from_secs(*ttls.last().unwrap());
        prop_assert_eq!(entry.ttl_override, Some(last));
    }

    // For any operation sequence, every surviving key maps to the payload
    // of the last put that wrote it.
    #[test]
    fn prop_sequence_consistency(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = Store::new(None);
        let mut model: std::collections::HashMap<String, Vec<u8>> =
            std::collections::HashMap::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), Bytes::from(value.clone()), &[]);
                    model.insert(key, value);
                }
                CacheOp::Del { key } => {
                    store.del(&key);
                    model.remove(&key);
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(store.get(key), Some(Bytes::from(value.clone())));
        }
    }
}
