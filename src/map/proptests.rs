//! Property-based tests for the map implementations using proptest
//!
//! These tests drive the map with random operation sequences and check the
//! results against a plain `HashMap` model of the same semantics.

use super::SyncMap;
use proptest::prelude::*;
use std::collections::HashMap;

/// A single map operation chosen by proptest
#[derive(Debug, Clone)]
enum Op {
    Insert(u8, i32),
    Get(u8),
    GetOrInsert(u8, i32),
    Remove(u8),
    CompareAndSwap(u8, i32, i32),
    CompareAndDelete(u8, i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so operations collide often
    prop_oneof![
        (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k % 16, v)),
        any::<u8>().prop_map(|k| Op::Get(k % 16)),
        (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::GetOrInsert(k % 16, v)),
        any::<u8>().prop_map(|k| Op::Remove(k % 16)),
        (any::<u8>(), any::<i32>(), any::<i32>())
            .prop_map(|(k, old, new)| Op::CompareAndSwap(k % 16, old, new)),
        (any::<u8>(), any::<i32>()).prop_map(|(k, old)| Op::CompareAndDelete(k % 16, old)),
        Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn test_matches_hashmap_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let map: SyncMap<u8, i32> = SyncMap::new();
        let mut model: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&k), model.get(&k).copied());
                }
                Op::GetOrInsert(k, v) => {
                    let expected = match model.get(&k).copied() {
                        Some(current) => (current, true),
                        None => {
                            model.insert(k, v);
                            (v, false)
                        }
                    };
                    prop_assert_eq!(map.get_or_insert(k, v), expected);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
                Op::CompareAndSwap(k, old, new) => {
                    let expected = match model.get_mut(&k) {
                        Some(current) if *current == old => {
                            *current = new;
                            true
                        }
                        _ => false,
                    };
                    prop_assert_eq!(map.compare_and_swap(&k, &old, new), expected);
                }
                Op::CompareAndDelete(k, old) => {
                    let expected = model.get(&k) == Some(&old);
                    if expected {
                        model.remove(&k);
                    }
                    prop_assert_eq!(map.compare_and_delete(&k, &old), expected);
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            // Aggregate views stay in sync after every operation
            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.is_empty(), model.is_empty());
        }

        // Final traversal matches the model exactly
        let mut pairs: Vec<(u8, i32)> = map.iter().collect();
        pairs.sort();
        let mut expected: Vec<(u8, i32)> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn test_get_or_insert_first_write_wins(
        key in any::<u8>(),
        first in any::<i32>(),
        second in any::<i32>(),
    ) {
        prop_assume!(first != second);

        let map: SyncMap<u8, i32> = SyncMap::new();
        prop_assert_eq!(map.get_or_insert(key, first), (first, false));
        prop_assert_eq!(map.get_or_insert(key, second), (first, true));
        prop_assert_eq!(map.get(&key), Some(first));
    }

    #[test]
    fn test_compare_and_delete_absent_key_never_deletes(
        key in any::<u8>(),
        old in any::<i32>(),
    ) {
        let map: SyncMap<u8, i32> = SyncMap::new();
        prop_assert!(!map.compare_and_delete(&key, &old));
        prop_assert!(!map.compare_and_delete(&key, &0));
        prop_assert!(map.is_empty());
    }

    #[test]
    fn test_iter_visits_each_key_once(
        entries in prop::collection::hash_map(any::<u16>(), any::<i32>(), 0..100)
    ) {
        let map: SyncMap<u16, i32> = entries.clone().into_iter().collect();

        let mut visited: Vec<u16> = map.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(visited.len(), entries.len());

        visited.sort();
        visited.dedup();
        prop_assert_eq!(visited.len(), entries.len());
    }
}
