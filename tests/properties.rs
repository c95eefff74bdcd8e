use std::collections::HashMap;

use assoc_cache::{Cache, Difference};
use proptest::prelude::*;

/// Small key space so that generated pairs collide often.
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..32
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(u8, i32)>> {
    proptest::collection::vec((key_strategy(), any::<i32>()), 0..64)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert(u8, i32),
    Remove(u8),
    RemoveByValue(i32),
    Sort,
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        6 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| CacheOp::Insert(k, v)),
        3 => key_strategy().prop_map(CacheOp::Remove),
        1 => any::<i32>().prop_map(CacheOp::RemoveByValue),
        1 => Just(CacheOp::Sort),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Replays random operations against both a `Cache` and a `HashMap` and
    /// checks that they agree on contents and that the length stays in sync.
    #[test]
    fn ops_match_hashmap(ops in proptest::collection::vec(cache_op_strategy(), 0..256)) {
        let mut cache: Cache<u8, i32> = Cache::new();
        let mut map: HashMap<u8, i32> = HashMap::new();

        for op in &ops {
            match op {
                CacheOp::Insert(k, v) => {
                    prop_assert_eq!(cache.insert(*k, *v), map.insert(*k, *v), "insert({}, {})", k, v);
                }
                CacheOp::Remove(k) => {
                    prop_assert_eq!(cache.remove(k), map.remove(k).is_some(), "remove({})", k);
                }
                CacheOp::RemoveByValue(threshold) => {
                    cache.remove_by_value(|v, _, _| v < threshold);
                    map.retain(|_, v| *v >= *threshold);
                }
                CacheOp::Sort => {
                    cache.sort();
                }
                CacheOp::Clear => {
                    cache.clear();
                    map.clear();
                }
            }

            prop_assert_eq!(cache.len(), map.len());
            prop_assert_eq!(cache.array().len(), cache.len());
            prop_assert_eq!(cache.key_array().len(), cache.len());
            for (k, v) in &map {
                prop_assert_eq!(cache.get(k), Some(v));
            }
        }
    }

    #[test]
    fn insert_then_get(pairs in pairs_strategy(), k in key_strategy(), v in any::<i32>()) {
        let mut cache: Cache<_, _> = pairs.into_iter().collect();
        cache.insert(k, v);
        prop_assert_eq!(cache.get(&k), Some(&v));
        prop_assert!(cache.has(&k));
    }

    #[test]
    fn insertion_order_is_first_occurrence_order(pairs in pairs_strategy()) {
        let cache: Cache<_, _> = pairs.iter().copied().collect();

        let mut expected = Vec::new();
        for (k, _) in &pairs {
            if !expected.contains(k) {
                expected.push(*k);
            }
        }

        prop_assert_eq!(cache.into_keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn remove_present_and_absent(pairs in pairs_strategy(), k in key_strategy()) {
        let mut cache: Cache<_, _> = pairs.into_iter().collect();
        let before = cache.clone();
        let present = cache.has(&k);

        prop_assert_eq!(cache.remove(&k), present);
        prop_assert!(!cache.has(&k));
        if !present {
            prop_assert_eq!(
                cache.iter().collect::<Vec<_>>(),
                before.iter().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn filter_preserves_order(pairs in pairs_strategy(), threshold in any::<i32>()) {
        let cache: Cache<_, _> = pairs.into_iter().collect();
        let filtered = cache.filter(|v, _, _| *v > threshold);

        let expected: Vec<_> = cache.array().into_iter().filter(|v| **v > threshold).collect();
        prop_assert_eq!(filtered.array(), expected);
    }

    #[test]
    fn sort_is_ordered_and_idempotent(pairs in pairs_strategy()) {
        let mut cache: Cache<_, _> = pairs.into_iter().collect();

        cache.sort_by(|a, b| b.cmp(a));
        let once: Vec<i32> = cache.array().into_iter().copied().collect();
        prop_assert!(once.windows(2).all(|w| w[0] >= w[1]));

        cache.sort_by(|a, b| b.cmp(a));
        let twice: Vec<i32> = cache.array().into_iter().copied().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn equals_is_reflexive_and_symmetric(pairs in pairs_strategy()) {
        let cache: Cache<_, _> = pairs.iter().copied().collect();
        let reversed: Cache<_, _> = cache.iter().rev().map(|(k, v)| (*k, *v)).collect();

        prop_assert!(cache.equals(&cache));
        prop_assert!(cache.equals(&reversed));
        prop_assert!(reversed.equals(&cache));
    }

    #[test]
    fn equals_is_false_for_different_lengths(pairs in pairs_strategy(), extra in 32u8..64) {
        let cache: Cache<_, _> = pairs.into_iter().collect();
        let mut bigger = cache.clone();
        bigger.insert(extra, 0);

        prop_assert!(!cache.equals(&bigger));
        prop_assert!(!bigger.equals(&cache));
    }

    #[test]
    fn difference_matches_key_sets(a in pairs_strategy(), b in pairs_strategy()) {
        let a: Cache<_, _> = a.into_iter().collect();
        let b: Cache<_, _> = b.into_iter().collect();

        match a.difference(&b) {
            Difference::SizeMismatch { delta } => {
                prop_assert_ne!(a.len(), b.len());
                prop_assert_eq!(delta, a.len().abs_diff(b.len()));
            }
            Difference::Keys(keys) => {
                prop_assert_eq!(a.len(), b.len());
                let expected: Vec<_> = b.keys().filter(|k| !a.has(*k)).collect();
                prop_assert_eq!(keys, expected);
            }
        }
    }

    #[test]
    fn random_draws_members(pairs in pairs_strategy()) {
        let cache: Cache<_, _> = pairs.into_iter().collect();

        match cache.random_key() {
            Some(k) => prop_assert!(cache.has(k)),
            None => prop_assert!(cache.is_empty()),
        }
        match cache.random() {
            Some(v) => prop_assert!(cache.array().contains(&v)),
            None => prop_assert!(cache.is_empty()),
        }
    }
}

#[test]
fn scenario_one_two_three() {
    let mut cache = Cache::new();
    cache.set("one", 1).set("two", 2).set("three", 3);

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.map(|v, _, _| v * 2), [2, 4, 6]);
    assert_eq!(cache.first(), Some(&1));
    assert_eq!(cache.last(), Some(&3));
    assert_eq!(cache.last_key(), Some(&"three"));
    assert_eq!(cache.filter(|v, _, _| *v > 1).array(), [&2, &3]);
    assert!(cache.has_all(["one", "two"]));
    assert!(!cache.has_all(["one", "four"]));
    assert_eq!(cache.find_key(|v, _, _| *v > 2), Some(&"three"));
    assert_eq!(cache.at(0), Some(&1));
    assert_eq!(cache.at(2), Some(&3));
    assert_eq!(cache.at(3), None);

    cache.sort_by(|a, b| b.cmp(a));
    assert_eq!(cache.array(), [&3, &2, &1]);

    cache.clear();
    assert_eq!(cache.len(), 0);
}
