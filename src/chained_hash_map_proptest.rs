#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can poke
// at the table alongside its unit tests without feature gates.

use crate::chained_hash_map::ChainedHashMap;
use crate::hash_strategy::WeightedCharSum;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Remove(usize),
    Contains(usize),
    Resize(usize),
    Clear,
    Audit,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Contains),
            (1usize..40).prop_map(OpI::Resize),
            Just(OpI::Clear),
            Just(OpI::Audit),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap for
// key-selector operations. Invariants exercised across random op sequences:
// - put/get/remove/contains_key parity with the model after every op.
// - resize (any capacity >= 1) preserves the entry set; get parity holds
//   against the post-resize table.
// - len parity and exact load_factor == len / capacity after every op.
// - empty_buckets never exceeds capacity and reaches capacity exactly when
//   the table is empty.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashMap<String, i32, WeightedCharSum> =
            ChainedHashMap::with_capacity(8).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = pool[i].clone();
                    let old_sut = sut.put(k.clone(), v);
                    let old_model = model.insert(k, v);
                    prop_assert_eq!(old_sut, old_model);
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                }
                OpI::Contains(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
                }
                OpI::Resize(cap) => {
                    sut.resize(cap).unwrap();
                    prop_assert_eq!(sut.capacity(), cap);
                    for (k, v) in &model {
                        prop_assert_eq!(sut.get(k), Some(v));
                    }
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
                OpI::Audit => {
                    let mut seen: Vec<(String, i32)> =
                        sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    seen.sort();
                    let mut expected: Vec<(String, i32)> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    expected.sort();
                    prop_assert_eq!(seen, expected);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(
                sut.load_factor(),
                sut.len() as f64 / sut.capacity() as f64
            );
            let empties = sut.empty_buckets();
            prop_assert!(empties <= sut.capacity());
            if sut.is_empty() {
                prop_assert_eq!(empties, sut.capacity());
            }
        }
    }
}

// Property: selector round-trip. Whatever selector places an entry, the same
// selector retrieves and removes it, and contains_key sees it regardless.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_selector_roundtrip(
        key in "[a-z]{1,6}",
        selector in 0usize..10_000,
        value in any::<i32>(),
        capacity in 1usize..200,
    ) {
        let mut m: ChainedHashMap<String, i32, WeightedCharSum> =
            ChainedHashMap::with_capacity(capacity).unwrap();

        m.put_via(key.clone(), value, &selector);
        prop_assert_eq!(m.get_via(&key, &selector), Some(&value));
        prop_assert!(m.contains_key(&key));

        // visible through the default selector only on bucket coincidence
        let coincide = m.bucket_index(&key) == m.bucket_index(&selector);
        prop_assert_eq!(m.get(&key).is_some(), coincide);

        prop_assert_eq!(m.remove_via(&key, &selector), Some(value));
        prop_assert!(!m.contains_key(&key));
        prop_assert_eq!(m.len(), 0);
    }
}
