#![cfg(test)]

// Model-based property tests for OpenHashMap, kept inside the crate so
// they can exercise internal policies without feature gates. The model
// is std::collections::HashMap; after every operation the map and the
// model must agree on lookup results, membership and live length, and
// the capacity may only double.

use crate::hash_eq::HashEq;
use crate::open_hash_map::{OpenHashMap, RemoveResult};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Mutate(usize, i32),
}

// Pool-indexed operations so shrinking collapses toward few keys and
// short op lists.
fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-c]{1,3}", 1..=6).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            idx.clone().prop_map(Op::Remove),
            idx.clone().prop_map(Op::Get),
            idx.clone().prop_map(Op::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
        ];
        (Just(pool), proptest::collection::vec(op, 1..200))
    })
}

/// Pins all keys to one probe chain so tombstone skipping and reuse run
/// constantly.
#[derive(Clone, Copy, Debug)]
struct OneBucket;

impl<K: ?Sized + AsRef<str>> HashEq<K> for OneBucket {
    fn hash(&self, _key: &K) -> u64 {
        0
    }
    fn eq(&self, a: &K, b: &K) -> bool {
        a.as_ref() == b.as_ref()
    }
}

fn check_against_model<P>(
    pool: &[String],
    ops: &[Op],
    mut map: OpenHashMap<String, i32, P>,
) -> Result<(), TestCaseError>
where
    P: HashEq<String> + Clone,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut capacity = map.capacity();

    for op in ops {
        match *op {
            Op::Insert(i, v) => {
                let key = pool[i].clone();
                prop_assert!(map.insert(key.clone(), v).is_ok());
                model.insert(key, v);
            }
            Op::Remove(i) => {
                let key = &pool[i];
                match (map.remove(key), model.remove(key)) {
                    (RemoveResult::Removed { key: k, value }, Some(expected)) => {
                        prop_assert_eq!(&k, key);
                        prop_assert_eq!(value, expected);
                    }
                    (RemoveResult::NotFound, None) => {}
                    (got, expected) => {
                        return Err(TestCaseError::fail(format!(
                            "remove disagrees with model: {got:?} vs {expected:?}"
                        )))
                    }
                }
            }
            Op::Get(i) => {
                prop_assert_eq!(map.get(&pool[i]), model.get(&pool[i]));
            }
            Op::Contains(i) => {
                prop_assert_eq!(map.contains_key(&pool[i]), model.contains_key(&pool[i]));
            }
            Op::Mutate(i, delta) => {
                let updated = map.get_mut(&pool[i]).map(|v| {
                    *v = v.wrapping_add(delta);
                    *v
                });
                let expected = model.get_mut(&pool[i]).map(|v| {
                    *v = v.wrapping_add(delta);
                    *v
                });
                prop_assert_eq!(updated, expected);
            }
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.capacity() >= capacity);
        prop_assert_eq!(map.capacity() % capacity, 0, "capacity only doubles");
        capacity = map.capacity();
    }

    // Everything the model holds must be retrievable, and iteration must
    // reproduce the model exactly.
    for (key, value) in &model {
        prop_assert_eq!(map.get(key), Some(value));
    }
    let collected: HashMap<String, i32> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    prop_assert_eq!(collected, model);
    Ok(())
}

proptest! {
    #[test]
    fn prop_matches_model_with_std_policy(
        (pool, ops) in arb_scenario(),
        initial_capacity in 1usize..=8,
    ) {
        let map: OpenHashMap<String, i32> = OpenHashMap::new(initial_capacity);
        check_against_model(&pool, &ops, map)?;
    }

    #[test]
    fn prop_matches_model_under_full_collisions(
        (pool, ops) in arb_scenario(),
        initial_capacity in 1usize..=4,
    ) {
        let map = OpenHashMap::with_hash_eq(initial_capacity, OneBucket);
        check_against_model(&pool, &ops, map)?;
    }
}
