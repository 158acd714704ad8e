// OpenHashMap property tests (public API).
//
// Property 1: round trip. For any set of key/value pairs, after
//  inserting them all, every key observes its last-inserted value.
//
// Property 2: model agreement under djb2. Random insert/remove/get
//  sequences with the Djb2 policy match std::collections::HashMap.
//
// Property 3: growth replay. The capacity observable through the
//  public API follows the exact doubling rule: the trigger counts
//  lifetime inserts of the current table (replacements included,
//  removals ignored), a rebuild resets that count to the number of
//  live entries, and the check runs once per insert.
use probe_hashmap::{Djb2, OpenHashMap, RemoveResult};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn prop_round_trip(pairs in proptest::collection::vec(("[a-z]{0,8}", any::<u32>()), 1..100)) {
        let mut map: OpenHashMap<String, u32> = OpenHashMap::new(1);
        let mut model: HashMap<String, u32> = HashMap::new();

        for (key, value) in pairs {
            map.insert(key.clone(), value).expect("growth allocation");
            model.insert(key, value);
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }

    #[test]
    fn prop_djb2_matches_model(
        ops in proptest::collection::vec((0u8..3, "[a-d]{1,2}", any::<i64>()), 1..150)
    ) {
        let mut map: OpenHashMap<String, i64, Djb2> = OpenHashMap::with_hash_eq(2, Djb2);
        let mut model: HashMap<String, i64> = HashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => {
                    map.insert(key.clone(), value).expect("growth allocation");
                    model.insert(key, value);
                }
                1 => {
                    let got = map.remove(key.as_str());
                    match model.remove(&key) {
                        Some(expected) => prop_assert_eq!(
                            got,
                            RemoveResult::Removed { key, value: expected }
                        ),
                        None => prop_assert_eq!(got, RemoveResult::NotFound),
                    }
                }
                _ => {
                    prop_assert_eq!(map.get(key.as_str()), model.get(&key));
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key.as_str()), Some(value));
        }
    }

    #[test]
    fn prop_capacity_follows_growth_rule(
        initial_capacity in 1usize..=8,
        ops in proptest::collection::vec((prop::bool::ANY, "[a-c]{1,2}", any::<i32>()), 1..120)
    ) {
        let mut map: OpenHashMap<String, i32> = OpenHashMap::new(initial_capacity);
        let mut model: HashMap<String, i32> = HashMap::new();

        // Shadow bookkeeping for the growth rule.
        let mut capacity = initial_capacity;
        let mut insert_count = 0usize;

        for (is_insert, key, value) in ops {
            if is_insert {
                map.insert(key.clone(), value).expect("growth allocation");
                model.insert(key, value);
                insert_count += 1;
                if insert_count >= capacity / 2 {
                    capacity *= 2;
                    // The rebuild re-inserts exactly the live entries.
                    insert_count = model.len();
                }
            } else {
                map.remove(key.as_str());
                model.remove(&key);
            }
            prop_assert_eq!(map.capacity(), capacity);
            prop_assert_eq!(map.len(), model.len());
        }
    }
}
