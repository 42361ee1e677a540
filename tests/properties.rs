use bucket_table::{hash_string, Action, HashTable};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Set(String, String),
    Delete(String),
    Resize(usize),
    Clear,
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,3}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key_strategy(), "[a-zA-Z0-9]{0,4}").prop_map(|(key, value)| Op::Set(key, value)),
        3 => key_strategy().prop_map(Op::Delete),
        1 => (1usize..40).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

fn assert_invariants(table: &HashTable, model: &HashMap<String, String>) {
    assert_eq!(table.len(), model.len());
    assert_eq!(
        table.len(),
        table.buckets().iter().map(|bucket| bucket.len()).sum::<usize>()
    );

    for (index, bucket) in table.buckets().iter().enumerate() {
        for key_value in bucket.iter() {
            assert_eq!(hash_string(key_value.key(), table.size()), index);
        }
    }

    for (key, value) in model {
        assert_eq!(table.get(key).value, Some(value.as_str()));
    }

    assert!((table.load_factor() - table.len() as f64 / table.size() as f64).abs() < 1e-12);
}

proptest! {
    #[test]
    fn matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut table = HashTable::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Set(key, value) => {
                    let outcome = table.set(key.clone(), value.clone());
                    let expected = if model.insert(key, value).is_some() {
                        Action::Updated
                    } else {
                        Action::Inserted
                    };
                    prop_assert_eq!(outcome.action, expected);
                }
                Op::Delete(key) => {
                    let count = table.len();
                    let outcome = table.delete(&key);
                    prop_assert_eq!(outcome.deleted, model.remove(&key).is_some());
                    prop_assert_eq!(outcome.bucket, hash_string(&key, table.size()));
                    if !outcome.deleted {
                        prop_assert_eq!(table.len(), count);
                    }
                }
                Op::Resize(size) => {
                    table.resize(size).unwrap();
                    prop_assert_eq!(table.size(), size);
                }
                Op::Clear => {
                    let size = table.size();
                    table.clear();
                    model.clear();
                    prop_assert_eq!(table.size(), size);
                }
            }

            assert_invariants(&table, &model);
        }
    }

    #[test]
    fn update_keeps_count(key in key_strategy(), first in ".*", second in ".*") {
        let mut table = HashTable::new();

        table.set(key.clone(), first);
        let count = table.len();
        let outcome = table.set(key.clone(), second.clone());

        prop_assert_eq!(outcome.action, Action::Updated);
        prop_assert_eq!(table.len(), count);
        prop_assert_eq!(table.get(&key).value, Some(second.as_str()));
    }

    #[test]
    fn resize_rehashes(
        entries in prop::collection::hash_map("[a-z]{1,8}", "[a-z]{1,8}", 0..50),
        size in 1usize..64,
    ) {
        let mut table = HashTable::new();

        for (key, value) in &entries {
            table.set(key.as_str(), value.as_str());
        }

        table.resize(size).unwrap();

        prop_assert_eq!(table.len(), entries.len());

        for (key, value) in &entries {
            let outcome = table.get(key);
            prop_assert_eq!(outcome.bucket, hash_string(key, size));
            prop_assert_eq!(outcome.value, Some(value.as_str()));
        }
    }
}

#[test]
fn demo_scenario() {
    let mut table = HashTable::new();

    assert_eq!(table.set("name", "Sameer").bucket, hash_string("name", 8));
    assert_eq!(hash_string("name", 8), 3);

    table.set("city", "Waterloo");
    table.set("school", "Laurier");
    table.set("github", "Sameer-Abdullah");
    table.resize(16).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.get("name").value, Some("Sameer"));
    assert_eq!(table.get("city").value, Some("Waterloo"));
    assert_eq!(table.get("school").value, Some("Laurier"));
    assert_eq!(table.get("github").value, Some("Sameer-Abdullah"));

    table.clear();

    assert_eq!(table.len(), 0);
    assert_eq!(table.size(), 16);
    assert!(table.buckets().iter().all(|bucket| bucket.is_empty()));
}
