//! Integration tests for persistent collections
//!
//! Composite values are built on these, so structural sharing and
//! order-independent equality matter for key identity.

use exmap_foundation::{LtMap, LtSet, LtVec, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn vec_push_is_persistent() {
    let empty: LtVec<i64> = LtVec::new();
    let one = empty.push_back(1);
    let two = one.push_back(2);

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert_eq!(two.first(), Some(&1));
    assert_eq!(two.last(), Some(&2));
    assert_eq!(two.get(5), None);
}

#[test]
fn set_insert_remove() {
    let set: LtSet<Value> = LtSet::new().insert(Value::Int(1)).insert(Value::Int(1));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&Value::Int(1)));
    assert!(set.remove(&Value::Int(1)).is_empty());
    assert_eq!(set.len(), 1);
}

#[test]
fn set_hash_ignores_insertion_order() {
    let a: LtSet<Value> = [Value::Int(1), Value::Int(2), Value::Int(3)].into_iter().collect();
    let b: LtSet<Value> = [Value::Int(3), Value::Int(1), Value::Int(2)].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn map_insert_get_remove() {
    let map: LtMap<Value, Value> = LtMap::new()
        .insert(Value::from("a"), Value::Int(1))
        .insert(Value::from("b"), Value::Int(2));

    assert_eq!(map.get(&Value::from("a")), Some(&Value::Int(1)));
    assert!(map.contains_key(&Value::from("b")));
    let smaller = map.remove(&Value::from("a"));
    assert_eq!(smaller.len(), 1);
    assert_eq!(map.len(), 2);
}

#[test]
fn map_hash_ignores_insertion_order() {
    let a: LtMap<Value, Value> = [(Value::from("x"), Value::Int(1)), (Value::from("y"), Value::Int(2))]
        .into_iter()
        .collect();
    let b: LtMap<Value, Value> = [(Value::from("y"), Value::Int(2)), (Value::from("x"), Value::Int(1))]
        .into_iter()
        .collect();
    assert_eq!(hash_of(&a), hash_of(&b));
}
