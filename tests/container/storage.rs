//! Integration tests for point access and key modes
//!
//! Tests set/get/has/delete, blank rejection, overwrite semantics, and the
//! primitive/structural mode switch.

use exmap::{ExMap, ExMapConfig, KeyMode, Value};

fn task(id: &str) -> Value {
    Value::record([("id", id)])
}

// =============================================================================
// Point Access
// =============================================================================

#[test]
fn missing_keys_are_not_found() {
    let mut map: ExMap = ExMap::new();
    map.set("a", Value::Int(1));
    assert!(!map.has("b"));
    assert_eq!(map.get("b"), None);
    assert_eq!(map.get(Value::vec([1])), None);
}

#[test]
fn falsy_values_are_stored() {
    let mut map: ExMap = ExMap::new();
    map.set("zero", Value::Int(0))
        .set("false", Value::Bool(false))
        .set("empty-map", Value::record(Vec::<(&str, i64)>::new()));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("zero"), Some(&Value::Int(0)));
}

#[test]
fn blank_entries_are_ignored() {
    let mut map: ExMap = ExMap::new();
    map.set("", Value::Int(1))
        .set(Value::Nil, Value::Int(1))
        .set("k", Value::Nil)
        .set("k", Value::from(""))
        .set("k", Value::vec(Vec::<i64>::new()))
        .only(Value::Nil);
    assert!(map.is_empty());
}

#[test]
fn get_mut_updates_in_place() {
    let mut map: ExMap<i64> = [("a", 1), ("b", 2)].into_iter().collect();
    if let Some(v) = map.get_mut("a") {
        *v += 10;
    }
    assert_eq!(map.to_array(), vec![11, 2]);
}

#[test]
fn int_and_float_keys_are_distinct() {
    let mut map: ExMap<&str> = ExMap::new();
    map.set(1, "int").set(1.0, "float");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(1), Some(&"int"));
    assert_eq!(map.get(1.0), Some(&"float"));
}

// =============================================================================
// Key Modes
// =============================================================================

#[test]
fn structural_keys_collapse() {
    let mut map: ExMap<&str> = ExMap::new();
    map.set(Value::record([("a", 1)]), "v1");
    map.set(Value::record([("a", 1)]), "v2");

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(Value::record([("a", 1)])), Some(&"v2"));
}

#[test]
fn first_registered_composite_key_is_kept() {
    let mut map: ExMap<i64> = ExMap::new();
    map.set(Value::record([("x", 1), ("y", 2)]), 1);
    map.set(Value::record([("y", 2), ("x", 1)]), 2);
    assert_eq!(map.keys().next(), Some(&Value::record([("x", 1), ("y", 2)])));
}

#[test]
fn primitive_keys_are_unaffected_by_mode() {
    let mut map: ExMap<i64> = ExMap::new();
    map.set(5, 1).set("5", 2);
    map.set(task("a"), 3);

    assert_eq!(map.key_mode(), KeyMode::Structural);
    assert_eq!(map.get(5), Some(&1));
    assert_eq!(map.get("5"), Some(&2));
    assert_eq!(map.keys().next(), Some(&Value::Int(5)));
}

#[test]
fn mode_returns_to_primitive_when_last_composite_deleted() {
    let mut map: ExMap<i64> = ExMap::new();
    map.set("plain", 0).set(task("a"), 1).set(task("b"), 2);

    assert!(map.delete(task("a")));
    assert_eq!(map.key_mode(), KeyMode::Structural);
    assert!(map.delete(task("b")));
    assert_eq!(map.key_mode(), KeyMode::Primitive);
    assert_eq!(map.structural_keys(), 0);
}

// =============================================================================
// Deletion
// =============================================================================

#[test]
fn delete_reports_misses() {
    let mut map: ExMap<i64> = [("a", 1)].into_iter().collect();
    assert!(!map.delete("z"));
    assert!(map.delete("a"));
    assert!(map.is_empty());
}

#[test]
fn delete_where_removes_adjacent_matches() {
    let mut map: ExMap<i64> = ["a", "b", "c", "d"].into_iter().zip(1..).collect();
    assert!(map.delete_where(|_, v| *v == 2 || *v == 3));
    assert_eq!(map.to_array(), vec![1, 4]);
}

#[test]
fn reinserted_key_moves_to_end() {
    let mut map: ExMap<i64> = [("a", 1), ("b", 2)].into_iter().collect();
    map.delete("a");
    map.set("a", 3);
    assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec![Value::from("b"), Value::from("a")]);
}

#[test]
fn eager_and_lazy_configs_agree() {
    let ops = |config: ExMapConfig| {
        let mut map: ExMap<usize> = ExMap::with_config(config);
        map.extend((0..100usize).map(|i| (i, i)));
        for i in (0..100usize).step_by(3) {
            map.delete(i);
        }
        map.to_pairs()
    };
    assert_eq!(ops(ExMapConfig::default()), ops(ExMapConfig::eager()));
    assert_eq!(
        ops(ExMapConfig::default()),
        ops(ExMapConfig::sized(8).with_compact_min_tombstones(2))
    );
}

#[test]
fn only_after_delete_overwrites_existing_length_key() {
    let mut map: ExMap<&str> = ExMap::new();
    map.only("a").only("b").only("c");
    map.delete(0);
    map.only("d");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(2), Some(&"d"));
    assert_eq!(map.index_of(2), Some(1));
}

#[test]
fn nan_payloads_are_separate_keys() {
    let quiet = f64::from_bits(0x7ff8_0000_0000_0000);
    let tagged = f64::from_bits(0x7ff8_0000_0000_0001);

    let mut map: ExMap<i64> = ExMap::new();
    map.set(quiet, 1)
        .set(tagged, 2)
        .set(Value::vec([quiet]), 3)
        .set(Value::vec([tagged]), 4);

    assert_eq!(map.len(), 4);
    assert_eq!(map.structural_keys(), 2);
    assert_eq!(map.get(Value::vec([tagged])), Some(&4));
    assert_eq!(map.get(quiet), Some(&1));
}
