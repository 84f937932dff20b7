//! Integration tests for traversal and positional queries

use exmap::{ExMap, Value};

fn xyz() -> ExMap<&'static str> {
    [("x", "X"), ("y", "Y"), ("z", "Z")].into_iter().collect()
}

#[test]
fn first_and_last() {
    let map = xyz();
    assert_eq!(map.first(), Some(&"X"));
    assert_eq!(map.last(), Some(&"Z"));
}

#[test]
fn next_and_previous() {
    let map = xyz();
    assert_eq!(map.next("x"), Some(&Value::from("y")));
    assert_eq!(map.previous("y"), Some(&Value::from("x")));
    assert_eq!(map.next("z"), None);
    assert_eq!(map.previous("x"), None);
    assert_eq!(map.next("w"), None);
}

#[test]
fn neighbours_skip_deleted_entries() {
    let mut map = xyz();
    map.delete("y");
    assert_eq!(map.next("x"), Some(&Value::from("z")));
    assert_eq!(map.previous("z"), Some(&Value::from("x")));
    assert_eq!(map.index(1), Some((&Value::from("z"), &"Z")));
}

#[test]
fn index_and_index_of() {
    let map = xyz();
    assert_eq!(map.index(0), Some((&Value::from("x"), &"X")));
    assert_eq!(map.index(3), None);
    assert_eq!(map.index_of("z"), Some(2));
    assert_eq!(map.index_of("q"), None);
}

#[test]
fn structural_neighbours_hand_back_original_keys() {
    let mut map: ExMap<i64> = ExMap::new();
    let composite = Value::vec([1, 2]);
    map.set("a", 1).set(composite.clone(), 2).set("c", 3);

    assert_eq!(map.next("a"), Some(&composite));
    assert_eq!(map.previous("c"), Some(&composite));
    assert_eq!(map.index_of(Value::vec([1, 2])), Some(1));
}

#[test]
fn empty_container() {
    let map: ExMap = ExMap::new();
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.index(0), None);
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn iteration_is_double_ended() {
    let map = xyz();
    let reversed: Vec<&str> = map.values().rev().copied().collect();
    assert_eq!(reversed, vec!["Z", "Y", "X"]);
    let borrowed: Vec<&Value> = (&map).into_iter().map(|(k, _)| k).collect();
    assert_eq!(borrowed.len(), 3);
}
