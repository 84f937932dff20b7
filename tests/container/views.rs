//! Integration tests for functional views

use std::borrow::Cow;

use exmap::{ExMap, ExMapConfig, SliceBound, Value};

fn abcde() -> ExMap<i64> {
    [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]
        .into_iter()
        .collect()
}

#[test]
fn for_each_middle_element() {
    let map: ExMap<&str> = [("x", "X"), ("y", "Y"), ("z", "Z")].into_iter().collect();
    let mut middle = None;
    map.for_each(|step| {
        if step.key == &Value::from("y") {
            middle = Some((step.next.cloned(), step.previous.cloned(), step.index));
        }
    });
    assert_eq!(
        middle,
        Some((Some(Value::from("z")), Some(Value::from("x")), 1))
    );
}

#[test]
fn slice_inclusive_run() {
    let map = abcde();
    let window = map.slice(Some(SliceBound::key("b")), Some(SliceBound::key("d")), false);
    assert_eq!(window.to_array(), vec![2, 3, 4]);
    assert!(matches!(window, Cow::Owned(_)));
}

#[test]
fn slice_without_bounds_is_unchanged() {
    let map = abcde();
    let same = map.slice(None, None, false);
    assert_eq!(*same, map);
}

#[test]
fn slice_with_composite_bound() {
    let mut map: ExMap<i64> = ExMap::new();
    map.set("a", 1).set(Value::vec([2]), 2).set("c", 3);
    let window = map.slice(Some(SliceBound::key(Value::vec([2]))), None, true);
    assert_eq!(window.to_pairs(), vec![(Value::Int(0), 2), (Value::Int(1), 3)]);
}

#[test]
fn filter_inherits_config() {
    let map: ExMap<i64> = {
        let mut map = ExMap::with_config(ExMapConfig::eager());
        map.extend([("a", 1), ("b", 2)]);
        map
    };
    let filtered = map.filter(|v, _, _| *v > 1);
    assert_eq!(filtered.config(), &ExMapConfig::eager());
    assert_eq!(filtered.to_array(), vec![2]);
}

#[test]
fn views_do_not_mutate() {
    let map = abcde();
    let _ = map.filter(|_, _, _| false);
    let _ = map.slice(Some(SliceBound::key("c")), None, true);
    let _ = map.map(|v, _, _| v * 2);
    assert_eq!(map.len(), 5);
    assert_eq!(map.to_array(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn find_and_some_see_the_container() {
    let map = abcde();
    assert!(map.some(|_, _, m| m.len() == 5));
    assert_eq!(
        map.find(|_, k, m| m.next(k).is_none()),
        Some((&Value::from("e"), &5))
    );
}
