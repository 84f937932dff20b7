//! Integration tests for canonical encoding
//!
//! The encoding is the storage identity of composite keys, so these tests pin
//! down determinism and the separations it must keep.

use exmap_foundation::Value;
use exmap_foundation::canonical::write_canonical;

#[test]
fn scalars() {
    assert_eq!(Value::Nil.canonical(), "nil");
    assert_eq!(Value::Bool(true).canonical(), "true");
    assert_eq!(Value::Int(-3).canonical(), "-3");
    assert_eq!(Value::BigInt(3).canonical(), "3n");
    assert_eq!(Value::Float(1.0).canonical(), "1.0");
    assert_eq!(Value::from("a").canonical(), "\"a\"");
    assert_eq!(Value::symbol("a").canonical(), "'\"a\"");
}

#[test]
fn vectors_keep_order() {
    assert_eq!(Value::vec([1, 2]).canonical(), "[1,2]");
    assert_ne!(Value::vec([1, 2]).canonical(), Value::vec([2, 1]).canonical());
}

#[test]
fn maps_are_order_independent() {
    let a = Value::record([("name", "x"), ("id", "1")]);
    let b = Value::record([("id", "1"), ("name", "x")]);
    assert_eq!(a.canonical(), b.canonical());
}

#[test]
fn sets_are_order_independent() {
    assert_eq!(Value::set([3, 1, 2]).canonical(), Value::set([2, 3, 1]).canonical());
}

#[test]
fn numeric_kinds_stay_apart() {
    let encodings = [
        Value::Int(1).canonical(),
        Value::BigInt(1).canonical(),
        Value::Float(1.0).canonical(),
        Value::from("1").canonical(),
    ];
    for (i, a) in encodings.iter().enumerate() {
        for b in &encodings[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn escaping_prevents_collisions() {
    let tricky = Value::vec([Value::from("a\",\"b")]);
    let plain = Value::vec(["a", "b"]);
    assert_ne!(tricky.canonical(), plain.canonical());
}

#[test]
fn nesting_is_preserved() {
    let nested = Value::vec([Value::vec([1, 2]), Value::Int(3)]);
    let flat = Value::vec([1, 2, 3]);
    assert_ne!(nested.canonical(), flat.canonical());
    assert_eq!(nested.canonical(), "[[1,2],3]");
}

#[test]
fn write_canonical_appends() {
    let mut out = String::from("key=");
    write_canonical(&mut out, &Value::vec([1])).unwrap();
    assert_eq!(out, "key=[1]");
}
