//! Canonical structural encoding of values.
//!
//! The encoding is deterministic and injective: two values encode to the
//! same text exactly when they are equal. Containers use it as the storage
//! identity of composite keys, so `{a: 1}` built twice (or built in a
//! different insertion order) lands on the same entry.
//!
//! | Value            | Encoding              |
//! |------------------|-----------------------|
//! | `Nil`            | `nil`                 |
//! | `Bool`           | `true` / `false`      |
//! | `Int`            | `42`                  |
//! | `BigInt`         | `42n`                 |
//! | `Float`          | `42.0`, `inf`, `NaN:7ff8000000000000` |
//! | `String`         | `"text"` (escaped)    |
//! | `Symbol`         | `'"text"` (escaped)   |
//! | `Vec`            | `[a,b]`               |
//! | `Set`            | `#{a,b}` (sorted)     |
//! | `Map`            | `{k:v,k:v}` (sorted)  |

use std::fmt::{self, Write};

use crate::value::Value;

impl Value {
    /// Returns the canonical structural encoding of this value.
    ///
    /// ```
    /// use exmap_foundation::Value;
    ///
    /// let a = Value::record([("x", 1), ("y", 2)]);
    /// let b = Value::record([("y", 2), ("x", 1)]);
    /// assert_eq!(a.canonical(), b.canonical());
    /// assert_eq!(Value::vec([1, 2]).canonical(), "[1,2]");
    /// ```
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_canonical(&mut out, self);
        out
    }
}

/// Writes the canonical encoding of `value` into `out`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_canonical<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Nil => out.write_str("nil"),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Int(n) => write!(out, "{n}"),
        Value::BigInt(n) => write!(out, "{n}n"),
        // NaN payloads are distinct values, so the bits are spelled out.
        Value::Float(n) if n.is_nan() => write!(out, "NaN:{:x}", n.to_bits()),
        // Debug keeps a decimal point on whole floats, so 1.0 never reads as 1.
        Value::Float(n) => write!(out, "{n:?}"),
        Value::String(s) => write!(out, "{:?}", &**s),
        Value::Symbol(s) => write!(out, "'{:?}", &**s),
        Value::Vec(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_canonical(out, item)?;
            }
            out.write_char(']')
        }
        Value::Set(items) => {
            let mut members: Vec<String> = items.iter().map(Value::canonical).collect();
            members.sort_unstable();
            out.write_str("#{")?;
            out.write_str(&members.join(","))?;
            out.write_char('}')
        }
        Value::Map(fields) => {
            let mut entries: Vec<(String, String)> = fields
                .iter()
                .map(|(k, v)| (k.canonical(), v.canonical()))
                .collect();
            entries.sort_unstable();
            out.write_char('{')?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write!(out, "{k}:{v}")?;
            }
            out.write_char('}')
        }
    }
}
