//! The [`Payload`] trait: what a container needs to know about its values.

use std::sync::Arc;

use exmap_foundation::{LtVec, Value};

/// A value that can be stored in an [`ExMap`](crate::ExMap).
///
/// Every method has a default, so a plain domain type only needs
/// `impl Payload for Task {}`. Override [`field`](Payload::field) to make the
/// type usable with `by_key_field` ingestion.
///
/// ```
/// use exmap_container::{ExMap, IngestOptions, Payload, Source};
/// use exmap_foundation::Value;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User {
///     id: String,
///     name: String,
/// }
///
/// impl Payload for User {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(Value::from(self.id.as_str())),
///             "name" => Some(Value::from(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let users = vec![
///     User { id: "u1".into(), name: "Ada".into() },
///     User { id: "u2".into(), name: "Lin".into() },
/// ];
/// let map: ExMap<User> = ExMap::from_source(Source::sequence(users), &IngestOptions::by_key("id"));
/// assert_eq!(map.get("u2").map(|u| u.name.as_str()), Some("Lin"));
/// ```
pub trait Payload: Clone {
    /// Returns true if this value counts as "empty" and must not be stored.
    fn is_blank(&self) -> bool {
        false
    }

    /// Returns the value of a named field, used as a key by `by_key_field`.
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Splits a `[key, value]`-shaped element of a sequence source.
    fn as_pair(&self) -> Option<(Value, Self)> {
        None
    }

    /// Rebuilds a pair-shaped element, for pair sources ingested with
    /// `is_not_map` set.
    fn from_pair(_key: Value, _value: Self) -> Option<Self> {
        None
    }
}

impl Payload for Value {
    fn is_blank(&self) -> bool {
        Value::is_blank(self)
    }

    fn field(&self, name: &str) -> Option<Value> {
        Value::field(self, name).cloned()
    }

    fn as_pair(&self) -> Option<(Value, Self)> {
        let items = self.as_vec()?;
        if items.len() != 2 {
            return None;
        }
        let key = items.first()?;
        if key.is_blank() {
            return None;
        }
        Some((key.clone(), items.last()?.clone()))
    }

    fn from_pair(key: Value, value: Self) -> Option<Self> {
        Some(Value::Vec(LtVec::new().push_back(key).push_back(value)))
    }
}

impl Payload for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Payload for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone> Payload for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Payload> Payload for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Payload::is_blank)
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.as_ref()?.field(name)
    }
}

impl<T: Payload> Payload for Arc<T> {
    fn is_blank(&self) -> bool {
        T::is_blank(self)
    }

    fn field(&self, name: &str) -> Option<Value> {
        T::field(self, name)
    }
}

macro_rules! scalar_payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

scalar_payload!(bool, i32, i64, u32, u64, usize, f32, f64);
