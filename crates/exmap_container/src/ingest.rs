//! Bulk ingestion from heterogeneous sources.
//!
//! A [`Source`] names the shape of the input up front; [`Source::classify`]
//! is the one place where a dynamic [`Value`] is inspected to pick a shape.
//! Ingestion is always additive: existing entries are kept, and keys that
//! reappear are overwritten in place.

use std::sync::Arc;

use exmap_foundation::Value;

use crate::map::ExMap;
use crate::payload::Payload;

/// Options controlling how sequence-like sources are keyed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field of each element whose value becomes the element's key.
    ///
    /// Applies to sequences, pairs, sets, and containers. Elements lacking
    /// the field (or holding a blank value in it) keep their default key.
    pub by_key_field: Option<Arc<str>>,

    /// Key sequence elements by position even when they look like
    /// `[key, value]` pairs.
    pub is_not_map: bool,
}

impl IngestOptions {
    /// Creates the default options: positional keys, pairs recognised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that key every element by `field`.
    #[must_use]
    pub fn by_key(field: &str) -> Self {
        Self::new().with_key_field(field)
    }

    /// Builder method to set the key field.
    #[must_use]
    pub fn with_key_field(mut self, field: &str) -> Self {
        self.by_key_field = Some(field.into());
        self
    }

    /// Builder method to force positional keys.
    #[must_use]
    pub fn with_not_map(mut self, is_not_map: bool) -> Self {
        self.is_not_map = is_not_map;
        self
    }

    /// Picks the key for `value`: its key field if present, else `fallback`.
    fn key_for<V: Payload>(&self, value: &V, fallback: Value) -> Value {
        self.by_key_field
            .as_deref()
            .and_then(|field| value.field(field))
            .filter(|key| !key.is_blank())
            .unwrap_or(fallback)
    }
}

/// The shape of an ingestion source.
#[derive(Clone, Debug)]
pub enum Source<V = Value> {
    /// Nothing to ingest.
    Empty,
    /// Field → value pairs; each field is a key. Key-field options are ignored.
    Record(Vec<(Value, V)>),
    /// Plain elements, keyed by position (offset by the current length)
    /// unless an element looks like a `[key, value]` pair.
    Sequence(Vec<V>),
    /// Explicit `(key, value)` pairs.
    Pairs(Vec<(Value, V)>),
    /// Distinct elements, keyed by iteration index.
    UniqueSet(Vec<V>),
    /// Another container; its keys and values carry over.
    Container(ExMap<V>),
    /// A single value, keyed by the current length. Key-field options are
    /// ignored.
    Scalar(V),
}

impl<V> Source<V> {
    /// A record source from field/value pairs.
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
    {
        Self::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A sequence source.
    pub fn sequence<I: IntoIterator<Item = V>>(items: I) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    /// A source of explicit key/value pairs.
    pub fn pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
    {
        Self::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A set source. Duplicates are the caller's concern.
    pub fn unique<I: IntoIterator<Item = V>>(items: I) -> Self {
        Self::UniqueSet(items.into_iter().collect())
    }

    /// Name of the shape, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
            Self::Pairs(_) => "pairs",
            Self::UniqueSet(_) => "set",
            Self::Container(_) => "container",
            Self::Scalar(_) => "scalar",
        }
    }
}

impl Source<Value> {
    /// Classifies a dynamic value into a source shape.
    ///
    /// | Value                          | Source       |
    /// |--------------------------------|--------------|
    /// | `Map`                          | `Record`     |
    /// | `Vec`                          | `Sequence`   |
    /// | `Set`                          | `UniqueSet`  |
    /// | `String`, `Int`, `BigInt`, `Float` | `Scalar` |
    /// | `Nil`, `Bool`, `Symbol`        | `Empty`      |
    ///
    /// Maps and sets have no inherent order, so their members are sorted by
    /// canonical encoding to make ingestion deterministic.
    #[must_use]
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Map(fields) => {
                let mut fields: Vec<(Value, Value)> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                fields.sort_by_cached_key(|(k, _)| k.canonical());
                Self::Record(fields)
            }
            Value::Vec(items) => Self::Sequence(items.into_iter().collect()),
            Value::Set(items) => {
                let mut items: Vec<Value> = items.iter().cloned().collect();
                items.sort_by_cached_key(Value::canonical);
                Self::UniqueSet(items)
            }
            scalar @ (Value::String(_) | Value::Int(_) | Value::BigInt(_) | Value::Float(_)) => {
                Self::Scalar(scalar)
            }
            Value::Nil | Value::Bool(_) | Value::Symbol(_) => Self::Empty,
        }
    }
}

impl<V> From<ExMap<V>> for Source<V> {
    fn from(map: ExMap<V>) -> Self {
        Self::Container(map)
    }
}

impl From<Value> for Source<Value> {
    fn from(value: Value) -> Self {
        Self::classify(value)
    }
}

impl<V: Payload> ExMap<V> {
    /// Creates a container from a source.
    #[must_use]
    pub fn from_source(source: impl Into<Source<V>>, options: &IngestOptions) -> Self {
        let mut map = Self::new();
        map.ingest(source, options);
        map
    }

    /// Adds every entry of `source` to this container.
    ///
    /// Sequence elements are keyed by their position plus the length before
    /// ingestion started, so concatenating two sequences appends. Set
    /// elements are keyed by their position alone.
    pub fn ingest(&mut self, source: impl Into<Source<V>>, options: &IngestOptions) -> &mut Self {
        let source = source.into();
        let shape = source.shape();
        let base = self.len();

        match source {
            Source::Empty => {}
            Source::Record(fields) => {
                for (key, value) in fields {
                    self.set(key, value);
                }
            }
            Source::Sequence(items) => {
                for (offset, item) in items.into_iter().enumerate() {
                    let pair = if options.is_not_map { None } else { item.as_pair() };
                    match pair {
                        Some((key, value)) => {
                            let key = options.key_for(&value, key);
                            self.set(key, value);
                        }
                        None => {
                            let key = options.key_for(&item, Value::from(base + offset));
                            self.set(key, item);
                        }
                    }
                }
            }
            Source::Pairs(pairs) => {
                for (offset, (key, value)) in pairs.into_iter().enumerate() {
                    if options.is_not_map {
                        let positional = Value::from(base + offset);
                        match V::from_pair(key, value.clone()) {
                            Some(whole) => {
                                let key = options.key_for(&whole, positional);
                                self.set(key, whole);
                            }
                            None => {
                                let key = options.key_for(&value, positional);
                                self.set(key, value);
                            }
                        }
                    } else {
                        let key = options.key_for(&value, key);
                        self.set(key, value);
                    }
                }
            }
            Source::UniqueSet(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    let key = options.key_for(&item, Value::from(index));
                    self.set(key, item);
                }
            }
            Source::Container(other) => {
                for (key, value) in other.iter() {
                    let key = options.key_for(value, key.clone());
                    self.set(key, value.clone());
                }
            }
            Source::Scalar(value) => {
                self.set(Value::from(base), value);
            }
        }

        tracing::trace!(
            shape,
            added = self.len() - base,
            total = self.len(),
            "ingested source"
        );
        self
    }

    /// Same as [`ingest`](Self::ingest); appends any source to the container.
    pub fn concat(&mut self, source: impl Into<Source<V>>, options: &IngestOptions) -> &mut Self {
        self.ingest(source, options)
    }
}
