//! The [`ExMap`] container: point access, insertion, deletion, and traversal.

use std::fmt;

use exmap_foundation::Value;

use crate::config::ExMapConfig;
use crate::identity::{Identity, KeyMode, KeyState};
use crate::payload::Payload;
use crate::store::OrderedStore;

/// An insertion-ordered map that accepts any [`Value`] as a key.
///
/// Primitive keys (strings, numbers, booleans, symbols, nil) are stored as
/// they are. Composite keys (vectors, sets, maps) are stored under their
/// canonical encoding, so two separately built but equal composites address
/// the same entry.
///
/// Blank keys and values (nil, `""`, `[]`, or whatever [`Payload::is_blank`]
/// says) are silently ignored by every inserting operation. Misses are
/// reported as `None`, never as errors.
///
/// ```
/// use exmap_container::ExMap;
/// use exmap_foundation::Value;
///
/// let mut map: ExMap<&'static str> = ExMap::new();
/// map.set("a", "first").set(Value::record([("x", 1)]), "composite");
///
/// assert_eq!(map.get("a"), Some(&"first"));
/// assert_eq!(map.get(Value::record([("x", 1)])), Some(&"composite"));
/// assert_eq!(map.index_of(Value::record([("x", 1)])), Some(1));
/// ```
#[derive(Clone)]
pub struct ExMap<V = Value> {
    pub(crate) store: OrderedStore<V>,
    pub(crate) keys: KeyState,
    pub(crate) config: ExMapConfig,
}

impl<V> ExMap<V> {
    /// Creates an empty container with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ExMapConfig::default())
    }

    /// Creates an empty container with the given configuration.
    #[must_use]
    pub fn with_config(config: ExMapConfig) -> Self {
        Self {
            store: OrderedStore::with_capacity(config.initial_capacity),
            keys: KeyState::default(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ExMapConfig {
        &self.config
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Returns the current key mode.
    #[must_use]
    pub fn key_mode(&self) -> KeyMode {
        self.keys.mode()
    }

    /// Returns the number of composite keys currently stored.
    #[must_use]
    pub fn structural_keys(&self) -> usize {
        self.keys.structural_len()
    }

    /// Returns the storage identity `key` resolves to in this container.
    ///
    /// Registered composite keys hand back the stored encoding. Nothing is
    /// registered by the call.
    pub fn identity_of(&self, key: impl Into<Value>) -> Identity {
        self.keys.identity(&key.into())
    }

    /// Returns the original key stored under `identity`.
    #[must_use]
    pub fn resolve<'a>(&'a self, identity: &'a Identity) -> Option<&'a Value> {
        if !self.store.contains(identity) {
            return None;
        }
        self.keys.original(identity)
    }

    /// Identity for a read. Blank keys resolve to nothing.
    fn lookup(key: Value) -> Option<Identity> {
        if key.is_blank() {
            return None;
        }
        Some(Identity::of(&key))
    }

    /// Returns true if an entry exists for `key`.
    pub fn has(&self, key: impl Into<Value>) -> bool {
        Self::lookup(key.into()).is_some_and(|id| self.store.contains(&id))
    }

    /// Returns the value stored for `key`.
    ///
    /// `None` means "not found"; a stored falsy value such as `0` or `false`
    /// is still `Some`.
    pub fn get(&self, key: impl Into<Value>) -> Option<&V> {
        let id = Self::lookup(key.into())?;
        self.store.get(&id)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: impl Into<Value>) -> Option<&mut V> {
        let id = Self::lookup(key.into())?;
        self.store.get_mut(&id)
    }

    /// Removes the entry for `key`. Returns whether anything was removed.
    pub fn delete(&mut self, key: impl Into<Value>) -> bool {
        let Some(id) = Self::lookup(key.into()) else {
            return false;
        };
        if self.store.remove(&id, &self.config).is_none() {
            return false;
        }
        self.keys.release(&id);
        true
    }

    /// Removes every entry for which `predicate(key, value)` holds.
    ///
    /// All entries are tested before any is removed, so removals never
    /// cause a neighbour to be skipped. Returns true if anything was removed.
    pub fn delete_where<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, &V) -> bool,
    {
        let doomed: Vec<Identity> = self
            .iter_identities()
            .filter(|&(_, key, value)| predicate(key, value))
            .map(|(id, _, _)| id.clone())
            .collect();
        if doomed.is_empty() {
            return false;
        }

        self.store.remove_all(&doomed);
        for id in &doomed {
            self.keys.release(id);
        }
        true
    }

    /// Removes every entry and returns to primitive key mode.
    pub fn clear(&mut self) {
        self.store.clear();
        self.keys = KeyState::default();
    }

    /// The first value in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.store.iter().next().map(|(_, v)| v)
    }

    /// The last value in iteration order.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.store.iter().next_back().map(|(_, v)| v)
    }

    /// The key following `key`, or `None` if `key` is absent or last.
    pub fn next(&self, key: impl Into<Value>) -> Option<&Value> {
        let id = Self::lookup(key.into())?;
        let next = self.store.after(&id)?;
        self.keys.original(next)
    }

    /// The key preceding `key`, or `None` if `key` is absent or first.
    pub fn previous(&self, key: impl Into<Value>) -> Option<&Value> {
        let id = Self::lookup(key.into())?;
        let previous = self.store.before(&id)?;
        self.keys.original(previous)
    }

    /// The entry at zero-based position `position`.
    #[must_use]
    pub fn index(&self, position: usize) -> Option<(&Value, &V)> {
        let (id, value) = self.store.nth(position)?;
        Some((self.keys.original(id)?, value))
    }

    /// The zero-based position of `key`, scanning in iteration order.
    pub fn index_of(&self, key: impl Into<Value>) -> Option<usize> {
        let id = Self::lookup(key.into())?;
        self.store.iter().position(|(candidate, _)| *candidate == id)
    }

    /// Iterates `(key, value)` pairs in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Value, &V)> {
        self.iter_identities().map(|(_, key, value)| (key, value))
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates values in order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.store.iter().map(|(_, value)| value)
    }

    pub(crate) fn iter_identities(&self) -> impl DoubleEndedIterator<Item = (&Identity, &Value, &V)> {
        self.store
            .iter()
            .filter_map(|(id, value)| Some((id, self.keys.original(id)?, value)))
    }

    /// An empty container sharing this one's configuration.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl<V: Payload> ExMap<V> {
    /// Inserts or overwrites the value for `key`.
    ///
    /// An existing key keeps its position. Blank keys or values leave the
    /// container untouched.
    pub fn set(&mut self, key: impl Into<Value>, value: V) -> &mut Self {
        let key = key.into();
        if key.is_blank() || value.is_blank() {
            return self;
        }
        let id = self.keys.intern(key);
        self.store.insert(id, value);
        self
    }

    /// Appends `value` under the current length as an integer key.
    ///
    /// On a container that has seen deletes, the current length may already
    /// be a key; that entry is then overwritten in place.
    pub fn only(&mut self, value: V) -> &mut Self {
        if value.is_blank() {
            return self;
        }
        let id = Identity::Key(Value::from(self.len()));
        self.store.insert(id, value);
        self
    }
}

impl<V> Default for ExMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ExMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for ExMap<V> {
    /// Two containers are equal when they hold the same entries in the same
    /// order. Configuration is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Into<Value>, V: Payload> FromIterator<(K, V)> for ExMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Value>, V: Payload> Extend<(K, V)> for ExMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a ExMap<V> {
    type Item = (&'a Value, &'a V);
    type IntoIter = Box<dyn DoubleEndedIterator<Item = (&'a Value, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
