//! Array-style views over a container.
//!
//! None of these mutate the receiver. `filter` and `slice` build new
//! containers; the rest read in iteration order. Callbacks only ever see
//! `&ExMap`, so a container cannot be changed while it is being walked.

use std::borrow::Cow;

use exmap_foundation::Value;

use crate::identity::Identity;
use crate::map::ExMap;
use crate::payload::Payload;

/// One step of [`ExMap::for_each`].
#[derive(Debug)]
pub struct Visit<'a, V> {
    /// The current value.
    pub value: &'a V,
    /// The current key.
    pub key: &'a Value,
    /// The key after this one, if any.
    pub next: Option<&'a Value>,
    /// The key before this one, if any.
    pub previous: Option<&'a Value>,
    /// Zero-based position of this entry.
    pub index: usize,
    /// The container being walked.
    pub map: &'a ExMap<V>,
}

/// One end of a [`ExMap::slice`] window.
pub enum SliceBound<'f, V> {
    /// The entry whose key equals this key.
    Key(Value),
    /// The first entry for which the predicate holds.
    Matching(Box<dyn FnMut(&V, &Value) -> bool + 'f>),
}

impl<'f, V> SliceBound<'f, V> {
    /// A bound at a literal key.
    pub fn key(key: impl Into<Value>) -> Self {
        Self::Key(key.into())
    }

    /// A bound at the first entry matching `predicate(value, key)`.
    pub fn matching<F>(predicate: F) -> Self
    where
        F: FnMut(&V, &Value) -> bool + 'f,
    {
        Self::Matching(Box::new(predicate))
    }

    /// A blank literal key names no entry and counts as an omitted bound.
    fn is_blank(&self) -> bool {
        matches!(self, Self::Key(key) if key.is_blank())
    }

    /// Resolves a key bound to an identity once, up front.
    fn prepare(self) -> Prepared<'f, V> {
        match self {
            Self::Key(key) => Prepared::Identity(Identity::of(&key)),
            Self::Matching(predicate) => Prepared::Matching(predicate),
        }
    }
}

enum Prepared<'f, V> {
    Identity(Identity),
    Matching(Box<dyn FnMut(&V, &Value) -> bool + 'f>),
}

impl<V> Prepared<'_, V> {
    fn hit(&mut self, id: &Identity, key: &Value, value: &V) -> bool {
        match self {
            Self::Identity(target) => *target == *id,
            Self::Matching(predicate) => predicate(value, key),
        }
    }
}

impl<V> ExMap<V> {
    /// Applies `f(value, key, index)` to every entry, collecting the results.
    pub fn map<R, F>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(&V, &Value, usize) -> R,
    {
        self.iter()
            .enumerate()
            .map(|(index, (key, value))| f(value, key, index))
            .collect()
    }

    /// Returns true as soon as `f(value, key, map)` holds for an entry.
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &Value, &Self) -> bool,
    {
        self.iter().any(|(key, value)| f(value, key, self))
    }

    /// Returns the first entry for which `f(value, key, map)` holds.
    pub fn find<F>(&self, mut f: F) -> Option<(&Value, &V)>
    where
        F: FnMut(&V, &Value, &Self) -> bool,
    {
        self.iter().find(|&(key, value)| f(value, key, self))
    }

    /// Walks every entry with its neighbours' keys and its position.
    ///
    /// Neighbour keys are gathered in one pass before the walk, so the whole
    /// traversal is O(n).
    ///
    /// ```
    /// use exmap_container::ExMap;
    /// use exmap_foundation::Value;
    ///
    /// let map: ExMap<i64> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
    /// map.for_each(|step| {
    ///     if step.index == 1 {
    ///         assert_eq!(step.previous, Some(&Value::from("x")));
    ///         assert_eq!(step.next, Some(&Value::from("z")));
    ///     }
    /// });
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Visit<'_, V>),
    {
        let keys: Vec<&Value> = self.keys().collect();
        for (index, value) in self.values().enumerate() {
            f(Visit {
                value,
                key: keys[index],
                next: keys.get(index + 1).copied(),
                previous: index.checked_sub(1).map(|i| keys[i]),
                index,
                map: self,
            });
        }
    }
}

impl<V: Payload> ExMap<V> {
    /// Returns a new container holding the entries for which
    /// `f(value, key, map)` holds, in their original order.
    #[must_use]
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&V, &Value, &Self) -> bool,
    {
        let mut filtered = self.empty_like();
        for (key, value) in self.iter() {
            if f(value, key, self) {
                filtered.set(key.clone(), value.clone());
            }
        }
        filtered
    }

    /// Returns the window of entries between `start` and `end`, inclusive.
    ///
    /// The window opens at the first entry matching `start` (or at the first
    /// entry when `start` is `None`) and closes at the first entry from
    /// there on matching `end` (or runs to the last entry). An entry is
    /// checked against `start` before `end`, so one entry matching both forms
    /// a window of its own. A `start` that never matches gives an empty
    /// container.
    ///
    /// A blank literal bound (nil, `""`, `[]`) is treated as omitted. With
    /// both bounds omitted the receiver itself is returned. `reindex`
    /// keys the result `0..n` instead of carrying the original keys.
    ///
    /// ```
    /// use exmap_container::{ExMap, SliceBound};
    ///
    /// let map: ExMap<i64> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
    /// let window = map.slice(Some(SliceBound::key("b")), Some(SliceBound::matching(|v: &i64, _| *v == 3)), false);
    /// assert_eq!(window.to_array(), vec![2, 3]);
    /// ```
    pub fn slice(
        &self,
        start: Option<SliceBound<'_, V>>,
        end: Option<SliceBound<'_, V>>,
        reindex: bool,
    ) -> Cow<'_, Self> {
        let start = start.filter(|bound| !bound.is_blank());
        let end = end.filter(|bound| !bound.is_blank());
        if start.is_none() && end.is_none() {
            return Cow::Borrowed(self);
        }

        let mut start = start.map(SliceBound::prepare);
        let mut end = end.map(SliceBound::prepare);
        let mut window = self.empty_like();
        let mut open = start.is_none();

        for (id, key, value) in self.iter_identities() {
            if !open {
                open = start.as_mut().is_some_and(|s| s.hit(id, key, value));
                if !open {
                    continue;
                }
            }

            if reindex {
                window.only(value.clone());
            } else {
                window.set(key.clone(), value.clone());
            }

            if end.as_mut().is_some_and(|e| e.hit(id, key, value)) {
                break;
            }
        }

        Cow::Owned(window)
    }

    /// Values in iteration order.
    #[must_use]
    pub fn to_array(&self) -> Vec<V> {
        self.values().cloned().collect()
    }

    /// `(key, value)` pairs in iteration order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(Value, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
