//! Insertion-ordered slot storage.
//!
//! Entries live in a slot vector in iteration order; a hash index maps each
//! identity to its slot. Removal tombstones the slot (mark) and a later pass
//! squeezes tombstones out and rebuilds the index (compact), so deletes never
//! shift entries that a caller is still scanning.

use std::collections::HashMap;

use crate::config::ExMapConfig;
use crate::identity::Identity;

#[derive(Clone, Debug)]
struct Slot<V> {
    identity: Identity,
    value: V,
}

/// Ordered identity → value storage with tombstoned removal.
#[derive(Clone, Debug)]
pub(crate) struct OrderedStore<V> {
    slots: Vec<Option<Slot<V>>>,
    index: HashMap<Identity, usize>,
    tombstones: usize,
}

impl<V> OrderedStore<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            tombstones: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.tombstones
    }

    pub(crate) fn contains(&self, identity: &Identity) -> bool {
        self.index.contains_key(identity)
    }

    pub(crate) fn get(&self, identity: &Identity) -> Option<&V> {
        let slot = *self.index.get(identity)?;
        self.slots[slot].as_ref().map(|s| &s.value)
    }

    pub(crate) fn get_mut(&mut self, identity: &Identity) -> Option<&mut V> {
        let slot = *self.index.get(identity)?;
        self.slots[slot].as_mut().map(|s| &mut s.value)
    }

    /// Inserts or overwrites. An existing identity keeps its slot, so
    /// overwriting never reorders.
    pub(crate) fn insert(&mut self, identity: Identity, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&identity) {
            if let Some(existing) = self.slots[slot].as_mut() {
                return Some(std::mem::replace(&mut existing.value, value));
            }
        }
        self.index.insert(identity.clone(), self.slots.len());
        self.slots.push(Some(Slot { identity, value }));
        None
    }

    /// Tombstones a single entry, compacting if the threshold is reached.
    pub(crate) fn remove(&mut self, identity: &Identity, config: &ExMapConfig) -> Option<V> {
        let value = self.mark(identity)?;
        if config.should_compact(self.tombstones, self.len()) {
            self.compact();
        }
        Some(value)
    }

    /// Tombstones every listed entry, then compacts once.
    ///
    /// Returns the number of entries actually removed.
    pub(crate) fn remove_all(&mut self, identities: &[Identity]) -> usize {
        let removed = identities
            .iter()
            .filter(|identity| self.mark(identity).is_some())
            .count();
        if removed > 0 {
            self.compact();
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.tombstones = 0;
    }

    fn mark(&mut self, identity: &Identity) -> Option<V> {
        let slot = self.index.remove(identity)?;
        let removed = self.slots[slot].take()?;
        self.tombstones += 1;
        Some(removed.value)
    }

    fn compact(&mut self) {
        if self.tombstones == 0 {
            return;
        }
        let reclaimed = self.tombstones;
        self.slots.retain(Option::is_some);
        self.index.clear();
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some(entry) = entry {
                self.index.insert(entry.identity.clone(), slot);
            }
        }
        self.tombstones = 0;
        tracing::trace!(reclaimed, live = self.slots.len(), "compacted slot storage");
    }

    /// Live entries in iteration order.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (&Identity, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|s| (&s.identity, &s.value)))
    }

    /// The entry at zero-based live position `position`.
    pub(crate) fn nth(&self, position: usize) -> Option<(&Identity, &V)> {
        if self.tombstones == 0 {
            return self.slots.get(position)?.as_ref().map(|s| (&s.identity, &s.value));
        }
        self.iter().nth(position)
    }

    /// The live identity immediately after `identity` in iteration order.
    pub(crate) fn after(&self, identity: &Identity) -> Option<&Identity> {
        let slot = *self.index.get(identity)?;
        self.slots[slot + 1..]
            .iter()
            .find_map(|s| s.as_ref().map(|s| &s.identity))
    }

    /// The live identity immediately before `identity` in iteration order.
    pub(crate) fn before(&self, identity: &Identity) -> Option<&Identity> {
        let slot = *self.index.get(identity)?;
        self.slots[..slot]
            .iter()
            .rev()
            .find_map(|s| s.as_ref().map(|s| &s.identity))
    }
}
