//! Configuration for container storage.

/// Configuration for an [`ExMap`](crate::ExMap).
///
/// Controls pre-sizing and when deleted slots are reclaimed. Containers
/// derived through `filter` or `slice` inherit their source's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMapConfig {
    /// Number of entries to reserve space for up front.
    pub initial_capacity: usize,

    /// Minimum number of tombstoned slots before a compaction pass runs.
    ///
    /// Compaction also waits until tombstones outnumber live entries, so the
    /// amortized cost of a single delete stays constant. Zero compacts after
    /// every delete.
    pub compact_min_tombstones: usize,
}

impl Default for ExMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            compact_min_tombstones: 32,
        }
    }
}

impl ExMapConfig {
    /// Creates a configuration that compacts after every delete.
    ///
    /// Positional queries never have to skip tombstones, at the price of an
    /// O(n) exact-key delete.
    #[must_use]
    pub fn eager() -> Self {
        Self {
            compact_min_tombstones: 0,
            ..Self::default()
        }
    }

    /// Creates a configuration pre-sized for `capacity` entries.
    #[must_use]
    pub fn sized(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder method to set the compaction threshold.
    #[must_use]
    pub fn with_compact_min_tombstones(mut self, tombstones: usize) -> Self {
        self.compact_min_tombstones = tombstones;
        self
    }

    /// Returns true if a store with `tombstones` dead and `live` live slots
    /// should be compacted.
    #[must_use]
    pub fn should_compact(&self, tombstones: usize, live: usize) -> bool {
        match self.compact_min_tombstones {
            0 => tombstones > 0,
            min => tombstones >= min.max(live),
        }
    }
}
