//! Key identity resolution.
//!
//! Every key is reduced to an [`Identity`] before it touches storage.
//! Primitive keys are their own identity. Composite keys are identified by
//! their canonical encoding, and the first key seen for each encoding is
//! remembered in a side table so it can be handed back during iteration.
//!
//! The side table only exists while at least one composite key is stored:
//!
//! ```text
//!   Primitive ──(insert composite key)──▶ Structural{table}
//!       ▲                                        │
//!       └──────(delete empties the table)────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use exmap_foundation::Value;

/// The storage identity of a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identity {
    /// A primitive key, used verbatim.
    Key(Value),
    /// The canonical encoding of a composite key.
    Canonical(Arc<str>),
}

impl Identity {
    /// Computes the identity of `key` without registering anything.
    #[must_use]
    pub fn of(key: &Value) -> Self {
        if key.is_primitive() {
            Self::Key(key.clone())
        } else {
            Self::Canonical(key.canonical().into())
        }
    }

    /// Returns true if this identity came from a composite key.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }
}

/// Observable key mode of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMode {
    /// Every stored key is primitive.
    Primitive,
    /// At least one stored key is composite.
    Structural,
}

/// Key resolution state: the mode plus, in structural mode, the side table
/// mapping canonical encodings back to the original keys.
#[derive(Clone, Debug, Default)]
pub(crate) enum KeyState {
    #[default]
    Primitive,
    Structural {
        keys: HashMap<Arc<str>, Value>,
    },
}

impl KeyState {
    pub(crate) fn mode(&self) -> KeyMode {
        match self {
            Self::Primitive => KeyMode::Primitive,
            Self::Structural { .. } => KeyMode::Structural,
        }
    }

    /// Number of composite keys in the side table.
    pub(crate) fn structural_len(&self) -> usize {
        match self {
            Self::Primitive => 0,
            Self::Structural { keys } => keys.len(),
        }
    }

    /// Resolves the identity of a key that is about to be inserted.
    ///
    /// Composite keys are registered in the side table (switching to
    /// structural mode on first sight). When an equal composite is already
    /// registered, the originally registered key is kept.
    pub(crate) fn intern(&mut self, key: Value) -> Identity {
        if key.is_primitive() {
            return Identity::Key(key);
        }

        let encoded = key.canonical();
        let mut keys = match std::mem::take(self) {
            Self::Structural { keys } => keys,
            Self::Primitive => {
                tracing::debug!(kind = key.kind_name(), "switching to structural key mode");
                HashMap::new()
            }
        };

        let identity = match keys.get_key_value(encoded.as_str()) {
            Some((existing, _)) => Arc::clone(existing),
            None => {
                let encoded: Arc<str> = encoded.into();
                keys.insert(Arc::clone(&encoded), key);
                encoded
            }
        };
        *self = Self::Structural { keys };
        Identity::Canonical(identity)
    }

    /// Resolves the identity of `key` without registering it.
    ///
    /// A composite key that is already registered shares the registered
    /// encoding rather than allocating a new one.
    pub(crate) fn identity(&self, key: &Value) -> Identity {
        if key.is_primitive() {
            return Identity::Key(key.clone());
        }
        let encoded = key.canonical();
        match self {
            Self::Structural { keys } => match keys.get_key_value(encoded.as_str()) {
                Some((existing, _)) => Identity::Canonical(Arc::clone(existing)),
                None => Identity::Canonical(encoded.into()),
            },
            Self::Primitive => Identity::Canonical(encoded.into()),
        }
    }

    /// Returns the original key for an identity.
    ///
    /// `None` only for a structural identity that was never registered.
    pub(crate) fn original<'a>(&'a self, identity: &'a Identity) -> Option<&'a Value> {
        match (identity, self) {
            (Identity::Key(key), _) => Some(key),
            (Identity::Canonical(encoded), Self::Structural { keys }) => keys.get(encoded),
            (Identity::Canonical(_), Self::Primitive) => None,
        }
    }

    /// Forgets a removed identity, returning to primitive mode when the side
    /// table empties.
    pub(crate) fn release(&mut self, identity: &Identity) {
        let Identity::Canonical(encoded) = identity else {
            return;
        };
        if let Self::Structural { keys } = self {
            keys.remove(encoded);
            if keys.is_empty() {
                tracing::debug!("side table empty, switching to primitive key mode");
                *self = Self::Primitive;
            }
        }
    }
}
