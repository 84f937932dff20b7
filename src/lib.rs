//! exmap - Insertion-ordered maps with structural keys
//!
//! This crate re-exports both layers of exmap for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: exmap_container  — ExMap, key modes, ingestion, views, snapshots
//! Layer 0: exmap_foundation — Value, canonical encoding, collections, Error
//! ```

pub use exmap_container as container;
pub use exmap_foundation as foundation;

pub use exmap_container::{
    ExMap, ExMapConfig, Identity, IngestOptions, KeyMode, Payload, SliceBound, Source, Visit,
};
pub use exmap_foundation::{Error, ErrorKind, Result, Value};
