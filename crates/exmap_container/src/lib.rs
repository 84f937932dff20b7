//! Insertion-ordered container with structural keys.
//!
//! This crate provides:
//! - [`ExMap`] - An ordered map accepting any [`Value`](exmap_foundation::Value) as a key
//! - [`Source`] / [`IngestOptions`] - Bulk ingestion from records, sequences, pairs, and sets
//! - [`SliceBound`] / [`Visit`] - Functional views (`filter`, `slice`, `for_each`, ...)
//! - [`ExMapConfig`] - Storage tuning
//! - [`snapshot`] - `MessagePack` persistence (with the `serde` feature)
//!
//! # Key modes
//!
//! A container starts in [`KeyMode::Primitive`]. Storing a composite key
//! (vector, set, or map) switches it to [`KeyMode::Structural`], where
//! composite keys are addressed by their canonical encoding. Deleting the
//! last composite key switches it back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod identity;
pub mod ingest;
pub mod map;
pub mod payload;
#[cfg(feature = "serde")]
pub mod snapshot;
mod store;
pub mod view;

pub use config::ExMapConfig;
pub use identity::{Identity, KeyMode};
pub use ingest::{IngestOptions, Source};
pub use map::ExMap;
pub use payload::Payload;
pub use view::{SliceBound, Visit};
