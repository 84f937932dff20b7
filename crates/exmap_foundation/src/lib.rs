//! Core values, canonical encoding, and persistent collections for exmap.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type used for keys (and as the default payload)
//! - [`Value::canonical`] - Deterministic structural encoding of composite values
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtSet`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod collections;
pub mod error;
pub mod value;

pub use collections::{LtMap, LtSet, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use value::Value;
