//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, canonical encoding, Error, and persistent collections.

mod canonical;
mod collections;
mod errors;
