//! Integration tests for Layer 1: Container
//!
//! Tests for point access, key modes, traversal, ingestion, views, and the
//! container laws.

mod storage;
mod traversal;
mod views;
