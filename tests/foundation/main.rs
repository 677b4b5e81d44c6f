//! Integration tests for Layer 0: Foundation
//!
//! Tests for the persistent sorted collections and the error types.

mod collections;
