//! Property-based tests for override coercion
