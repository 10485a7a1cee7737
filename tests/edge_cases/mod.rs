//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs and error conditions:
//! - Empty and comment-only documents
//! - Malformed YAML and non-mapping roots
//! - Falsy and non-numeric ids

pub mod error_handling_tests;
