//! Stamping behaviour over real directory trees
//!
//! - id allocation per top-level folder
//! - slug derivation and preservation
//! - ignore list and hidden entry handling
//! - rewrite only when something changed

pub mod ignore_tests;
