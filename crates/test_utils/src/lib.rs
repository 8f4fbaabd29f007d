//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the case-management test
//! suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for domain input types with sensible
//!   Arabic defaults
//! - `fixtures`: Canned JSON payloads for HTTP-level tests

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
