//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! vehicle quote test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built quote requests and expected amounts
//! - `builders`: Builder patterns for quote request construction

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
