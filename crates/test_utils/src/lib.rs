//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim drafts and JSON payloads
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for claim records
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
