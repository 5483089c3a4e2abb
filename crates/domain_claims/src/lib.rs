//! Claims Domain
//!
//! This crate holds the claim record, the rules a claim payload must satisfy,
//! and the port through which claims are persisted.
//!
//! # Data Pipeline
//!
//! ```text
//! ClaimInput --(ClaimValidator)--> ClaimDraft --(ClaimsPort)--> Claim
//! ```
//!
//! Identifiers and submission timestamps are assigned by storage; everything
//! else on a claim is replaced wholesale on update.

pub mod claim;
pub mod validation;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimDraft, ClaimStatus};
pub use validation::{ClaimFields, ClaimInput, ClaimValidator, FieldViolation, ValidationResult};
pub use ports::ClaimsPort;
pub use error::ClaimError;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::InMemoryClaimsPort;
