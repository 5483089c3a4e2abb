//! Claims domain errors

use thiserror::Error;

use crate::validation::FieldViolation;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Unknown claim status '{0}'")]
    UnknownStatus(String),
}

impl ClaimError {
    /// Field violations carried by this error
    ///
    /// An unknown status is reported as a violation of the `status` field.
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self {
            ClaimError::Validation(violations) => violations.clone(),
            ClaimError::UnknownStatus(value) => vec![FieldViolation::new(
                "status",
                "unknown_status",
                format!("'{}' is not a valid claim status", value),
            )],
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
