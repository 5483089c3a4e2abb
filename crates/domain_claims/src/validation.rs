//! Claim validation rules
//!
//! This module turns raw, deserialized claim payloads into validated
//! [`ClaimDraft`] values, reporting every violated field constraint at once.
//!
//! # Validation Rules
//!
//! - `claimant_name`: required string, non-empty, not whitespace-only
//! - `amount`: required number, finite, strictly greater than 0
//! - `status`: required string, exact (case-sensitive) member of [`ClaimStatus`]
//!
//! Validation runs in two passes. [`ClaimInput`] holds each field as raw
//! JSON, so a value of the wrong type becomes a `type` violation next to the
//! others. The values that type-check land in [`ClaimFields`], where
//! presence, length, and range are declared with the `validator` derive;
//! blankness, finiteness, and enum membership are checked here because they
//! depend on the value's meaning.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::claim::{ClaimDraft, ClaimStatus};
use crate::error::ClaimError;

/// Untyped claim payload as received from a client
///
/// Every field is optional raw JSON so that a missing or mistyped field is
/// reported as a field violation instead of failing deserialization of the
/// whole body. `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimInput {
    pub claimant_name: Option<Value>,
    pub amount: Option<Value>,
    pub status: Option<Value>,
}

/// Claim fields that passed the type check
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ClaimFields {
    #[validate(
        required(message = "field required"),
        length(min = 1, message = "must not be empty")
    )]
    pub claimant_name: Option<String>,

    #[validate(
        required(message = "field required"),
        range(exclusive_min = 0.0, message = "must be greater than 0")
    )]
    pub amount: Option<f64>,

    #[validate(required(message = "field required"))]
    pub status: Option<String>,
}

impl ClaimFields {
    /// Keeps the values of the expected JSON type, recording a violation for the rest
    fn from_input(input: &ClaimInput, result: &mut ValidationResult) -> Self {
        Self {
            claimant_name: typed(input.claimant_name.as_ref(), "claimant_name", "a string", result, |v| {
                v.as_str().map(str::to_string)
            }),
            amount: typed(input.amount.as_ref(), "amount", "a number", result, Value::as_f64),
            status: typed(input.status.as_ref(), "status", "a string", result, |v| {
                v.as_str().map(str::to_string)
            }),
        }
    }
}

fn typed<T>(
    value: Option<&Value>,
    field: &str,
    expected: &str,
    result: &mut ValidationResult,
    extract: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = value.filter(|v| !v.is_null())?;
    let extracted = extract(value);
    if extracted.is_none() {
        result.add(FieldViolation::new(field, "type", format!("must be {}", expected)));
    }
    extracted
}

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Machine-readable code (`type`, `required`, `length`, `range`, `blank`, ...)
    pub code: String,
    /// Human-readable explanation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of claim validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    violations: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether no constraint was violated
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Records a violation
    pub fn add(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Violations recorded so far
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the fields with at least one violation, deduplicated
    pub fn failed_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.violations.iter().map(|v| v.field.as_str()).collect();
        fields.dedup();
        fields
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    fn sort(&mut self) {
        self.violations
            .sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    }
}

/// Validator for claim payloads
///
/// # Examples
///
/// ```rust
/// use domain_claims::validation::{ClaimInput, ClaimValidator};
/// use serde_json::json;
///
/// let input: ClaimInput = serde_json::from_value(json!({
///     "claimant_name": "   ",
///     "amount": "abc",
///     "status": "denied",
/// }))
/// .unwrap();
/// let result = ClaimValidator::validate(&input);
///
/// assert!(!result.is_valid());
/// assert_eq!(result.failed_fields(), vec!["amount", "claimant_name", "status"]);
/// ```
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates a payload, collecting every violated constraint
    pub fn validate(input: &ClaimInput) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let fields = ClaimFields::from_input(input, &mut result);
        Self::check_fields(&fields, &mut result);
        result
    }

    /// Validates already-typed fields
    pub fn validate_fields(fields: &ClaimFields) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::check_fields(fields, &mut result);
        result
    }

    /// Validates a payload and converts it into a draft
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` listing every violation when any
    /// constraint fails.
    pub fn validate_into_draft(input: ClaimInput) -> Result<ClaimDraft, ClaimError> {
        let mut result = ValidationResult::ok();
        let fields = ClaimFields::from_input(&input, &mut result);
        Self::into_draft(fields, result)
    }

    /// Validates typed fields and converts them into a draft
    ///
    /// # Errors
    ///
    /// Same as [`ClaimValidator::validate_into_draft`].
    pub fn validate_fields_into_draft(fields: ClaimFields) -> Result<ClaimDraft, ClaimError> {
        Self::into_draft(fields, ValidationResult::ok())
    }

    fn into_draft(fields: ClaimFields, mut result: ValidationResult) -> Result<ClaimDraft, ClaimError> {
        Self::check_fields(&fields, &mut result);
        if !result.is_valid() {
            debug!(fields = ?result.failed_fields(), "Claim payload rejected");
            return Err(ClaimError::Validation(result.into_violations()));
        }

        // A valid result guarantees all three fields are present
        let ClaimFields {
            claimant_name: Some(claimant_name),
            amount: Some(amount),
            status: Some(status),
        } = fields
        else {
            return Err(ClaimError::Validation(Vec::new()));
        };

        let status: ClaimStatus = status.parse()?;
        Ok(ClaimDraft::from_validated(claimant_name, amount, status))
    }

    fn check_fields(fields: &ClaimFields, result: &mut ValidationResult) {
        if let Err(errors) = fields.validate() {
            Self::collect_declared(&errors, result);
        }
        Self::validate_claimant_name(fields.claimant_name.as_deref(), result);
        Self::validate_amount(fields.amount, result);
        Self::validate_status(fields.status.as_deref(), result);
        result.sort();
    }

    /// Copies the derive-declared failures into the result
    ///
    /// A field that already failed its type check is not also reported as missing.
    fn collect_declared(errors: &ValidationErrors, result: &mut ValidationResult) {
        for (field, field_errors) in errors.field_errors() {
            if result.has_violation(&field) {
                continue;
            }
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                result.add(FieldViolation::new(field.to_string(), error.code.to_string(), message));
            }
        }
    }

    fn validate_claimant_name(name: Option<&str>, result: &mut ValidationResult) {
        // Empty strings are already reported by the length rule
        if let Some(name) = name {
            if !name.is_empty() && name.trim().is_empty() {
                result.add(FieldViolation::new(
                    "claimant_name",
                    "blank",
                    "Claimant name cannot be empty or just spaces",
                ));
            }
        }
    }

    fn validate_amount(amount: Option<f64>, result: &mut ValidationResult) {
        if let Some(amount) = amount {
            if !amount.is_finite() {
                result.add(FieldViolation::new("amount", "not_finite", "must be a finite number"));
            }
        }
    }

    fn validate_status(status: Option<&str>, result: &mut ValidationResult) {
        if let Some(status) = status {
            if status.parse::<ClaimStatus>().is_err() {
                let allowed: Vec<&str> = ClaimStatus::ALL.iter().map(|s| s.as_str()).collect();
                result.add(FieldViolation::new(
                    "status",
                    "unknown_status",
                    format!("must be one of: {}", allowed.join(", ")),
                ));
            }
        }
    }
}
