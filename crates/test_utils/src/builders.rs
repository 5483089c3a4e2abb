//! Test Data Builders
//!
//! Provides builder patterns for constructing claim data with sensible
//! defaults. Tests specify only the fields they care about.

use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{Map, Value};

use domain_claims::{ClaimDraft, ClaimError, ClaimStatus};

/// Builder for validated claim drafts
///
/// Unless overridden, the claimant name is a random realistic name.
pub struct ClaimDraftBuilder {
    claimant_name: String,
    amount: f64,
    status: ClaimStatus,
}

impl Default for ClaimDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimDraftBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claimant_name: Name().fake(),
            amount: 250.0,
            status: ClaimStatus::Submitted,
        }
    }

    /// Sets the claimant name
    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Validates and builds the draft
    pub fn try_build(self) -> Result<ClaimDraft, ClaimError> {
        ClaimDraft::new(self.claimant_name, self.amount, self.status)
    }

    /// Builds the draft, panicking if the configured values are invalid
    pub fn build(self) -> ClaimDraft {
        self.try_build().expect("builder produced an invalid claim draft")
    }
}

/// Builder for raw JSON claim payloads
///
/// Fields can be set to arbitrary JSON or removed entirely, which makes it
/// suitable for producing invalid request bodies.
#[derive(Debug, Clone)]
pub struct ClaimPayloadBuilder {
    fields: Map<String, Value>,
}

impl Default for ClaimPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimPayloadBuilder {
    /// Starts from a valid payload
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("claimant_name".to_string(), Value::from(Name().fake::<String>()));
        fields.insert("amount".to_string(), Value::from(250.0));
        fields.insert("status".to_string(), Value::from("submitted"));
        Self { fields }
    }

    /// Sets a field to any JSON value
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Removes a field from the payload
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
