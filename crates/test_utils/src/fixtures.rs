//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim data. These fixtures are consistent and
//! predictable so tests can assert on exact values.

use serde_json::{json, Value};

use domain_claims::{ClaimDraft, ClaimStatus};

/// Identifier that no test ever creates
pub const MISSING_CLAIM_ID: i64 = 999_999;

/// Fixture for validated claim drafts
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A pending claim for 1000
    pub fn john_doe() -> ClaimDraft {
        Self::draft("John Doe", 1000.0, ClaimStatus::Pending)
    }

    /// A freshly submitted claim
    pub fn test_user() -> ClaimDraft {
        Self::draft("Test User", 123.45, ClaimStatus::Submitted)
    }

    /// The replacement values used by update scenarios
    pub fn updated_user() -> ClaimDraft {
        Self::draft("Updated User", 888.88, ClaimStatus::Approved)
    }

    fn draft(name: &str, amount: f64, status: ClaimStatus) -> ClaimDraft {
        ClaimDraft::new(name, amount, status).expect("fixture drafts are valid")
    }
}

/// Fixture for raw JSON request bodies
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// Body for [`ClaimFixtures::john_doe`]
    pub fn john_doe() -> Value {
        json!({"claimant_name": "John Doe", "amount": 1000, "status": "pending"})
    }

    /// Body for [`ClaimFixtures::updated_user`]
    pub fn updated_user() -> Value {
        json!({"claimant_name": "Updated User", "amount": 888.88, "status": "approved"})
    }

    /// Body without the `amount` field
    pub fn missing_amount() -> Value {
        json!({"claimant_name": "Invalid", "status": "submitted"})
    }

    /// Body where every field is wrong
    pub fn all_fields_invalid() -> Value {
        json!({"claimant_name": "   ", "amount": -1, "status": "denied"})
    }

    /// Body with a status outside the enumeration and no amount
    pub fn unknown_status() -> Value {
        json!({"claimant_name": "Oops", "status": "updated"})
    }
}
