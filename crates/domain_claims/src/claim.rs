//! Claim aggregate

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use crate::error::ClaimError;
use crate::validation::{ClaimFields, ClaimInput, ClaimValidator};

/// Claim status
///
/// A closed set; anything outside it is rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Newly lodged
    Submitted,
    /// Accepted for payment
    Approved,
    /// Declined
    Rejected,
    /// Awaiting a decision
    Pending,
    /// No further action
    Closed,
}

impl ClaimStatus {
    /// Every status, in declaration order
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Submitted,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Pending,
        ClaimStatus::Closed,
    ];

    /// Returns the wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Pending => "pending",
            ClaimStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    /// Exact, case-sensitive match against the five members
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

/// A validated claim that has not been persisted yet
///
/// Used for both creation and full replacement on update. The fields are
/// private so a draft can only come out of [`ClaimValidator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimDraft {
    claimant_name: String,
    amount: f64,
    status: ClaimStatus,
}

impl ClaimDraft {
    /// Validates the given values into a draft
    pub fn new(
        claimant_name: impl Into<String>,
        amount: f64,
        status: ClaimStatus,
    ) -> Result<Self, ClaimError> {
        ClaimValidator::validate_fields_into_draft(ClaimFields {
            claimant_name: Some(claimant_name.into()),
            amount: Some(amount),
            status: Some(status.as_str().to_string()),
        })
    }

    /// Assembles a draft from values the validator has already accepted
    pub(crate) fn from_validated(claimant_name: String, amount: f64, status: ClaimStatus) -> Self {
        Self {
            claimant_name,
            amount,
            status,
        }
    }

    pub fn claimant_name(&self) -> &str {
        &self.claimant_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }
}

impl TryFrom<ClaimInput> for ClaimDraft {
    type Error = ClaimError;

    fn try_from(input: ClaimInput) -> Result<Self, Self::Error> {
        ClaimValidator::validate_into_draft(input)
    }
}

/// A persisted claim
///
/// `id` and `submitted_at` are assigned by storage and never change; the
/// remaining fields are replaced wholesale by [`Claim::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Storage-assigned identifier
    pub id: ClaimId,
    /// Name of the claimant
    pub claimant_name: String,
    /// Claimed amount, always positive
    pub amount: f64,
    /// Current status
    pub status: ClaimStatus,
    /// When the claim was first stored
    pub submitted_at: DateTime<Utc>,
}

impl Claim {
    /// Builds the full record from a draft and the storage-generated fields
    pub fn from_draft(id: ClaimId, draft: ClaimDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            claimant_name: draft.claimant_name,
            amount: draft.amount,
            status: draft.status,
            submitted_at,
        }
    }

    /// Overwrites the mutable fields, leaving `id` and `submitted_at` untouched
    pub fn apply(&mut self, draft: &ClaimDraft) {
        self.claimant_name = draft.claimant_name.clone();
        self.amount = draft.amount;
        self.status = draft.status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in ClaimStatus::ALL {
            assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert!("Pending".parse::<ClaimStatus>().is_err());
        assert!("PENDING".parse::<ClaimStatus>().is_err());
        assert!(" pending".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let submitted_at = Utc::now();
        let draft = ClaimDraft::new("John Doe", 1000.0, ClaimStatus::Pending).unwrap();
        let mut claim = Claim::from_draft(ClaimId::new(1), draft, submitted_at);

        let update = ClaimDraft::new("Updated User", 888.88, ClaimStatus::Approved).unwrap();
        claim.apply(&update);

        assert_eq!(claim.id, ClaimId::new(1));
        assert_eq!(claim.submitted_at, submitted_at);
        assert_eq!(claim.claimant_name, "Updated User");
        assert_eq!(claim.amount, 888.88);
        assert_eq!(claim.status, ClaimStatus::Approved);
    }
}
