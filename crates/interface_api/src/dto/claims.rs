//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_claims::{Claim, ClaimStatus};

/// Body of create and update requests
///
/// Fields are optional at this level; the domain validator reports which of
/// them are missing.
pub type ClaimRequest = domain_claims::ClaimInput;

/// Full claim record as returned by every successful claim operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: i64,
    pub claimant_name: String,
    pub amount: f64,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.value(),
            claimant_name: claim.claimant_name,
            amount: claim.amount,
            status: claim.status,
            submitted_at: claim.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::ClaimId;
    use domain_claims::ClaimDraft;

    #[test]
    fn test_response_shape() {
        let submitted_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let draft = ClaimDraft::new("John Doe", 1000.0, ClaimStatus::Pending).unwrap();
        let response = ClaimResponse::from(Claim::from_draft(ClaimId::new(3), draft, submitted_at));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["claimant_name"], "John Doe");
        assert_eq!(json["amount"], 1000.0);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["submitted_at"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_request_accepts_partial_body() {
        let request: ClaimRequest =
            serde_json::from_str(r#"{"claimant_name": "Invalid", "status": "submitted"}"#).unwrap();
        assert!(request.amount.is_none());
    }
}
