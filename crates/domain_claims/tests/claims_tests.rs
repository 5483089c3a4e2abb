//! Comprehensive tests for domain_claims

use chrono::Utc;
use proptest::prelude::*;

use core_kernel::ClaimId;

use domain_claims::claim::{Claim, ClaimDraft, ClaimStatus};
use domain_claims::validation::{ClaimFields, ClaimInput, ClaimValidator};
use domain_claims::ClaimError;

// ============================================================================
// Status Tests
// ============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ClaimStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(ClaimStatus::Submitted.to_string(), "submitted");
        assert_eq!(ClaimStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_unknown_status_error() {
        let error = "denied".parse::<ClaimStatus>().unwrap_err();
        assert!(matches!(error, ClaimError::UnknownStatus(ref s) if s == "denied"));
        assert_eq!(error.violations()[0].field, "status");
    }
}

// ============================================================================
// Draft Tests
// ============================================================================

mod draft_tests {
    use super::*;

    #[test]
    fn test_draft_new_accepts_valid_values() {
        let draft = ClaimDraft::new("John Doe", 1000.0, ClaimStatus::Pending).unwrap();
        assert_eq!(draft.claimant_name(), "John Doe");
        assert_eq!(draft.amount(), 1000.0);
        assert_eq!(draft.status(), ClaimStatus::Pending);
    }

    #[test]
    fn test_draft_new_rejects_negative_amount() {
        let error = ClaimDraft::new("John Doe", -10.0, ClaimStatus::Pending).unwrap_err();
        assert!(error.to_string().contains("amount"));
    }

    #[test]
    fn test_draft_try_from_input() {
        let input: ClaimInput = serde_json::from_str(
            r#"{"claimant_name":"Test User","amount":123.45,"status":"submitted"}"#,
        )
        .unwrap();
        let draft = ClaimDraft::try_from(input).unwrap();
        assert_eq!(draft.amount(), 123.45);
    }

    #[test]
    fn test_input_missing_fields_deserialize_as_none() {
        let input: ClaimInput =
            serde_json::from_str(r#"{"claimant_name":"Invalid","status":"submitted"}"#).unwrap();
        assert!(input.amount.is_none());

        let error = ClaimDraft::try_from(input).unwrap_err();
        let violations = error.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "amount");
        assert_eq!(violations[0].code, "required");
    }

    #[test]
    fn test_input_wrong_type_is_field_violation() {
        let input: ClaimInput =
            serde_json::from_str(r#"{"claimant_name":"Jo","amount":"100","status":"pending"}"#).unwrap();

        let error = ClaimDraft::try_from(input).unwrap_err();
        let violations = error.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "amount");
        assert_eq!(violations[0].code, "type");
    }

    #[test]
    fn test_claim_serializes_full_record() {
        let draft = ClaimDraft::new("John Doe", 1000.0, ClaimStatus::Pending).unwrap();
        let claim = Claim::from_draft(ClaimId::new(3), draft, Utc::now());
        let json = serde_json::to_value(&claim).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["claimant_name"], "John Doe");
        assert_eq!(json["status"], "pending");
        assert!(json["submitted_at"].is_string());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_valid_inputs_always_validate(
        name in "[A-Za-z][A-Za-z ]{0,30}",
        amount in 0.01f64..1_000_000_000.0,
        status in status_strategy(),
    ) {
        let draft = ClaimDraft::new(name.clone(), amount, status);
        prop_assert!(draft.is_ok());
        let draft = draft.unwrap();
        prop_assert_eq!(draft.claimant_name(), name.as_str());
        prop_assert_eq!(draft.status(), status);
    }

    #[test]
    fn prop_non_positive_amounts_rejected(
        amount in -1_000_000.0f64..=0.0,
        status in status_strategy(),
    ) {
        let result = ClaimValidator::validate_fields(&ClaimFields {
            claimant_name: Some("Valid Name".to_string()),
            amount: Some(amount),
            status: Some(status.as_str().to_string()),
        });
        prop_assert_eq!(result.failed_fields(), vec!["amount"]);
    }

    #[test]
    fn prop_whitespace_names_rejected(name in "[ \t\n]{0,10}") {
        let result = ClaimValidator::validate_fields(&ClaimFields {
            claimant_name: Some(name),
            amount: Some(10.0),
            status: Some("pending".to_string()),
        });
        prop_assert_eq!(result.failed_fields(), vec!["claimant_name"]);
    }

    #[test]
    fn prop_unknown_statuses_rejected(status in "[a-zA-Z]{1,12}") {
        prop_assume!(ClaimStatus::ALL.iter().all(|s| s.as_str() != status));
        let result = ClaimValidator::validate_fields(&ClaimFields {
            claimant_name: Some("Valid Name".to_string()),
            amount: Some(10.0),
            status: Some(status),
        });
        prop_assert_eq!(result.failed_fields(), vec!["status"]);
    }
}
