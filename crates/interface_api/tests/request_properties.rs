//! Property tests for request body handling
//!
//! Exercises the path from a deserialized request body to either a draft or
//! an HTTP error without starting a server.

use axum::http::StatusCode;
use proptest::prelude::*;
use serde_json::json;

use domain_claims::ClaimDraft;
use interface_api::dto::claims::ClaimRequest;
use interface_api::error::ApiError;
use test_utils::{
    claimant_name_strategy, invalid_status_strategy, non_positive_amount_strategy,
    positive_amount_strategy, status_strategy,
};

fn request(body: serde_json::Value) -> ClaimRequest {
    serde_json::from_value(body).expect("body should deserialize")
}

proptest! {
    #[test]
    fn valid_bodies_become_drafts(
        name in claimant_name_strategy(),
        amount in positive_amount_strategy(),
        status in status_strategy(),
    ) {
        let body = json!({"claimant_name": name, "amount": amount, "status": status.as_str()});

        let draft = ClaimDraft::try_from(request(body)).unwrap();
        prop_assert_eq!(draft.claimant_name(), name.as_str());
        prop_assert_eq!(draft.status(), status);
    }

    #[test]
    fn unknown_statuses_are_unprocessable(
        name in claimant_name_strategy(),
        status in invalid_status_strategy(),
    ) {
        let body = json!({"claimant_name": name, "amount": 10.0, "status": status});

        let error = ApiError::from(ClaimDraft::try_from(request(body)).unwrap_err());
        prop_assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn non_positive_amounts_are_unprocessable(amount in non_positive_amount_strategy()) {
        let body = json!({"claimant_name": "John Doe", "amount": amount, "status": "pending"});

        match ApiError::from(ClaimDraft::try_from(request(body)).unwrap_err()) {
            ApiError::Validation(violations) => {
                prop_assert!(violations.iter().all(|v| v.field == "amount"));
            }
            other => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
