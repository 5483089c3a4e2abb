//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim data, both valid (respecting every
//! field constraint) and deliberately invalid.

use proptest::prelude::*;

use domain_claims::{ClaimDraft, ClaimStatus};

/// Strategy for generating any member of the status enumeration
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Closed),
    ]
}

/// Strategy for generating non-blank claimant names
pub fn claimant_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}( [A-Z][a-z]{1,12}){0,2}"
}

/// Strategy for generating strictly positive amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = f64> {
    0.01f64..10_000_000.0f64
}

/// Strategy for generating amounts that must be rejected
pub fn non_positive_amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -10_000_000.0f64..0.0f64]
}

/// Strategy for generating status strings outside the enumeration
pub fn invalid_status_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_]{1,16}".prop_filter("must not be a valid status", |s| {
        ClaimStatus::ALL.iter().all(|status| status.as_str() != s)
    })
}

/// Strategy for generating valid claim drafts
pub fn claim_draft_strategy() -> impl Strategy<Value = ClaimDraft> {
    (claimant_name_strategy(), positive_amount_strategy(), status_strategy()).prop_map(
        |(name, amount, status)| {
            ClaimDraft::new(name, amount, status).expect("generated values satisfy every constraint")
        },
    )
}
