//! Custom Test Assertions
//!
//! Provides assertion helpers for claim records that give more meaningful
//! failure messages than comparing whole structs.

use domain_claims::{Claim, ClaimDraft};

/// Tolerance used when comparing amounts that passed through JSON or SQL
pub const AMOUNT_TOLERANCE: f64 = 1e-9;

/// Asserts that a claim carries exactly the mutable fields of a draft
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_claim_matches_draft(claim: &Claim, draft: &ClaimDraft) {
    assert_eq!(
        claim.claimant_name,
        draft.claimant_name(),
        "claimant_name mismatch for claim {}",
        claim.id
    );
    assert_amount_eq(claim.amount, draft.amount());
    assert_eq!(claim.status, draft.status(), "status mismatch for claim {}", claim.id);
}

/// Asserts that `after` kept the storage-assigned fields of `before`
///
/// # Panics
///
/// Panics if either `id` or `submitted_at` changed
pub fn assert_identity_preserved(before: &Claim, after: &Claim) {
    assert_eq!(before.id, after.id, "claim id changed");
    assert_eq!(
        before.submitted_at, after.submitted_at,
        "submitted_at changed for claim {}",
        before.id
    );
}

/// Asserts that two amounts are equal within [`AMOUNT_TOLERANCE`]
pub fn assert_amount_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= AMOUNT_TOLERANCE,
        "Amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that claim ids are pairwise distinct
pub fn assert_unique_ids(claims: &[Claim]) {
    let mut ids: Vec<_> = claims.iter().map(|c| c.id).collect();
    ids.sort();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate claim ids in {:?}", ids);
}
