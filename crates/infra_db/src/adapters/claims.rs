//! PostgreSQL Claims Adapter
//!
//! This module provides the internal (database) adapter for the claims
//! domain, implementing the `ClaimsPort` trait using the `ClaimsRepository`.
//!
//! # Overview
//!
//! The `PostgresClaimsAdapter` serves as the bridge between the domain
//! layer's port interface and the database layer. It:
//!
//! - Translates validated drafts into repository inserts and updates
//! - Converts database rows back into domain claims, re-checking invariants
//! - Translates database errors into port errors
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresClaimsAdapter;
//! use domain_claims::ClaimsPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn ClaimsPort> = Arc::new(PostgresClaimsAdapter::new(pool));
//! let claim = port.get_claim(claim_id).await?;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::ports::CLAIM_ENTITY;
use domain_claims::{Claim, ClaimDraft, ClaimStatus, ClaimsPort};

use crate::repositories::claims::{ClaimRow, ClaimStatus as DbClaimStatus, ClaimsRepository, NewClaim};

const ADAPTER_ID: &str = "postgres-claims-adapter";

/// PostgreSQL-backed implementation of the ClaimsPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - Connection and pool failures -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresClaimsAdapter {
    repository: ClaimsRepository,
    pool: PgPool,
}

impl PostgresClaimsAdapter {
    /// Creates a new PostgreSQL claims adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimsRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresClaimsAdapter {}

#[async_trait]
impl HealthCheckable for PostgresClaimsAdapter {
    /// Checks database connectivity with a `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl ClaimsPort for PostgresClaimsAdapter {
    #[instrument(skip(self, draft))]
    async fn create_claim(&self, draft: ClaimDraft) -> Result<Claim, PortError> {
        let row = self
            .repository
            .insert(draft_to_new_claim(&draft))
            .await
            .map_err(|e| e.into_port_error(CLAIM_ENTITY, "new"))?;

        debug!(claim_id = row.id, "Claim created");
        row_to_claim(row)
    }

    #[instrument(skip(self))]
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self
            .repository
            .find_all()
            .await
            .map_err(|e| e.into_port_error(CLAIM_ENTITY, "*"))?;

        debug!(count = rows.len(), "Listed claims");
        rows.into_iter().map(row_to_claim).collect()
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        let row = self
            .repository
            .get_by_id(id.value())
            .await
            .map_err(|e| e.into_port_error(CLAIM_ENTITY, id))?;

        row_to_claim(row)
    }

    #[instrument(skip(self, draft), fields(claim_id = %id))]
    async fn update_claim(&self, id: ClaimId, draft: ClaimDraft) -> Result<Claim, PortError> {
        let row = self
            .repository
            .update(id.value(), draft_to_new_claim(&draft))
            .await
            .map_err(|e| e.into_port_error(CLAIM_ENTITY, id))?;

        row_to_claim(row)
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn delete_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        let row = self
            .repository
            .delete(id.value())
            .await
            .map_err(|e| e.into_port_error(CLAIM_ENTITY, id))?;

        row_to_claim(row)
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================

fn draft_to_new_claim(draft: &ClaimDraft) -> NewClaim {
    NewClaim {
        claimant_name: draft.claimant_name().to_string(),
        amount: draft.amount(),
        status: domain_to_db_status(draft.status()),
    }
}

/// Converts a database row to a domain claim
///
/// The row passes through the same validation as incoming payloads, so a
/// row that breaks the claim invariants surfaces as a transformation error.
fn row_to_claim(row: ClaimRow) -> Result<Claim, PortError> {
    let draft = ClaimDraft::new(row.claimant_name, row.amount, db_to_domain_status(row.status))
        .map_err(|e| PortError::transformation(format!("Stored claim {} is invalid: {}", row.id, e)))?;

    Ok(Claim::from_draft(ClaimId::new(row.id), draft, row.submitted_at))
}

fn domain_to_db_status(status: ClaimStatus) -> DbClaimStatus {
    match status {
        ClaimStatus::Submitted => DbClaimStatus::Submitted,
        ClaimStatus::Approved => DbClaimStatus::Approved,
        ClaimStatus::Rejected => DbClaimStatus::Rejected,
        ClaimStatus::Pending => DbClaimStatus::Pending,
        ClaimStatus::Closed => DbClaimStatus::Closed,
    }
}

fn db_to_domain_status(status: DbClaimStatus) -> ClaimStatus {
    match status {
        DbClaimStatus::Submitted => ClaimStatus::Submitted,
        DbClaimStatus::Approved => ClaimStatus::Approved,
        DbClaimStatus::Rejected => ClaimStatus::Rejected,
        DbClaimStatus::Pending => ClaimStatus::Pending,
        DbClaimStatus::Closed => ClaimStatus::Closed,
    }
}
