//! Claims repository implementation
//!
//! This module provides database access for the `claims` table. Queries are
//! checked at runtime so the crate builds without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for managing claims data
///
/// Reads and inserts are single statements on the pool. Updates and deletes
/// run inside a transaction; dropping it on any early return rolls back and
/// releases the connection.
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a claim, stamping `submitted_at` with the current time
    ///
    /// # Returns
    ///
    /// The stored row including the generated `id`
    pub async fn insert(&self, claim: NewClaim) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (claimant_name, amount, status, submitted_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, claimant_name, amount, status, submitted_at
            "#,
        )
        .bind(&claim.claimant_name)
        .bind(claim.amount)
        .bind(claim.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        debug!(claim_id = row.id, "Inserted claim");
        Ok(row)
    }

    /// Retrieves every claim ordered by id
    pub async fn find_all(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, claimant_name, amount, status, submitted_at
            FROM claims
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Retrieves a claim by its identifier
    ///
    /// # Returns
    ///
    /// The claim row or NotFound error
    pub async fn get_by_id(&self, claim_id: i64) -> Result<ClaimRow, DatabaseError> {
        sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, claimant_name, amount, status, submitted_at
            FROM claims
            WHERE id = $1
            "#,
        )
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))
    }

    /// Overwrites the mutable columns of a claim
    ///
    /// `id` and `submitted_at` are never written.
    pub async fn update(&self, claim_id: i64, changes: NewClaim) -> Result<ClaimRow, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            UPDATE claims
            SET claimant_name = $2, amount = $3, status = $4
            WHERE id = $1
            RETURNING id, claimant_name, amount, status, submitted_at
            "#,
        )
        .bind(claim_id)
        .bind(&changes.claimant_name)
        .bind(changes.amount)
        .bind(changes.status)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        tx.commit().await?;
        debug!(claim_id, "Updated claim");
        Ok(row)
    }

    /// Deletes a claim
    ///
    /// # Returns
    ///
    /// The row as it was before deletion, or NotFound
    pub async fn delete(&self, claim_id: i64) -> Result<ClaimRow, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            DELETE FROM claims
            WHERE id = $1
            RETURNING id, claimant_name, amount, status, submitted_at
            "#,
        )
        .bind(claim_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        tx.commit().await?;
        debug!(claim_id, "Deleted claim");
        Ok(row)
    }
}

/// Claim status enumeration, mapped to the `claim_status` PostgreSQL type
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "lowercase")]
pub enum ClaimStatus {
    Submitted,
    Approved,
    Rejected,
    Pending,
    Closed,
}

/// Database row for claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub claimant_name: String,
    pub amount: f64,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Data for inserting or overwriting a claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub claimant_name: String,
    pub amount: f64,
    pub status: ClaimStatus,
}
