//! Claims Domain Ports
//!
//! This module defines the persistence port for claims, so request handlers
//! depend on an injected trait object rather than on a concrete database.
//!
//! # Architecture
//!
//! - **Internal Adapter**: PostgreSQL via `infra_db::PostgresClaimsAdapter`
//! - **Mock Adapter**: [`mock::InMemoryClaimsPort`] for tests without a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::ClaimsPort;
//! use std::sync::Arc;
//!
//! let claims: Arc<dyn ClaimsPort> = Arc::new(PostgresClaimsAdapter::new(pool));
//! let created = claims.create_claim(draft).await?;
//! ```
//!
//! Every operation is one unit of work against storage. Lookup-then-mutate is
//! not protected against a concurrent writer on the same id; the last
//! committed write wins.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::{Claim, ClaimDraft};

/// Entity name used in not-found errors
pub const CLAIM_ENTITY: &str = "Claim";

/// Persistence operations for claims
///
/// Absent identifiers are reported as `PortError::NotFound`.
#[async_trait]
pub trait ClaimsPort: DomainPort + HealthCheckable {
    /// Stores a new claim, assigning its id and submission time
    async fn create_claim(&self, draft: ClaimDraft) -> Result<Claim, PortError>;

    /// Returns every stored claim; an empty vector when there are none
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// Fetches a single claim
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Replaces the name, amount, and status of an existing claim
    async fn update_claim(&self, id: ClaimId, draft: ClaimDraft) -> Result<Claim, PortError>;

    /// Removes a claim, returning its state prior to deletion
    async fn delete_claim(&self, id: ClaimId) -> Result<Claim, PortError>;
}

/// Mock implementation of ClaimsPort for testing
///
/// Stores claims in memory and is useful for handler tests without database
/// or container dependencies.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::HealthCheckResult;

    #[derive(Debug, Default)]
    struct Table {
        rows: BTreeMap<ClaimId, Claim>,
        last_id: i64,
    }

    /// In-memory mock implementation of ClaimsPort
    ///
    /// Ids are handed out sequentially starting at 1 and never reused, like a
    /// database sequence. Listing returns claims in id order.
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryClaimsPort {
        table: Arc<RwLock<Table>>,
    }

    impl InMemoryClaimsPort {
        /// Creates a new, empty port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port with drafts, in order
        pub async fn with_drafts(drafts: Vec<ClaimDraft>) -> Self {
            let port = Self::new();
            for draft in drafts {
                port.create_claim(draft)
                    .await
                    .expect("in-memory insert never fails");
            }
            port
        }

        /// Number of stored claims
        pub async fn len(&self) -> usize {
            self.table.read().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    impl DomainPort for InMemoryClaimsPort {}

    #[async_trait]
    impl HealthCheckable for InMemoryClaimsPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("in-memory-claims-port", 0)
        }
    }

    #[async_trait]
    impl ClaimsPort for InMemoryClaimsPort {
        async fn create_claim(&self, draft: ClaimDraft) -> Result<Claim, PortError> {
            let mut table = self.table.write().await;
            table.last_id += 1;
            let id = ClaimId::new(table.last_id);
            let claim = Claim::from_draft(id, draft, Utc::now());
            table.rows.insert(id, claim.clone());
            Ok(claim)
        }

        async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.table.read().await.rows.values().cloned().collect())
        }

        async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
            self.table
                .read()
                .await
                .rows
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found(CLAIM_ENTITY, id))
        }

        async fn update_claim(&self, id: ClaimId, draft: ClaimDraft) -> Result<Claim, PortError> {
            let mut table = self.table.write().await;
            let claim = table
                .rows
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found(CLAIM_ENTITY, id))?;
            claim.apply(&draft);
            Ok(claim.clone())
        }

        async fn delete_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
            self.table
                .write()
                .await
                .rows
                .remove(&id)
                .ok_or_else(|| PortError::not_found(CLAIM_ENTITY, id))
        }
    }
}
