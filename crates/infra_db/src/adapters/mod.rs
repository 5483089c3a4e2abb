//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresClaimsAdapter;
//! use domain_claims::ClaimsPort;
//!
//! let adapter = PostgresClaimsAdapter::new(pool);
//! let claims = adapter.list_claims().await?;
//! ```

pub mod claims;

pub use claims::PostgresClaimsAdapter;
