//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for claims using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `repositories` own the SQL and
//! row types, `adapters` implement the domain's `ClaimsPort` on top of them
//! and translate errors and rows into domain terms.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresClaimsAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims_db")).await?;
//! run_migrations(&pool).await?;
//! let claims = PostgresClaimsAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, run_migrations, MIGRATOR};
pub use error::DatabaseError;
pub use repositories::ClaimsRepository;
pub use adapters::PostgresClaimsAdapter;
