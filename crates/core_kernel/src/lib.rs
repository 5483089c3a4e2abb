//! Core Kernel - Foundational types for the claims service
//!
//! This crate provides the building blocks shared by every layer:
//! - Strongly-typed identifiers backed by storage-generated integers
//! - Port infrastructure (errors, marker traits, health checks) for the
//!   hexagonal architecture used between the domain and its adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::ClaimId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
