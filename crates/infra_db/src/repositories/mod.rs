//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! plain row structs; conversion to domain types happens in the adapters.

pub mod claims;

pub use claims::ClaimsRepository;
