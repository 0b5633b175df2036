//! Repository layer for catalog records.
//!
//! # Responsibility
//! - Define the storage contract the catalog service is written against.
//! - Provide the in-memory implementation used by the process.
//!
//! # Invariants
//! - Listing order is insertion order for every entity kind.
//! - Repositories store records as given; association rules live in the service.

pub mod catalog_repo;
