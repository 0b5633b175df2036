//! Catalog use-case services.
//!
//! # Responsibility
//! - Form and repair associations between authors, magazines and articles.
//! - Derive aggregate queries on demand from the association lists.

pub mod catalog_service;
