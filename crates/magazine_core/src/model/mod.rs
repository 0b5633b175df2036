//! Catalog domain model: authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define validated records for the three entity kinds.
//! - Give every record a stable typed identity used for equality and hashing.
//!
//! # Invariants
//! - A record is either fully valid or never constructed.
//! - Association lists hold ids only; the service layer keeps both sides in sync.

pub mod article;
pub mod author;
pub mod field;
pub mod ids;
pub mod magazine;
