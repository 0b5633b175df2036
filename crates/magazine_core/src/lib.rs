//! In-memory catalog of authors, magazines and the articles that link them.
//!
//! All associations are formed by [`CatalogService`]; aggregate queries are
//! derived on demand from the association lists.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::field::FieldError;
pub use model::ids::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;
pub use repo::catalog_repo::{
    CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult,
};
pub use service::catalog_service::{
    AssociationError, CatalogError, CatalogResult, CatalogService, CatalogSnapshot,
    CONTRIBUTING_AUTHOR_THRESHOLD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
