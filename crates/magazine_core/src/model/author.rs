//! Author record.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - `articles` is append-only except when an article is moved to another
//!   author through the service layer.

use crate::model::field::{validate_author_name, FieldError};
use crate::model::ids::{ArticleId, AuthorId};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A writer who can publish articles in any number of magazines.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    /// Authored articles in creation order.
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: AuthorId::generate(),
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of this author's articles, oldest first.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn push_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    pub(crate) fn remove_article(&mut self, article: ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|id| *id != article);
        self.articles.len() < before
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Author;
    use crate::model::field::FieldError;
    use crate::model::ids::ArticleId;

    #[test]
    fn new_author_has_no_articles() {
        let author = Author::new("Carry Bradshaw").unwrap();
        assert_eq!(author.name(), "Carry Bradshaw");
        assert!(author.article_ids().is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(Author::new("").unwrap_err(), FieldError::EmptyAuthorName);
    }

    #[test]
    fn equality_follows_identity_not_name() {
        let first = Author::new("Nathaniel Hawthorne").unwrap();
        let second = Author::new("Nathaniel Hawthorne").unwrap();
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn remove_article_reports_whether_it_was_present() {
        let mut author = Author::new("Carry Bradshaw").unwrap();
        let article = ArticleId::generate();
        author.push_article(article);

        assert!(author.remove_article(article));
        assert!(!author.remove_article(article));
        assert!(author.article_ids().is_empty());
    }
}
