//! Magazine record.
//!
//! # Invariants
//! - `name` is always 2..=16 characters, `category` always non-empty; both
//!   at construction and after every mutation.
//! - `articles` never holds the same article twice.

use crate::model::field::{validate_category, validate_magazine_name, FieldError};
use crate::model::ids::{ArticleId, MagazineId};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A publication grouping articles under one category.
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    /// Published articles in insertion order, de-duplicated.
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: MagazineId::generate(),
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Replaces the name. On failure the previous name is kept.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> Result<(), FieldError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category. On failure the previous category is kept.
    pub(crate) fn set_category(&mut self, category: impl Into<String>) -> Result<(), FieldError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Appends `article` unless already listed. Returns `true` when inserted.
    pub(crate) fn insert_article(&mut self, article: ArticleId) -> bool {
        if self.articles.contains(&article) {
            return false;
        }
        self.articles.push(article);
        true
    }

    pub(crate) fn remove_article(&mut self, article: ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|id| *id != article);
        self.articles.len() < before
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::field::FieldError;
    use crate::model::ids::ArticleId;

    #[test]
    fn construction_enforces_name_and_category_rules() {
        assert_eq!(
            Magazine::new("a", "Fashion").unwrap_err(),
            FieldError::MagazineNameLength { len: 1 }
        );
        assert_eq!(
            Magazine::new("a".repeat(17), "Fashion").unwrap_err(),
            FieldError::MagazineNameLength { len: 17 }
        );
        assert_eq!(
            Magazine::new("ab", "").unwrap_err(),
            FieldError::EmptyCategory
        );

        let magazine = Magazine::new("Vogue", "Fashion").unwrap();
        assert_eq!(magazine.name(), "Vogue");
        assert_eq!(magazine.category(), "Fashion");
    }

    #[test]
    fn failed_setters_keep_previous_values() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();

        assert!(magazine.set_name("x".repeat(17)).is_err());
        assert!(magazine.set_category("").is_err());
        assert_eq!(magazine.name(), "Vogue");
        assert_eq!(magazine.category(), "Fashion");

        magazine.set_name("Arch Digest").unwrap();
        magazine.set_category("Design").unwrap();
        assert_eq!(magazine.name(), "Arch Digest");
        assert_eq!(magazine.category(), "Design");
    }

    #[test]
    fn insert_article_is_idempotent() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let article = ArticleId::generate();

        assert!(magazine.insert_article(article));
        assert!(!magazine.insert_article(article));
        assert_eq!(magazine.article_ids(), &[article]);
    }
}
