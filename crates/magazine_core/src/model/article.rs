//! Article record: the join between one author and one magazine.
//!
//! Articles are only built by the catalog service, which registers them into
//! both owners in the same call. There is no delete path.

use crate::model::field::{validate_title, FieldError};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use serde::Serialize;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: ArticleId,
    /// Immutable, 5..=50 characters.
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ArticleId::generate(),
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::field::FieldError;
    use crate::model::ids::{AuthorId, MagazineId};

    #[test]
    fn title_outside_bounds_is_rejected() {
        let author = AuthorId::generate();
        let magazine = MagazineId::generate();

        assert_eq!(
            Article::new(author, magazine, "Hey").unwrap_err(),
            FieldError::TitleLength { len: 3 }
        );
        assert_eq!(
            Article::new(author, magazine, "t".repeat(51)).unwrap_err(),
            FieldError::TitleLength { len: 51 }
        );
    }

    #[test]
    fn accessors_return_construction_values() {
        let author = AuthorId::generate();
        let magazine = MagazineId::generate();
        let article = Article::new(author, magazine, "How to wear a tutu").unwrap();

        assert_eq!(article.title(), "How to wear a tutu");
        assert_eq!(article.author(), author);
        assert_eq!(article.magazine(), magazine);
    }
}
