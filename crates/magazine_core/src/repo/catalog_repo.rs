//! Catalog repository contract and in-memory implementation.
//!
//! The repository is an explicit value owned by the service, so dropping it
//! (or building a new one) is the only reset a test needs.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A record with the same id is already stored.
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record already stored: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for authors, magazines and articles.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;

    fn author(&self, id: AuthorId) -> Option<&Author>;
    fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author>;
    fn magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn article(&self, id: ArticleId) -> Option<&Article>;
    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article>;

    /// All authors in insertion order.
    fn authors(&self) -> Vec<&Author>;
    /// All magazines in insertion order.
    fn magazines(&self) -> Vec<&Magazine>;
    /// All articles in creation order.
    fn articles(&self) -> Vec<&Article>;
}

/// Insertion-ordered rows with an id index.
#[derive(Debug)]
struct Table<K, V> {
    rows: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash, V> Table<K, V> {
    fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(value);
        true
    }

    fn get(&self, key: K) -> Option<&V> {
        self.index.get(&key).map(|position| &self.rows[*position])
    }

    fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let position = *self.index.get(&key)?;
        self.rows.get_mut(position)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Process-local catalog storage.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: Table<AuthorId, Author>,
    magazines: Table<MagazineId, Magazine>,
    articles: Table<ArticleId, Article>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if !self.authors.insert(id, author) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if !self.magazines.insert(id, magazine) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        if !self.articles.insert(id, article) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(id)
    }

    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id)
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(id)
    }

    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id)
    }

    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(id)
    }

    fn authors(&self) -> Vec<&Author> {
        self.authors.rows.iter().collect()
    }

    fn magazines(&self) -> Vec<&Magazine> {
        self.magazines.rows.iter().collect()
    }

    fn articles(&self) -> Vec<&Article> {
        self.articles.rows.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogRepository, InMemoryCatalogRepository, RepoError};
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut repo = InMemoryCatalogRepository::new();
        let author = Author::new("Carry Bradshaw").unwrap();
        let id = repo.insert_author(author.clone()).unwrap();

        let err = repo.insert_author(author).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(id.as_uuid()));
        assert_eq!(repo.author_count(), 1);
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let mut repo = InMemoryCatalogRepository::new();
        let names = ["Vogue", "GQ", "Wired"];
        let ids: Vec<_> = names
            .iter()
            .map(|name| {
                repo.insert_magazine(Magazine::new(*name, "General").unwrap())
                    .unwrap()
            })
            .collect();

        let listed: Vec<_> = repo.magazines().iter().map(|m| m.id()).collect();
        assert_eq!(listed, ids);
        assert_eq!(repo.magazine(ids[1]).unwrap().name(), "GQ");
    }

    #[test]
    fn mutable_lookup_edits_stored_record() {
        let mut repo = InMemoryCatalogRepository::new();
        let id = repo
            .insert_magazine(Magazine::new("Vogue", "Fashion").unwrap())
            .unwrap();

        repo.magazine_mut(id).unwrap().set_category("Style").unwrap();
        assert_eq!(repo.magazine(id).unwrap().category(), "Style");
    }
}
