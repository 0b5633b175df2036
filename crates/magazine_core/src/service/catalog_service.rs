//! Catalog use-case service.
//!
//! # Responsibility
//! - Create authors, magazines and articles through one entry point.
//! - Register every new article into its author and its magazine.
//! - Answer aggregate queries by walking association lists; nothing is cached.
//!
//! # Invariants
//! - Every article listed by an author has `article.author() == author.id()`.
//! - Every article listed by a magazine has `article.magazine() == magazine.id()`.
//! - All validation runs before the repository is touched, so a failed call
//!   leaves no partial state behind.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::field::FieldError;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

/// Article count a magazine contributor must exceed to be a contributing author.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// A reference did not resolve to a record of the expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationError {
    UnknownAuthor(AuthorId),
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
    /// Article belongs to a different magazine than the one it was offered to.
    ForeignArticle {
        article: ArticleId,
        magazine: MagazineId,
    },
}

impl AssociationError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownAuthor(_) => "unknown_author",
            Self::UnknownMagazine(_) => "unknown_magazine",
            Self::UnknownArticle(_) => "unknown_article",
            Self::ForeignArticle { .. } => "foreign_article",
        }
    }
}

impl Display for AssociationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAuthor(id) => write!(f, "author not found: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not found: {id}"),
            Self::ForeignArticle { article, magazine } => write!(
                f,
                "article {article} does not belong to magazine {magazine}"
            ),
        }
    }
}

impl Error for AssociationError {}

/// Errors from catalog service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A scalar field (title, name, category) failed its rule.
    InvalidArgument(FieldError),
    /// A reference field did not resolve to the expected entity.
    InvalidAssociation(AssociationError),
    /// Storage-level failure.
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::InvalidAssociation(err) => write!(f, "invalid association: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::InvalidAssociation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<FieldError> for CatalogError {
    fn from(value: FieldError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<AssociationError> for CatalogError {
    fn from(value: AssociationError) -> Self {
        Self::InvalidAssociation(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owned, serializable copy of the whole catalog in creation order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub authors: Vec<Author>,
    pub magazines: Vec<Magazine>,
    pub articles: Vec<Article>,
}

/// Use-case service over one catalog repository.
pub struct CatalogService<R: CatalogRepository = InMemoryCatalogRepository> {
    repo: R,
}

impl CatalogService<InMemoryCatalogRepository> {
    /// Creates a service backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalogRepository::new())
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    // ---- authors ----

    /// Creates an author. Fails with `InvalidArgument` on an empty name.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).map_err(|err| rejected("author_create", err))?;
        let id = self.repo.insert_author(author)?;
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> CatalogResult<&Author> {
        Ok(self
            .repo
            .author(id)
            .ok_or(AssociationError::UnknownAuthor(id))?)
    }

    /// Articles by `author`, oldest first.
    pub fn author_articles(&self, author: AuthorId) -> CatalogResult<Vec<&Article>> {
        let author = self.author(author)?;
        self.resolve_articles(author.article_ids())
    }

    /// Distinct magazines `author` has published in, first appearance first.
    pub fn author_magazines(&self, author: AuthorId) -> CatalogResult<Vec<&Magazine>> {
        let magazines = self
            .author_articles(author)?
            .into_iter()
            .map(|article| self.magazine(article.magazine()))
            .collect::<CatalogResult<Vec<_>>>()?;
        Ok(unique_by(magazines, |magazine| magazine.id()))
    }

    /// Shorthand for [`create_article`](Self::create_article) from the author side.
    pub fn author_add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// Distinct categories across the author's magazines, compared by value.
    ///
    /// Returns `None` when the author has no articles at all.
    pub fn author_topic_areas(&self, author: AuthorId) -> CatalogResult<Option<Vec<&str>>> {
        let magazines = self.author_magazines(author)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        let categories: Vec<&str> = magazines.into_iter().map(Magazine::category).collect();
        Ok(Some(unique_by(categories, |category| *category)))
    }

    // ---- magazines ----

    /// Creates a magazine. Name must be 2..=16 characters, category non-empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine =
            Magazine::new(name, category).map_err(|err| rejected("magazine_create", err))?;
        let id = self.repo.insert_magazine(magazine)?;
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    pub fn magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        Ok(self
            .repo
            .magazine(id)
            .ok_or(AssociationError::UnknownMagazine(id))?)
    }

    /// Renames a magazine. An invalid name fails and leaves the old one in place.
    pub fn rename_magazine(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        self.magazine_mut(magazine)?
            .set_name(name)
            .map_err(|err| rejected("magazine_rename", err))?;
        debug!("event=magazine_rename module=catalog status=ok magazine_id={magazine}");
        Ok(())
    }

    /// Changes a magazine's category. An empty category fails and changes nothing.
    pub fn recategorize_magazine(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        self.magazine_mut(magazine)?
            .set_category(category)
            .map_err(|err| rejected("magazine_recategorize", err))?;
        debug!("event=magazine_recategorize module=catalog status=ok magazine_id={magazine}");
        Ok(())
    }

    pub fn magazine_articles(&self, magazine: MagazineId) -> CatalogResult<Vec<&Article>> {
        let magazine = self.magazine(magazine)?;
        self.resolve_articles(magazine.article_ids())
    }

    /// Registers an existing article with its magazine.
    ///
    /// Idempotent: returns `Ok(false)` when the article is already listed.
    /// The article must belong to `magazine`.
    pub fn magazine_add_article(
        &mut self,
        magazine: MagazineId,
        article: ArticleId,
    ) -> CatalogResult<bool> {
        let owner = self.article(article)?.magazine();
        if owner != magazine {
            return Err(associate_failed(
                "magazine_add_article",
                AssociationError::ForeignArticle { article, magazine },
            ));
        }
        Ok(self.magazine_mut(magazine)?.insert_article(article))
    }

    /// Distinct authors with at least one article in `magazine`.
    pub fn magazine_contributors(&self, magazine: MagazineId) -> CatalogResult<Vec<&Author>> {
        let authors = self
            .magazine_articles(magazine)?
            .into_iter()
            .map(|article| self.author(article.author()))
            .collect::<CatalogResult<Vec<_>>>()?;
        Ok(unique_by(authors, |author| author.id()))
    }

    /// Titles of the magazine's articles in order, or `None` when it has none.
    pub fn magazine_article_titles(
        &self,
        magazine: MagazineId,
    ) -> CatalogResult<Option<Vec<&str>>> {
        let articles = self.magazine_articles(magazine)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(articles.into_iter().map(Article::title).collect()))
    }

    /// Authors with more than two articles in `magazine`, or `None` if nobody qualifies.
    pub fn magazine_contributing_authors(
        &self,
        magazine: MagazineId,
    ) -> CatalogResult<Option<Vec<&Author>>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        let articles = self.magazine_articles(magazine)?;
        for article in &articles {
            *counts.entry(article.author()).or_default() += 1;
        }

        let order: Vec<AuthorId> = articles.iter().map(|article| article.author()).collect();
        let mut prolific = Vec::new();
        for author in unique_by(order, |id| *id) {
            if counts.get(&author).copied().unwrap_or_default() > CONTRIBUTING_AUTHOR_THRESHOLD {
                prolific.push(self.author(author)?);
            }
        }

        if prolific.is_empty() {
            return Ok(None);
        }
        Ok(Some(prolific))
    }

    // ---- articles ----

    /// Creates an article and registers it with its author and magazine.
    ///
    /// Checks run in order: author, magazine, title. The first failure is
    /// returned and nothing is stored.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        if self.repo.author(author).is_none() {
            return Err(associate_failed(
                "article_create",
                AssociationError::UnknownAuthor(author),
            ));
        }
        if self.repo.magazine(magazine).is_none() {
            return Err(associate_failed(
                "article_create",
                AssociationError::UnknownMagazine(magazine),
            ));
        }
        let article =
            Article::new(author, magazine, title).map_err(|err| rejected("article_create", err))?;

        let id = self.repo.insert_article(article)?;
        self.author_mut(author)?.push_article(id);
        self.magazine_mut(magazine)?.insert_article(id);

        info!(
            "event=article_create module=catalog status=ok article_id={id} author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    pub fn article(&self, id: ArticleId) -> CatalogResult<&Article> {
        Ok(self
            .repo
            .article(id)
            .ok_or(AssociationError::UnknownArticle(id))?)
    }

    /// Every article in the catalog, in creation order.
    pub fn all_articles(&self) -> Vec<&Article> {
        self.repo.articles()
    }

    /// Moves an article to another author, updating both authors' lists.
    pub fn reassign_article_author(
        &mut self,
        article: ArticleId,
        new_author: AuthorId,
    ) -> CatalogResult<()> {
        let old_author = self.article(article)?.author();
        if self.repo.author(new_author).is_none() {
            return Err(associate_failed(
                "article_reassign_author",
                AssociationError::UnknownAuthor(new_author),
            ));
        }
        if old_author == new_author {
            return Ok(());
        }

        if let Some(previous) = self.repo.author_mut(old_author) {
            previous.remove_article(article);
        }
        self.author_mut(new_author)?.push_article(article);
        self.article_mut(article)?.set_author(new_author);

        info!(
            "event=article_reassign_author module=catalog status=ok article_id={article} from={old_author} to={new_author}"
        );
        Ok(())
    }

    /// Moves an article to another magazine, updating both magazines' lists.
    pub fn reassign_article_magazine(
        &mut self,
        article: ArticleId,
        new_magazine: MagazineId,
    ) -> CatalogResult<()> {
        let old_magazine = self.article(article)?.magazine();
        if self.repo.magazine(new_magazine).is_none() {
            return Err(associate_failed(
                "article_reassign_magazine",
                AssociationError::UnknownMagazine(new_magazine),
            ));
        }
        if old_magazine == new_magazine {
            return Ok(());
        }

        if let Some(previous) = self.repo.magazine_mut(old_magazine) {
            previous.remove_article(article);
        }
        self.magazine_mut(new_magazine)?.insert_article(article);
        self.article_mut(article)?.set_magazine(new_magazine);

        info!(
            "event=article_reassign_magazine module=catalog status=ok article_id={article} from={old_magazine} to={new_magazine}"
        );
        Ok(())
    }

    /// Clones the full catalog into a serializable snapshot.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            authors: self.repo.authors().into_iter().cloned().collect(),
            magazines: self.repo.magazines().into_iter().cloned().collect(),
            articles: self.repo.articles().into_iter().cloned().collect(),
        }
    }

    fn author_mut(&mut self, id: AuthorId) -> CatalogResult<&mut Author> {
        Ok(self
            .repo
            .author_mut(id)
            .ok_or(AssociationError::UnknownAuthor(id))?)
    }

    fn magazine_mut(&mut self, id: MagazineId) -> CatalogResult<&mut Magazine> {
        Ok(self
            .repo
            .magazine_mut(id)
            .ok_or(AssociationError::UnknownMagazine(id))?)
    }

    fn article_mut(&mut self, id: ArticleId) -> CatalogResult<&mut Article> {
        Ok(self
            .repo
            .article_mut(id)
            .ok_or(AssociationError::UnknownArticle(id))?)
    }

    fn resolve_articles(&self, ids: &[ArticleId]) -> CatalogResult<Vec<&Article>> {
        ids.iter().map(|id| self.article(*id)).collect()
    }
}

impl Default for CatalogService<InMemoryCatalogRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Keeps the first item for each key, preserving input order.
fn unique_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

// Log events carry codes only; user-supplied text stays out of the log.
fn rejected(event: &str, err: FieldError) -> CatalogError {
    warn!(
        "event={event} module=catalog status=rejected reason={}",
        err.code()
    );
    CatalogError::InvalidArgument(err)
}

fn associate_failed(event: &str, err: AssociationError) -> CatalogError {
    warn!(
        "event={event} module=catalog status=rejected reason={}",
        err.code()
    );
    CatalogError::InvalidAssociation(err)
}

#[cfg(test)]
mod tests {
    use super::{unique_by, CatalogError, CatalogService};
    use crate::model::field::FieldError;
    use std::error::Error;

    #[test]
    fn unique_by_keeps_first_occurrence_order() {
        let values = vec!["b", "a", "b", "c", "a"];
        assert_eq!(unique_by(values, |value| *value), vec!["b", "a", "c"]);
    }

    #[test]
    fn catalog_error_exposes_field_error_as_source() {
        let err = CatalogError::from(FieldError::EmptyCategory);
        assert!(err.to_string().starts_with("invalid argument"));
        assert!(err.source().is_some());
    }

    #[test]
    fn failed_create_leaves_repository_empty() {
        let mut service = CatalogService::in_memory();
        assert!(service.create_author("").is_err());
        assert!(service.create_magazine("a", "Fashion").is_err());

        assert_eq!(service.repository().author_count(), 0);
        assert_eq!(service.repository().magazine_count(), 0);
    }
}
