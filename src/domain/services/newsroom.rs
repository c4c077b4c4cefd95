use std::collections::{HashMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Article, Author, Magazine};
use crate::shared::errors::{AppError, AppResult};

/// The owning registry for the whole publishing model.
///
/// Every author, magazine, and article lives here, in creation order, and
/// nothing is ever removed short of [`Newsroom::reset`]. `publish` is the
/// only path that creates an article, so it is also the only place the
/// author-side and magazine-side back-links are maintained: each article id
/// lands exactly once in its author's list and exactly once in its
/// magazine's list.
///
/// Derived queries traverse the lists directly; there are no secondary
/// indexes and no caching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsroom {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Newsroom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the whole model. Intended for tests and embedders that need an
    /// explicit lifecycle instead of process restart.
    pub fn reset(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }

    // ---- registration ----------------------------------------------------

    /// Construct and register an author. Fails if the name is empty; on
    /// failure nothing is registered.
    pub fn add_author(&mut self, name: impl Into<String>) -> AppResult<Uuid> {
        let author = Author::new(name)?;
        let id = author.id();
        debug!("registered author {} ({})", author.name(), id);
        self.authors.push(author);
        Ok(id)
    }

    /// Construct and register a magazine. Fails on an out-of-bounds name or
    /// empty category; on failure nothing is registered.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> AppResult<Uuid> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        debug!("registered magazine {} ({})", magazine.name(), id);
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Construct and register an article, linking the author and magazine.
    ///
    /// This is the single choke point for link maintenance: the article is
    /// appended to the registry and its id to both owners' lists, or, on any
    /// failure, to none of them.
    pub fn publish(
        &mut self,
        author_id: Uuid,
        magazine_id: Uuid,
        title: impl Into<String>,
    ) -> AppResult<Uuid> {
        let author_idx = self.author_index(author_id)?;
        let magazine_idx = self.magazine_index(magazine_id)?;
        let article = Article::new(author_id, magazine_id, title)?;
        let id = article.id();
        debug!(
            "published article {} (author {}, magazine {})",
            id, author_id, magazine_id
        );
        self.articles.push(article);
        self.authors[author_idx].record_article(id);
        self.magazines[magazine_idx].record_article(id);
        Ok(id)
    }

    /// Author-side convenience path; identical to [`Newsroom::publish`].
    pub fn submit(
        &mut self,
        author_id: Uuid,
        magazine_id: Uuid,
        title: impl Into<String>,
    ) -> AppResult<Uuid> {
        self.publish(author_id, magazine_id, title)
    }

    /// Magazine-side convenience path; identical to [`Newsroom::publish`],
    /// so the link is registered exactly once.
    pub fn commission(
        &mut self,
        magazine_id: Uuid,
        author_id: Uuid,
        title: impl Into<String>,
    ) -> AppResult<Uuid> {
        self.publish(author_id, magazine_id, title)
    }

    // ---- accessors -------------------------------------------------------

    pub fn author(&self, id: Uuid) -> AppResult<&Author> {
        self.authors
            .iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("author {}", id)))
    }

    pub fn magazine(&self, id: Uuid) -> AppResult<&Magazine> {
        self.magazines
            .iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("magazine {}", id)))
    }

    pub fn magazine_mut(&mut self, id: Uuid) -> AppResult<&mut Magazine> {
        self.magazines
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("magazine {}", id)))
    }

    pub fn article(&self, id: Uuid) -> AppResult<&Article> {
        self.articles
            .iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("article {}", id)))
    }

    pub fn article_mut(&mut self, id: Uuid) -> AppResult<&mut Article> {
        self.articles
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("article {}", id)))
    }

    /// All authors ever registered, in creation order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All magazines ever registered, in creation order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// All articles ever published, in creation order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    // ---- author queries --------------------------------------------------

    /// The author's contribution list, in publication order.
    pub fn articles_by(&self, author_id: Uuid) -> AppResult<Vec<&Article>> {
        let author = self.author(author_id)?;
        Ok(author
            .article_ids()
            .iter()
            .filter_map(|id| self.find_article(*id))
            .collect())
    }

    /// Distinct magazines the author has contributed to. Set semantics:
    /// callers must not rely on order.
    pub fn magazines_of(&self, author_id: Uuid) -> AppResult<Vec<&Magazine>> {
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in self.articles_by(author_id)? {
            if seen.insert(article.magazine_id()) {
                if let Some(magazine) = self.find_magazine(article.magazine_id()) {
                    magazines.push(magazine);
                }
            }
        }
        Ok(magazines)
    }

    /// Distinct categories across the author's magazines, or `None` when the
    /// author has no articles. Callers distinguish "no data" from an empty
    /// result set by the `None`.
    pub fn topic_areas(&self, author_id: Uuid) -> AppResult<Option<HashSet<String>>> {
        let topics: HashSet<String> = self
            .articles_by(author_id)?
            .into_iter()
            .filter_map(|article| self.find_magazine(article.magazine_id()))
            .map(|magazine| magazine.category().to_string())
            .collect();
        Ok(if topics.is_empty() { None } else { Some(topics) })
    }

    // ---- magazine queries ------------------------------------------------

    /// The magazine's contribution list, in publication order.
    pub fn articles_in(&self, magazine_id: Uuid) -> AppResult<Vec<&Article>> {
        let magazine = self.magazine(magazine_id)?;
        Ok(magazine
            .article_ids()
            .iter()
            .filter_map(|id| self.find_article(*id))
            .collect())
    }

    /// Distinct authors who have written for the magazine. Set semantics:
    /// callers must not rely on order. Empty Vec (not `None`) when there are
    /// no articles.
    pub fn contributors(&self, magazine_id: Uuid) -> AppResult<Vec<&Author>> {
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in self.articles_in(magazine_id)? {
            if seen.insert(article.author_id()) {
                if let Some(author) = self.find_author(article.author_id()) {
                    authors.push(author);
                }
            }
        }
        Ok(authors)
    }

    /// Titles of the magazine's articles in publication order, or `None`
    /// when there are none.
    pub fn article_titles(&self, magazine_id: Uuid) -> AppResult<Option<Vec<String>>> {
        let titles: Vec<String> = self
            .articles_in(magazine_id)?
            .into_iter()
            .map(|article| article.title().to_string())
            .collect();
        Ok(if titles.is_empty() { None } else { Some(titles) })
    }

    /// Authors with strictly more than two articles in this magazine, or
    /// `None` when nobody qualifies. Set semantics: unordered.
    pub fn contributing_authors(&self, magazine_id: Uuid) -> AppResult<Option<Vec<&Author>>> {
        let mut counts: HashMap<Uuid, usize> = HashMap::new();
        for article in self.articles_in(magazine_id)? {
            *counts.entry(article.author_id()).or_insert(0) += 1;
        }
        let authors: Vec<&Author> = counts
            .into_iter()
            .filter(|(_, count)| *count > 2)
            .filter_map(|(id, _)| self.find_author(id))
            .collect();
        Ok(if authors.is_empty() {
            None
        } else {
            Some(authors)
        })
    }

    /// The magazine with the most articles across the whole registry, or
    /// `None` when the registry is empty or no magazine has any article.
    /// Ties go to the earliest-created magazine.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut top: Option<&Magazine> = None;
        for magazine in &self.magazines {
            // strict > keeps the first-created magazine on ties
            if top.map_or(true, |t| magazine.article_ids().len() > t.article_ids().len()) {
                top = Some(magazine);
            }
        }
        top.filter(|magazine| !magazine.article_ids().is_empty())
    }

    // ---- lookup helpers --------------------------------------------------

    fn author_index(&self, id: Uuid) -> AppResult<usize> {
        self.authors
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("author {}", id)))
    }

    fn magazine_index(&self, id: Uuid) -> AppResult<usize> {
        self.magazines
            .iter()
            .position(|m| m.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("magazine {}", id)))
    }

    fn find_author(&self, id: Uuid) -> Option<&Author> {
        self.authors.iter().find(|a| a.id() == id)
    }

    fn find_magazine(&self, id: Uuid) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id() == id)
    }

    fn find_article(&self, id: Uuid) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }
}
