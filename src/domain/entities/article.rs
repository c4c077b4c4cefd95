use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// The join entity linking exactly one author and one magazine.
///
/// Both endpoint ids are fixed at construction. Construction happens only
/// through the newsroom service, which is the single place the
/// author/magazine back-links are maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: Uuid,
    author_id: Uuid,
    magazine_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Article {
    /// Title must be 5-50 characters at construction.
    pub(crate) fn new(
        author_id: Uuid,
        magazine_id: Uuid,
        title: impl Into<String>,
    ) -> AppResult<Self> {
        let title = title.into();
        Validator::validate_article_title(&title)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            magazine_id,
            title,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn magazine_id(&self) -> Uuid {
        self.magazine_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the title. The 5-50 bound applies only at construction;
    /// post-construction updates accept any string.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_article_keeps_endpoints_and_title() {
        let author_id = Uuid::new_v4();
        let magazine_id = Uuid::new_v4();
        let article = Article::new(author_id, magazine_id, "How to Care for Ferns").unwrap();
        assert_eq!(article.author_id(), author_id);
        assert_eq!(article.magazine_id(), magazine_id);
        assert_eq!(article.title(), "How to Care for Ferns");
    }

    #[test]
    fn test_title_bounds_at_construction() {
        let a = Uuid::new_v4();
        let m = Uuid::new_v4();
        assert!(Article::new(a, m, "Tiny").is_err()); // 4 chars
        assert!(Article::new(a, m, "Fives").is_ok()); // 5 chars
        assert!(Article::new(a, m, "x".repeat(51)).is_err());
    }

    #[test]
    fn test_set_title_bumps_updated_at() {
        let mut article =
            Article::new(Uuid::new_v4(), Uuid::new_v4(), "How to Care for Ferns").unwrap();
        let created = article.created_at();
        assert_eq!(article.updated_at(), created);

        article.set_title("Ferns, Revisited");
        assert!(article.updated_at() >= created);
        assert_eq!(article.created_at(), created);
    }

    #[test]
    fn test_set_title_skips_length_bounds() {
        let mut article =
            Article::new(Uuid::new_v4(), Uuid::new_v4(), "How to Care for Ferns").unwrap();
        // The constructor bound is not re-applied on update.
        article.set_title("Hi");
        assert_eq!(article.title(), "Hi");
        let long = "x".repeat(80);
        article.set_title(long.clone());
        assert_eq!(article.title(), long);
    }
}
