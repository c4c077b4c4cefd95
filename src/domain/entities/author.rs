use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A contributor who writes articles.
///
/// The name is fixed at construction and has no mutator. The contribution
/// list is append-only and grows only as a side effect of publishing an
/// article through the newsroom service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    id: Uuid,
    name: String,
    article_ids: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with a non-empty name.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            article_ids: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of this author's articles, in publication order.
    pub fn article_ids(&self) -> &[Uuid] {
        &self.article_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn record_article(&mut self, article_id: Uuid) {
        self.article_ids.push(article_id);
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_author_keeps_name() {
        let author = Author::new("Carla Espinosa").unwrap();
        assert_eq!(author.name(), "Carla Espinosa");
        assert!(author.article_ids().is_empty());
    }

    #[test]
    fn test_equality_follows_identity() {
        let author = Author::new("Carla Espinosa").unwrap();
        assert_eq!(author, author.clone());

        // Same name, different identity.
        let other = Author::new("Carla Espinosa").unwrap();
        assert_ne!(author, other);
        assert!(author.created_at() <= Utc::now());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(Author::new("").is_err());
    }

    #[test]
    fn test_display_shows_name() {
        let author = Author::new("Elliot Reid").unwrap();
        assert_eq!(author.to_string(), "Elliot Reid");
    }
}
