use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A publication that carries articles, grouped under a topic category.
///
/// Name and category stay mutable for the magazine's lifetime; every update
/// runs the same validation as construction. The article list is append-only
/// and grows only as a side effect of publishing through the newsroom
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    id: Uuid,
    name: String,
    category: String,
    article_ids: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Magazine {
    /// Create a new magazine. The name must be 2-16 characters and the
    /// category non-empty.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        let category = category.into();
        Validator::validate_magazine_name(&name)?;
        Validator::validate_category(&category)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
            article_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of this magazine's articles, in publication order.
    pub fn article_ids(&self) -> &[Uuid] {
        &self.article_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the name. Same bounds as construction; on failure the prior
    /// name is retained.
    pub fn set_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let name = name.into();
        Validator::validate_magazine_name(&name)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Equivalent entry point to [`Magazine::set_name`].
    pub fn rename(&mut self, name: impl Into<String>) -> AppResult<()> {
        self.set_name(name)
    }

    /// Replace the category. Must stay non-empty; on failure the prior
    /// category is retained.
    pub fn set_category(&mut self, category: impl Into<String>) -> AppResult<()> {
        let category = category.into();
        Validator::validate_category(&category)?;
        self.category = category;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Equivalent entry point to [`Magazine::set_category`].
    pub fn recategorize(&mut self, category: impl Into<String>) -> AppResult<()> {
        self.set_category(category)
    }

    pub(crate) fn record_article(&mut self, article_id: Uuid) {
        self.article_ids.push(article_id);
    }
}

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_magazine_keeps_fields() {
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();
        assert_eq!(magazine.name(), "Vogue");
        assert_eq!(magazine.category(), "Fashion");
        assert!(magazine.article_ids().is_empty());
    }

    #[test]
    fn test_name_bounds_at_construction() {
        assert!(Magazine::new("V", "Fashion").is_err());
        assert!(Magazine::new("Vo", "Fashion").is_ok());
        assert!(Magazine::new("A much too long magazine name", "Fashion").is_err());
    }

    #[test]
    fn test_empty_category_is_rejected() {
        assert!(Magazine::new("Vogue", "").is_err());
    }

    #[test]
    fn test_set_name_validates_and_retains_prior_on_failure() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        magazine.set_name("Harper's").unwrap();
        assert_eq!(magazine.name(), "Harper's");

        assert!(magazine.set_name("V").is_err());
        assert_eq!(magazine.name(), "Harper's");
    }

    #[test]
    fn test_rename_matches_set_name() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        magazine.rename("Elle Decor").unwrap();
        assert_eq!(magazine.name(), "Elle Decor");
        assert!(magazine.rename("x".repeat(17)).is_err());
        assert_eq!(magazine.name(), "Elle Decor");
    }

    #[test]
    fn test_set_category_validates_and_retains_prior_on_failure() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        magazine.set_category("Lifestyle").unwrap();
        assert_eq!(magazine.category(), "Lifestyle");

        assert!(magazine.set_category("").is_err());
        assert_eq!(magazine.category(), "Lifestyle");

        magazine.recategorize("Culture").unwrap();
        assert_eq!(magazine.category(), "Culture");
    }

    #[test]
    fn test_updated_at_bumps_on_successful_mutation() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let before = magazine.updated_at();
        magazine.set_category("Lifestyle").unwrap();
        assert!(magazine.updated_at() >= before);
    }
}
