use crate::shared::errors::AppError;

/// Field-level validation for the publishing domain.
///
/// Lengths are counted in Unicode scalar values, not bytes, so multi-byte
/// names like "Süddeutsche" validate the way a reader would expect.
pub struct Validator;

impl Validator {
    pub fn validate_author_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Author name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_magazine_name(name: &str) -> Result<(), AppError> {
        let len = name.chars().count();
        if !(2..=16).contains(&len) {
            return Err(AppError::ValidationError(
                "Magazine name must be between 2 and 16 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_category(category: &str) -> Result<(), AppError> {
        if category.is_empty() {
            return Err(AppError::ValidationError(
                "Category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_article_title(title: &str) -> Result<(), AppError> {
        let len = title.chars().count();
        if !(5..=50).contains(&len) {
            return Err(AppError::ValidationError(
                "Article title must be between 5 and 50 characters".to_string(),
            ));
        }
        Ok(())
    }
}
