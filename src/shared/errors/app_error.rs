use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("Category cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: Category cannot be empty");

        let err = AppError::NotFound("author 42".to_string());
        assert_eq!(err.to_string(), "Not found: author 42");
    }

    #[test]
    fn test_error_serializes_with_tag_and_message() {
        let err = AppError::ValidationError("bad input".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "ValidationError");
        assert_eq!(json["message"], "bad input");
    }
}
