pub mod domain;
pub mod shared;

// Re-exports for easy external access
pub use domain::entities::{Article, Author, Magazine};
pub use domain::services::Newsroom;
pub use shared::errors::{AppError, AppResult};
