pub mod entities;
pub mod services;

// Re-exports for easy access
pub use entities::{Article, Author, Magazine};
pub use services::Newsroom;
