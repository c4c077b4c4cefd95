pub mod article;
pub mod author;
pub mod magazine;

// Re-exports for easy access
pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
