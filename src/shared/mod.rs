// Shared kernel: error types and cross-cutting utilities

pub mod errors; // Shared error types
pub mod utils; // Field validation, logging

// Re-exports for convenience
pub use errors::{AppError, AppResult};
pub use utils::Validator;
