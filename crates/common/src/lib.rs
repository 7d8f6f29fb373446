//! ReviewHub Common Library
//!
//! Shared code for the review service:
//! - SeaORM entity models and repository pattern
//! - Error types and handling
//! - Configuration management
//! - Pagination helpers

pub mod config;
pub mod db;
pub mod errors;
pub mod pagination;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};
pub use pagination::PaginatedResult;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of articles per listing page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// The closed set of tags an article may carry
pub const VALID_TAGS: [&str; 2] = ["workplace_review", "service_review"];
