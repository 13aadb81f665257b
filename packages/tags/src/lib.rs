// ABOUTME: Tag catalog for questions
// ABOUTME: Tag lookup by name and question counts per tag over a SQLite store

pub mod db;
pub mod error;
pub mod question_counts;
pub mod repository;
pub mod service;
pub mod types;

// Re-export main types
pub use error::{AggregationError, StorageError, StorageResult, TagError, NOT_FOUND_MESSAGE};
pub use question_counts::{QuestionCountSource, SqliteQuestionCounts};
pub use repository::{SqliteTagRepository, TagRepository};
pub use service::TagCatalogService;
pub use types::{Tag, TagCount, TagCountMap};
