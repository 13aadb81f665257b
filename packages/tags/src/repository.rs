// ABOUTME: Read access to persisted tag records
// ABOUTME: Exact-name lookup and tag listing backed by SQLite

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::types::Tag;

/// Read-only view over the tag store.
///
/// `find_by_name` keeps absence (`Ok(None)`) apart from storage failure (`Err`).
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Exact, case-sensitive name match
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Tag>>;

    /// All stored tag names in insertion order
    async fn list_names(&self) -> StorageResult<Vec<String>>;
}

pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Tag
    fn row_to_tag(&self, row: &sqlx::sqlite::SqliteRow) -> StorageResult<Tag> {
        let description: Option<String> =
            row.try_get("description").map_err(StorageError::Sqlx)?;

        Ok(Tag {
            name: row.try_get("name").map_err(StorageError::Sqlx)?,
            description: description.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Tag>> {
        debug!("Fetching tag by name: {}", name);

        let row = sqlx::query("SELECT name, description FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(self.row_to_tag(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_names(&self) -> StorageResult<Vec<String>> {
        debug!("Listing tag names");

        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(names)
    }
}
