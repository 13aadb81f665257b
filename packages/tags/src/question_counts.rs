// ABOUTME: Question counts per tag
// ABOUTME: Counts questions referencing each requested tag via the question_tags association

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

// Stays well below SQLite's bound parameter limit
const NAMES_PER_QUERY: usize = 500;

/// Source of per-tag question counts.
#[async_trait]
pub trait QuestionCountSource: Send + Sync {
    /// Returns `(tag name, question count)` for every requested name referenced
    /// by at least one question, in the order the names were given.
    async fn count_questions(&self, tag_names: &[String]) -> StorageResult<Vec<(String, i64)>>;
}

pub struct SqliteQuestionCounts {
    pool: SqlitePool,
}

impl SqliteQuestionCounts {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count_chunk(&self, names: &[String]) -> StorageResult<HashMap<String, i64>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT t.name AS name, COUNT(DISTINCT qt.question_id) AS qcnt
            FROM tags t
            JOIN question_tags qt ON qt.tag_id = t.id
            WHERE t.name IN ("#,
        );
        let mut separated = query.separated(", ");
        for name in names {
            separated.push_bind(name.as_str());
        }
        separated.push_unseparated(") GROUP BY t.id");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter()
            .map(|row| {
                let name: String = row.try_get("name").map_err(StorageError::Sqlx)?;
                let qcnt: i64 = row.try_get("qcnt").map_err(StorageError::Sqlx)?;
                Ok::<_, StorageError>((name, qcnt))
            })
            .collect()
    }
}

#[async_trait]
impl QuestionCountSource for SqliteQuestionCounts {
    async fn count_questions(&self, tag_names: &[String]) -> StorageResult<Vec<(String, i64)>> {
        debug!("Counting questions for {} tags", tag_names.len());

        let mut counts = HashMap::new();
        for chunk in tag_names.chunks(NAMES_PER_QUERY) {
            counts.extend(self.count_chunk(chunk).await?);
        }

        Ok(tag_names
            .iter()
            .filter_map(|name| counts.remove(name).map(|qcnt| (name.clone(), qcnt)))
            .collect())
    }
}
