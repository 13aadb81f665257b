// ABOUTME: Database connection management and schema setup
// ABOUTME: Opens the SQLite pool and runs the embedded migrations

use std::path::Path;
use std::time::Duration;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Open (creating if needed) the SQLite database at `database_path`.
pub async fn connect(database_path: &Path, max_connections: u32) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let database_url = format!("sqlite://{}?mode=rwc", database_path.display());

    debug!("Connecting to database: {}", database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    // Configure SQLite settings
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    migrate(&pool).await?;

    Ok(pool)
}

/// Run the embedded schema migrations
pub async fn migrate(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    debug!("Database migrations applied");
    Ok(())
}
