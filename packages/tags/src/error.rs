// ABOUTME: Error types for the tag catalog
// ABOUTME: Separates storage failures from lookup and aggregation outcomes

use std::time::Duration;
use thiserror::Error;

/// Message carried by `TagError::NotFound`
pub const NOT_FOUND_MESSAGE: &str = "No Element Found";

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of a failed single-tag lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Tag name is required")]
    InvalidInput,
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("{0}")]
    Lookup(String),
}

impl TagError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TagError::NotFound)
    }
}

impl From<StorageError> for TagError {
    fn from(err: StorageError) -> Self {
        TagError::Lookup(err.to_string())
    }
}

/// Failure while building the tag count map
#[derive(Error, Debug)]
pub enum AggregationError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Error while fetching tag count map: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_sentinel() {
        assert_eq!(TagError::NotFound.to_string(), NOT_FOUND_MESSAGE);
        assert!(TagError::NotFound.is_not_found());
        assert!(!TagError::InvalidInput.is_not_found());
    }

    #[test]
    fn test_storage_error_becomes_lookup() {
        let err: TagError = StorageError::Timeout(Duration::from_secs(2)).into();
        assert_eq!(err, TagError::Lookup("Query timed out after 2s".to_string()));
    }

    #[test]
    fn test_aggregation_storage_is_transparent() {
        let err: AggregationError = StorageError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(
            err.to_string(),
            StorageError::Sqlx(sqlx::Error::PoolTimedOut).to_string()
        );
    }
}
