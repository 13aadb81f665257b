// ABOUTME: Error-to-response mapping for the tag endpoints
// ABOUTME: Renders catalog failures as plain-text bodies with their status codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use qna_tags::{AggregationError, TagError};

/// Failures surfaced by the tag handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error when fetching tag count map: {0}")]
    TagCountMap(#[from] AggregationError),

    #[error("Error when fetching tag {tag_name:?}: {source}")]
    TagLookup { tag_name: String, source: TagError },
}

impl ApiError {
    pub fn tag_lookup(tag_name: impl Into<String>, source: TagError) -> Self {
        ApiError::TagLookup {
            tag_name: tag_name.into(),
            source,
        }
    }

    fn to_status_and_body(&self) -> (StatusCode, String) {
        match self {
            ApiError::TagCountMap(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::TagLookup { tag_name, source } => match source {
                TagError::InvalidInput => {
                    (StatusCode::BAD_REQUEST, "Tag name is required".to_string())
                }
                TagError::NotFound => (
                    StatusCode::NOT_FOUND,
                    format!("Tag with name \"{}\" not found", tag_name),
                ),
                // Cause stays in the logs
                TagError::Lookup(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error when fetching tag: Error fetching tag".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_status_and_body();

        if status.is_server_error() {
            error!("{}", self);
        }

        (status, body).into_response()
    }
}
