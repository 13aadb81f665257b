// ABOUTME: HTTP API layer for the tag catalog providing REST endpoints and routing
// ABOUTME: Thin adapter rendering catalog results and mapping errors to status codes

use std::sync::Arc;

use axum::{routing::get, Router};

use qna_tags::TagCatalogService;

pub mod health;
pub mod response;
pub mod tags_handlers;

pub use response::ApiError;

/// Shared state for API handlers
#[derive(Clone)]
pub struct CatalogState {
    pub tag_catalog: Arc<TagCatalogService>,
}

impl CatalogState {
    pub fn new(tag_catalog: Arc<TagCatalogService>) -> Self {
        Self { tag_catalog }
    }
}

/// Creates the tags API router (nested under /tag)
pub fn create_tags_router() -> Router<CatalogState> {
    Router::new()
        .route(
            "/getTagsWithQuestionNumber",
            get(tags_handlers::get_tags_with_question_number),
        )
        .route(
            "/getTagByName/",
            get(tags_handlers::get_tag_by_name_missing),
        )
        .route(
            "/getTagByName/{tag_name}",
            get(tags_handlers::get_tag_by_name),
        )
}

/// Creates the full application router
pub fn create_router(state: CatalogState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/tag", create_tags_router())
        .with_state(state)
}
