// ABOUTME: HTTP request handlers for the tag catalog
// ABOUTME: Tag question counts and single-tag lookup by name

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::info;

use crate::response::ApiError;
use crate::CatalogState;

/// List tags with the number of questions referencing each
pub async fn get_tags_with_question_number(State(state): State<CatalogState>) -> impl IntoResponse {
    info!("Fetching tag count map");

    match state.tag_catalog.get_tag_count_map().await {
        Ok(map) => (StatusCode::OK, ResponseJson(map)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get a single tag by its exact name
pub async fn get_tag_by_name(
    State(state): State<CatalogState>,
    Path(tag_name): Path<String>,
) -> impl IntoResponse {
    info!("Getting tag by name: {}", tag_name);

    match state.tag_catalog.get_tag_by_name(&tag_name).await {
        Ok(tag) => (StatusCode::OK, ResponseJson(tag)).into_response(),
        Err(e) => ApiError::tag_lookup(tag_name, e).into_response(),
    }
}

/// `/getTagByName/` with no name segment
pub async fn get_tag_by_name_missing(State(state): State<CatalogState>) -> impl IntoResponse {
    get_tag_by_name(State(state), Path(String::new())).await
}
