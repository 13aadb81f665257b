// ABOUTME: Integration tests for the tag endpoints over a SQLite catalog
// ABOUTME: Exercises the full router, service and storage stack end to end

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use qna_api::{create_router, CatalogState};
use qna_tags::{db, SqliteQuestionCounts, SqliteTagRepository, TagCatalogService};
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();

    sqlx::query(
        "INSERT INTO tags (name, description) VALUES
            ('exampleTag', 'This is a test tag'),
            ('rust', NULL),
            ('errorTag', 'never reached')",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO questions (title, text) VALUES ('q1', 'a'), ('q2', 'b')")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO question_tags (question_id, tag_id) VALUES
            (1, (SELECT id FROM tags WHERE name = 'rust')),
            (2, (SELECT id FROM tags WHERE name = 'rust')),
            (2, (SELECT id FROM tags WHERE name = 'exampleTag'))",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

fn app(pool: &SqlitePool) -> Router {
    let service = TagCatalogService::new(
        Arc::new(SqliteTagRepository::new(pool.clone())),
        Arc::new(SqliteQuestionCounts::new(pool.clone())),
    );
    create_router(CatalogState::new(Arc::new(service)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_tag_lookup_end_to_end() {
    let pool = setup_test_db().await;

    let (status, body) = get(app(&pool), "/tag/getTagByName/exampleTag").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        json!({"name": "exampleTag", "description": "This is a test tag"})
    );

    let (status, body) = get(app(&pool), "/tag/getTagByName/nonExistentTag").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"Tag with name "nonExistentTag" not found"#);
}

#[tokio::test]
async fn test_tag_lookup_storage_failure_is_not_not_found() {
    let pool = setup_test_db().await;
    let app = app(&pool);
    pool.close().await;

    let (status, body) = get(app, "/tag/getTagByName/errorTag").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error when fetching tag: Error fetching tag");
}

#[tokio::test]
async fn test_tags_with_question_number_end_to_end() {
    let pool = setup_test_db().await;

    let (status, body) = get(app(&pool), "/tag/getTagsWithQuestionNumber").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        json!([
            {"name": "exampleTag", "qcnt": 1},
            {"name": "rust", "qcnt": 2}
        ])
    );
}

#[tokio::test]
async fn test_tags_with_question_number_storage_failure() {
    let pool = setup_test_db().await;
    let app = app(&pool);
    pool.close().await;

    let (status, body) = get(app, "/tag/getTagsWithQuestionNumber").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error when fetching tag count map: "));
}

#[tokio::test]
async fn test_health_endpoint() {
    let pool = setup_test_db().await;

    let (status, _) = get(app(&pool), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route() {
    let pool = setup_test_db().await;

    let (status, _) = get(app(&pool), "/tag/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
