use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qna_api::CatalogState;
use qna_tags::{SqliteQuestionCounts, SqliteTagRepository, TagCatalogService};

pub mod config;


use config::Config;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Wire the catalog service over the SQLite pool
pub fn build_catalog(pool: SqlitePool, config: &Config) -> CatalogState {
    let service = TagCatalogService::new(
        Arc::new(SqliteTagRepository::new(pool.clone())),
        Arc::new(SqliteQuestionCounts::new(pool)),
    )
    .with_query_timeout(config.query_timeout);

    CatalogState::new(Arc::new(service))
}

/// Router with CORS, request tracing and the request timeout applied
pub fn build_app(state: CatalogState, config: &Config) -> anyhow::Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Ok(qna_api::create_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let pool = qna_tags::db::connect(&config.database_path, config.db_max_connections)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    let app = build_app(build_catalog(pool.clone(), &config), &config)?;

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
