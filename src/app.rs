/*
 * Responsibility
 * - config load -> dependency construction -> Router assembly
 * - middleware application (request-id/trace/limits, CORS)
 * - axum::serve() startup
 */
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::{api, config::Config, middleware, repos::post_repo::PgPostStore, state::AppState};

pub async fn run() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let state = AppState::new(Arc::new(PgPostStore::new(pool)));

    let app = build_router(state);
    let app = middleware::http::apply(app);
    let app = middleware::cors::apply(app, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// The bare route table with state attached, without transport middleware.
/// Integration tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::v1::routes())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
