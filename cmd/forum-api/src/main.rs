//! Forum API entry point: loads configuration, connects the stores and
//! wires the use cases into the router. All wiring is explicit constructor
//! calls; there is no runtime registry.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use api_adapters::{build_router, AppState};
use auth_adapters::JwtTokenManager;
use configs::AppConfig;
use storage_adapters::postgres::{PostgresCommentRepository, PostgresThreadRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(config.database.url.expose_secret())
        .await
        .context("failed to connect to Postgres")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let thread_repository = Arc::new(PostgresThreadRepository::new(pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pool));
    let token_manager = Arc::new(JwtTokenManager::new(
        config.auth.access_token_key.expose_secret(),
    ));

    let state = Arc::new(AppState::new(
        thread_repository,
        comment_repository,
        token_manager,
    ));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "forum-api listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
