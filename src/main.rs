use anyhow::Context;
use dotenvy::dotenv;
use log::info;
use minutesserver::minutes;
use minutesserver::shared::config::AppConfig;
use minutesserver::shared::state::AppState;
use minutesserver::shared::utils::{create_conn, run_migrations};
use minutesserver::storage::{FileMinutesStorage, MinutesStorage};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let pool = create_conn(&config.database_url).context("failed to create database pool")?;
    run_migrations(&pool)?;

    let storage: Arc<dyn MinutesStorage> = Arc::new(
        FileMinutesStorage::new(&config.minutes_dir)
            .with_context(|| format!("failed to prepare minutes dir {}", config.minutes_dir))?,
    );

    let state = Arc::new(AppState {
        conn: pool,
        config: config.clone(),
        storage,
    });

    let app = axum::Router::new()
        .merge(minutes::configure())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
