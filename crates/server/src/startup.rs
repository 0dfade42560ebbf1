use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{runtime, storage::JsonFileStore, SalonService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Service facade over the configured data file.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let store = JsonFileStore::new(&cfg.storage.data_file);
    AppState { salon: SalonService::new(Arc::new(store)) }
}

/// Full application for the given configuration.
pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(cfg), &cfg.storage.static_dir, build_cors())
}

/// Public entry: serve the app until Ctrl+C. Logging and configuration are
/// set up by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.storage.static_dir, &cfg.storage.data_file).await?;

    let app = build_app(&cfg);
    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, data_file = %cfg.storage.data_file, static_dir = %cfg.storage.static_dir, "starting salon api");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
