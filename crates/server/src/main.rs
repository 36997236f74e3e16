mod app_state;
mod errors;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::path::PathBuf;

use lakefeed_core::infra::{
    config::ConfigLoader,
    database::create_repo,
    logging::{init_logging, BootError},
};

use app_state::AppState;

/// Workspace-root-relative, matching the poster's `POSTER_CONFIG_PATH` default.
const DEFAULT_CONFIG_PATH: &str = "crates/server/res/config.toml";

fn config_path() -> PathBuf {
    std::env::var_os("SERVER_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[tokio::main]
async fn main() -> Result<(), BootError> {
    let config = ConfigLoader::load(&config_path())
        .await
        .map_err(|e| BootError::Fatal(e.to_string()))?;
    init_logging(&config.log_level, "lakefeed_server");

    tracing::info!(app = %config.name, dialect = ?config.dialect, "server config loaded");
    tracing::info!(host = %config.http.host, port = config.http.port, "server http bind");

    let repo = create_repo(&config)
        .await
        .map_err(|e| BootError::Fatal(e.to_string()))?;

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| BootError::Fatal(format!("invalid http bind: {e}")))?;

    let app = handlers::router(AppState { repo });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BootError::Fatal(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| BootError::Fatal(format!("http server error: {e}")))?;

    Ok(())
}
