use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum BootError {
    #[error("fatal: {0}")]
    Fatal(String),
}

/// Installs the global fmt subscriber. `level` comes from config; `RUST_LOG`
/// still wins when set.
pub fn init_logging(level: &str, binary: &str) {
    let default = format!("{level},{binary}={level},lakefeed_core={level},sqlx=warn,reqwest=warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
