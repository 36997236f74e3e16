//! Loads `config.toml`, validates it against the bundled JSON schema and
//! normalizes it into `AppConfig`. Secrets may be supplied through the
//! environment instead of the file.
mod parse;
mod raw;
mod schema;

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::config::{AppConfig, HttpConfig, SocialConfig, SqlDialect};

use parse::{normalize_log_level, parse_credentials, parse_dialect, parse_postgres};
use raw::RawConfigFile;
use schema::{validate_toml, CONFIG_SCHEMA};

pub use parse::{
    ENV_ACCESS_TOKEN, ENV_API_KEY, ENV_API_SECRET, ENV_POSTGRES_PASSWORD, ENV_TOKEN_SECRET,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_API_BASE: &str = "https://api.twitter.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads and normalizes the file at `config_path`, consulting the process
    /// environment for secrets.
    pub async fn load(config_path: &Path) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(config_path)
            .await
            .map_err(|source| ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            })?;

        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::from_toml_str(
            &content,
            &config_path.display().to_string(),
            &base_dir,
            |key| std::env::var(key).ok(),
        )
    }

    /// Parses config text. `base_dir` anchors relative sqlite paths; `env`
    /// resolves environment overrides.
    pub fn from_toml_str<E>(
        content: &str,
        name: &str,
        base_dir: &Path,
        env: E,
    ) -> Result<AppConfig, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        validate_toml(CONFIG_SCHEMA, content, name)?;

        let raw: RawConfigFile = toml::from_str(content)?;

        let dialect = parse_dialect(raw.database.dialect.as_deref())?;

        let postgres = match (dialect, raw.postgres) {
            (_, Some(pg)) => Some(parse_postgres(pg, &env)?),
            (SqlDialect::Postgres, None) => {
                return Err(ConfigError::Invalid(
                    "database.dialect is 'postgres' but [postgres] section is missing".into(),
                ));
            }
            (SqlDialect::Sqlite, None) => None,
        };

        let sqlite_path = resolve_sqlite_path(base_dir, &raw.sqlite.path);

        let credentials = parse_credentials(&raw.social, &env);

        Ok(AppConfig {
            name: raw.app.name.unwrap_or_else(|| "lakefeed".to_string()),
            dialect,
            max_connections: raw
                .database
                .max_connections
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            sqlite_path,
            postgres,
            log_level: normalize_log_level(raw.logging.level.as_deref()),
            http: HttpConfig {
                host: raw
                    .http
                    .host
                    .unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
                port: raw.http.port.unwrap_or(DEFAULT_HTTP_PORT),
            },
            social: SocialConfig {
                api_base: raw
                    .social
                    .api_base
                    .map(|b| b.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                user_agent: raw
                    .social
                    .user_agent
                    .unwrap_or_else(|| format!("lakefeed/{}", env!("CARGO_PKG_VERSION"))),
                timeout_seconds: raw
                    .social
                    .timeout_seconds
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                credentials,
            },
            seed: raw.poster.seed,
        })
    }
}

fn resolve_sqlite_path(base_dir: &Path, configured: &str) -> PathBuf {
    let configured = configured.trim();
    if configured.is_empty() {
        return base_dir.join(raw::default_sqlite_path());
    }
    let p = Path::new(configured);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}
