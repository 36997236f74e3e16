//! Normalized runtime configuration shared by both binaries.
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Sqlite,
    Postgres,
}

#[derive(Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: String,
    pub schema: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// The four OAuth 1.0a secrets. Any of them may be missing until a publisher
/// is actually built.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SocialCredentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub token_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SocialConfig {
    pub api_base: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub credentials: SocialCredentials,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub dialect: SqlDialect,
    pub max_connections: u32,
    pub sqlite_path: PathBuf,
    pub postgres: Option<PostgresConfig>,
    pub log_level: String,
    pub http: HttpConfig,
    pub social: SocialConfig,
    pub seed: Option<u64>,
}

fn redact(v: &Option<String>) -> &'static str {
    match v {
        Some(_) => "<redacted>",
        None => "<unset>",
    }
}

impl fmt::Debug for SocialCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocialCredentials")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &redact(&self.api_secret))
            .field("access_token", &redact(&self.access_token))
            .field("token_secret", &redact(&self.token_secret))
            .finish()
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .field("schema", &self.schema)
            .finish()
    }
}
