use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawConfigFile {
    #[serde(default)]
    pub app: RawApp,
    #[serde(default)]
    pub database: RawDatabase,
    #[serde(default)]
    pub sqlite: RawSqlite,
    #[serde(default)]
    pub postgres: Option<RawPostgres>,
    #[serde(default)]
    pub logging: RawLogging,
    #[serde(default)]
    pub http: RawHttp,
    #[serde(default)]
    pub social: RawSocial,
    #[serde(default)]
    pub poster: RawPoster,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawApp {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawDatabase {
    pub dialect: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSqlite {
    #[serde(default = "default_sqlite_path")]
    pub path: String,
}

impl Default for RawSqlite {
    fn default() -> Self {
        Self {
            path: default_sqlite_path(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPostgres {
    #[serde(default = "default_pg_host")]
    pub host: String,
    #[serde(default = "default_pg_port")]
    pub port: u16,
    #[serde(default = "default_pg_database")]
    pub database: String,
    #[serde(default = "default_pg_user")]
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_pg_ssl_mode")]
    pub ssl_mode: String,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawLogging {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawHttp {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawSocial {
    pub api_base: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub token_secret: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawPoster {
    pub seed: Option<u64>,
}

pub(crate) fn default_sqlite_path() -> String {
    "lakes.sqlite".to_string()
}

fn default_pg_host() -> String {
    "localhost".to_string()
}

fn default_pg_port() -> u16 {
    5432
}

fn default_pg_database() -> String {
    "mondial".to_string()
}

fn default_pg_user() -> String {
    "postgres".to_string()
}

fn default_pg_ssl_mode() -> String {
    "prefer".to_string()
}
