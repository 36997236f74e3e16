use super::raw::{RawPostgres, RawSocial};
use super::ConfigError;
use crate::domain::config::{PostgresConfig, SocialCredentials, SqlDialect};

pub const ENV_API_KEY: &str = "LAKEFEED_API_KEY";
pub const ENV_API_SECRET: &str = "LAKEFEED_API_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "LAKEFEED_ACCESS_TOKEN";
pub const ENV_TOKEN_SECRET: &str = "LAKEFEED_TOKEN_SECRET";
pub const ENV_POSTGRES_PASSWORD: &str = "LAKEFEED_POSTGRES_PASSWORD";

pub(crate) fn parse_dialect(s: Option<&str>) -> Result<SqlDialect, ConfigError> {
    match s.map(|x| x.trim().to_ascii_lowercase()) {
        None => Ok(SqlDialect::Sqlite),
        Some(d) if d == "sqlite" => Ok(SqlDialect::Sqlite),
        Some(d) if d == "postgres" => Ok(SqlDialect::Postgres),
        Some(other) => Err(ConfigError::Invalid(format!(
            "invalid database.dialect '{other}', expected 'sqlite' or 'postgres'"
        ))),
    }
}

pub(crate) fn parse_postgres<E>(raw: RawPostgres, env: &E) -> Result<PostgresConfig, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let schema = match raw.schema.as_deref() {
        Some(s) => Some(validate_schema_name(s)?),
        None => None,
    };

    let password = non_empty(env(ENV_POSTGRES_PASSWORD))
        .or(raw.password)
        .unwrap_or_default();

    Ok(PostgresConfig {
        host: raw.host,
        port: raw.port,
        database: raw.database,
        user: raw.user,
        password,
        ssl_mode: raw.ssl_mode,
        schema,
    })
}

/// Environment values take precedence over the file.
pub(crate) fn parse_credentials<E>(raw: &RawSocial, env: &E) -> SocialCredentials
where
    E: Fn(&str) -> Option<String>,
{
    let pick = |key: &str, file: &Option<String>| {
        non_empty(env(key)).or_else(|| non_empty(file.clone()))
    };

    SocialCredentials {
        api_key: pick(ENV_API_KEY, &raw.api_key),
        api_secret: pick(ENV_API_SECRET, &raw.api_secret),
        access_token: pick(ENV_ACCESS_TOKEN, &raw.access_token),
        token_secret: pick(ENV_TOKEN_SECRET, &raw.token_secret),
    }
}

pub(crate) fn validate_schema_name(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("postgres schema cannot be empty".into()));
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::Invalid(format!(
            "invalid postgres schema '{trimmed}': only alphanumeric and '_' allowed"
        )));
    }

    Ok(trimmed.to_string())
}

pub(crate) fn normalize_log_level(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(level) if !level.is_empty() => level.to_ascii_lowercase(),
        _ => "info".to_string(),
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
