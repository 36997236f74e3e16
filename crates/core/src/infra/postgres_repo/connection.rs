//! Helpers to create/configure the
//! Postgres pool.

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{
  PgConnectOptions,
  PgPoolOptions,
  PgSslMode
};
use tracing::info;

use crate::domain::config::PostgresConfig;
use crate::ports::repo::RepoError;

pub async fn create_pool(
  cfg: &PostgresConfig,
  max_connections: u32
) -> Result<PgPool, RepoError> {
  let opts = connect_options(cfg)?;

  let mut pool_opts =
    PgPoolOptions::new()
      .max_connections(max_connections);

  if let Some(schema) = cfg.schema.clone() {
    pool_opts = pool_opts
      .after_connect(set_search_path(schema));
  }

  let pool = pool_opts
    .connect_with(opts)
    .await?;

  info!(
    host = %cfg.host,
    database = %cfg.database,
    max_connections,
    "postgres pool ready"
  );

  Ok(pool)
}

#[allow(clippy::type_complexity)]
fn set_search_path(
  schema: String
) -> impl Fn(
  &mut sqlx::PgConnection,
  sqlx::pool::PoolConnectionMetadata
) -> std::pin::Pin<
  Box<
    dyn std::future::Future<
        Output = Result<
          (),
          sqlx::Error
        >
      > + Send
      + '_
  >
> {
  move |conn, _meta| {
    let schema_name = schema.clone();

    Box::pin(async move {
      let search_stmt = format!(
        "SET search_path TO {}",
        quote_ident(&schema_name)
      );

      sqlx::query(&search_stmt)
        .execute(&mut *conn)
        .await?;

      Ok(())
    })
  }
}

fn quote_ident(name: &str) -> String {
  format!(
    "\"{}\"",
    name.replace('"', "\"\"")
  )
}

fn connect_options(
  cfg: &PostgresConfig
) -> Result<PgConnectOptions, RepoError> {
  let ssl_mode =
    PgSslMode::from_str(&cfg.ssl_mode)
      .map_err(|e| {
        RepoError::Unavailable(format!(
          "invalid postgres ssl_mode \
           '{}': {e}",
          cfg.ssl_mode
        ))
      })?;

  let mut opts = PgConnectOptions::new()
    .host(&cfg.host)
    .port(cfg.port)
    .username(&cfg.user)
    .database(&cfg.database)
    .ssl_mode(ssl_mode);

  if !cfg.password.is_empty() {
    opts = opts.password(&cfg.password);
  }

  Ok(opts)
}
