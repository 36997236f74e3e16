//! Database wiring: creates the repository implementation for the configured
//! SQL dialect.
use std::sync::Arc;

use crate::domain::config::{AppConfig, SqlDialect};
use crate::infra::{postgres_repo::PostgresRepo, sqlite_repo::SqliteRepo};
use crate::ports::repo::{LakeRepo, RepoError};

pub async fn create_repo(cfg: &AppConfig) -> Result<Arc<dyn LakeRepo>, RepoError> {
    match cfg.dialect {
        SqlDialect::Sqlite => Ok(Arc::new(
            SqliteRepo::new(&cfg.sqlite_path, cfg.max_connections).await?,
        )),
        SqlDialect::Postgres => {
            let pg = cfg.postgres.as_ref().ok_or_else(|| {
                RepoError::Unavailable("postgres section missing".into())
            })?;
            Ok(Arc::new(PostgresRepo::new(pg, cfg.max_connections).await?))
        }
    }
}
