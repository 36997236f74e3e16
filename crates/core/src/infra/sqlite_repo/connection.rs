//! Opens the SQLite pool. The lake data is only ever read, so connections are
//! opened read-only and the file must already exist.
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::ports::repo::RepoError;

pub async fn create_pool(db_path: &Path, max_connections: u32) -> Result<SqlitePool, RepoError> {
    if !db_path.exists() {
        return Err(RepoError::Unavailable(format!(
            "sqlite database not found at {}",
            db_path.display()
        )));
    }

    let opts = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;

    info!(path = %db_path.display(), max_connections, "sqlite pool ready");
    Ok(pool)
}
