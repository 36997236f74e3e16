//! In-memory SQLite fixtures for tests in this and dependent crates.
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::domain::lake::Lake;
use crate::infra::sqlite_repo::SqliteRepo;

const CREATE_LAKE: &str = "CREATE TABLE lake (\
     name TEXT NOT NULL PRIMARY KEY, \
     area NUMERIC, depth NUMERIC, elevation NUMERIC, \
     type TEXT, river TEXT)";

/// A single-connection pool: every `:memory:` connection is its own database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    sqlx::query(CREATE_LAKE)
        .execute(&pool)
        .await
        .expect("create lake table");
    pool
}

pub async fn insert_lake(pool: &SqlitePool, lake: &Lake) {
    sqlx::query(
        "INSERT INTO lake (name, area, depth, elevation, type, river) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&lake.name)
    .bind(lake.area)
    .bind(lake.depth)
    .bind(lake.elevation)
    .bind(&lake.lake_type)
    .bind(&lake.river)
    .execute(pool)
    .await
    .expect("insert lake");
}

pub async fn memory_repo(lakes: &[Lake]) -> SqliteRepo {
    let pool = memory_pool().await;
    for lake in lakes {
        insert_lake(&pool, lake).await;
    }
    SqliteRepo::from_pool(pool)
}

pub fn lake(
    name: &str,
    area: Option<f64>,
    depth: Option<f64>,
    elevation: Option<f64>,
    lake_type: Option<&str>,
    river: Option<&str>,
) -> Lake {
    Lake {
        name: name.to_string(),
        area,
        depth,
        elevation,
        lake_type: lake_type.map(str::to_string),
        river: river.map(str::to_string),
    }
}

pub fn tahoe() -> Lake {
    lake(
        "Tahoe",
        Some(495.0),
        Some(501.0),
        Some(1897.0),
        Some("Freshwater"),
        None,
    )
}
