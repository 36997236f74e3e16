//! SQLite-backed `LakeRepo`.
mod connection;

use std::path::Path;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::listing::{push_filter_and_order, LakeSummaryRecord};
use crate::domain::lake::{Lake, LakeSummary};
use crate::domain::query::LakeQuery;
use crate::ports::repo::{LakeRepo, RepoError};

pub use connection::create_pool;

// Numeric columns may hold integers or reals depending on how the data was
// imported; casting keeps decoding uniform.
const ALL_LAKES_SQL: &str = "SELECT lake.name, CAST(lake.area AS REAL) AS area, \
     CAST(lake.depth AS REAL) AS depth, CAST(lake.elevation AS REAL) AS elevation, \
     lake.type AS type, lake.river AS river FROM lake";

const LISTING_SELECT: &str = "SELECT lake.name, CAST(lake.area AS REAL) AS area, \
     CAST(lake.elevation AS REAL) AS elevation, lake.type AS type FROM lake";

pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    pub async fn new(db_path: &Path, max_connections: u32) -> Result<Self, RepoError> {
        let pool = create_pool(db_path, max_connections).await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LakeRepo for SqliteRepo {
    async fn all_lakes(&self) -> Result<Vec<Lake>, RepoError> {
        let lakes = sqlx::query_as::<_, Lake>(ALL_LAKES_SQL)
            .fetch_all(&self.pool)
            .await?;
        debug!(count = lakes.len(), "loaded lakes");
        Ok(lakes)
    }

    async fn query_lakes(&self, query: &LakeQuery) -> Result<Vec<LakeSummary>, RepoError> {
        let mut builder = QueryBuilder::<Sqlite>::new(LISTING_SELECT);
        push_filter_and_order(&mut builder, query);

        let rows = builder
            .build_query_as::<LakeSummaryRecord>()
            .fetch_all(&self.pool)
            .await?;
        debug!(rows = rows.len(), sort = %query.sort.column(), "lake listing");

        Ok(rows.into_iter().map(LakeSummary::from).collect())
    }
}
