//! Postgres-backed `LakeRepo`.
mod connection;

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use super::listing::{push_filter_and_order, LakeSummaryRecord};
use crate::domain::config::PostgresConfig;
use crate::domain::lake::{Lake, LakeSummary};
use crate::domain::query::LakeQuery;
use crate::ports::repo::{LakeRepo, RepoError};

pub use connection::create_pool;

// NUMERIC columns are read as float8 so they decode into f64.
const ALL_LAKES_SQL: &str = "SELECT lake.name, CAST(lake.area AS DOUBLE PRECISION) AS area, \
     CAST(lake.depth AS DOUBLE PRECISION) AS depth, \
     CAST(lake.elevation AS DOUBLE PRECISION) AS elevation, \
     CAST(lake.type AS TEXT) AS type, CAST(lake.river AS TEXT) AS river FROM lake";

const LISTING_SELECT: &str = "SELECT lake.name, CAST(lake.area AS DOUBLE PRECISION) AS area, \
     CAST(lake.elevation AS DOUBLE PRECISION) AS elevation, CAST(lake.type AS TEXT) AS type \
     FROM lake";

pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub async fn new(cfg: &PostgresConfig, max_connections: u32) -> Result<Self, RepoError> {
        let pool = create_pool(cfg, max_connections).await?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl LakeRepo for PostgresRepo {
    async fn all_lakes(&self) -> Result<Vec<Lake>, RepoError> {
        let lakes = sqlx::query_as::<_, Lake>(ALL_LAKES_SQL)
            .fetch_all(&self.pool)
            .await?;
        debug!(count = lakes.len(), "loaded lakes");
        Ok(lakes)
    }

    async fn query_lakes(&self, query: &LakeQuery) -> Result<Vec<LakeSummary>, RepoError> {
        let mut builder = QueryBuilder::<Postgres>::new(LISTING_SELECT);
        push_filter_and_order(&mut builder, query);

        let rows = builder
            .build_query_as::<LakeSummaryRecord>()
            .fetch_all(&self.pool)
            .await?;
        debug!(rows = rows.len(), sort = %query.sort.column(), "lake listing");

        Ok(rows.into_iter().map(LakeSummary::from).collect())
    }
}
