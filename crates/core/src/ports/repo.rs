//! Read-only access to the `lake` relation.
use crate::domain::lake::{Lake, LakeSummary};
use crate::domain::query::LakeQuery;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait LakeRepo: Send + Sync {
    /// Every lake with all of its columns.
    async fn all_lakes(&self) -> Result<Vec<Lake>, RepoError>;

    /// Filtered, ordered projection for the listing endpoint.
    async fn query_lakes(&self, query: &LakeQuery) -> Result<Vec<LakeSummary>, RepoError>;
}
