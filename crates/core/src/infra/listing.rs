//! Dialect-independent pieces of the lake listing query.
use sqlx::{Database, QueryBuilder};

use crate::domain::lake::LakeSummary;
use crate::domain::query::LakeQuery;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LakeSummaryRecord {
    pub name: String,
    pub area: Option<f64>,
    pub elevation: Option<f64>,
    #[sqlx(rename = "type")]
    pub lake_type: Option<String>,
}

impl From<LakeSummaryRecord> for LakeSummary {
    fn from(r: LakeSummaryRecord) -> Self {
        LakeSummary::new(r.name, r.area, r.elevation, r.lake_type)
    }
}

/// Appends the `type` predicate (as a bound parameter) and the ordering.
/// The sort column comes from a closed enum, never from request text.
pub(crate) fn push_filter_and_order<'args, DB>(
    builder: &mut QueryBuilder<'args, DB>,
    query: &LakeQuery,
) where
    DB: Database,
    String: sqlx::Encode<'args, DB> + sqlx::Type<DB>,
{
    if let Some(lake_type) = &query.lake_type {
        builder.push(" WHERE lake.type = ");
        builder.push_bind(lake_type.clone());
    }

    builder.push(" ORDER BY ");
    builder.push(query.sort.order_clause());
}
