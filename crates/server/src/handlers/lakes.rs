use axum::extract::{Query, State};
use axum::Json;
use lakefeed_core::domain::lake::LakeSummary;
use lakefeed_core::domain::query::LakeQuery;
use tracing::debug;

use crate::app_state::AppState;
use crate::errors::{map_repo_error, ServerError};
use crate::models::LakeListQuery;

/// `GET /lakes?type=..&sort=..`. An unrecognized `sort` lists by name.
/// Parameters arrive as raw pairs so a repeated key cannot reject the request.
pub async fn list_lakes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<LakeSummary>>, ServerError> {
    let params = LakeListQuery::from_pairs(pairs);
    let query = LakeQuery::from_params(params.lake_type.as_deref(), params.sort.as_deref());
    debug!(lake_type = ?query.lake_type, sort = ?query.sort, "list lakes");

    let rows = state
        .repo
        .query_lakes(&query)
        .await
        .map_err(|e| map_repo_error(e, "lakes query failed"))?;

    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use lakefeed_core::domain::lake::{Lake, LakeSummary};
    use lakefeed_core::domain::query::LakeQuery;
    use lakefeed_core::ports::repo::{LakeRepo, RepoError};
    use lakefeed_core::testing::{lake, memory_repo, tahoe};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app_state::AppState;
    use crate::handlers::router;

    async fn app(lakes: &[Lake]) -> Router {
        let repo = memory_repo(lakes).await;
        router(AppState {
            repo: Arc::new(repo),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample() -> Vec<Lake> {
        vec![
            tahoe(),
            lake("Baikal", Some(31500.0), Some(1637.0), Some(456.0), Some("Freshwater"), Some("Angara")),
            lake("Caspian", Some(371000.0), Some(1025.0), Some(-28.0), Some("Salt"), None),
            lake("Ohrid", Some(358.0), Some(288.0), None, Some("Freshwater"), Some("Black Drin")),
            lake("Mystery", None, None, None, None, None),
        ]
    }

    fn names(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn tahoe_by_area() {
        let (status, body) = get(app(&[tahoe()]).await, "/lakes?sort=area").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"name": "Tahoe", "area": 495, "elevation": 1897, "type": "Freshwater"}])
        );
    }

    #[tokio::test]
    async fn absent_values_are_explicit_nulls() {
        let only_area = lake("Pond", Some(100.0), None, None, None, None);
        let (_, body) = get(app(&[only_area]).await, "/lakes").await;
        assert_eq!(
            body,
            json!([{"name": "Pond", "area": 100, "elevation": null, "type": null}])
        );
    }

    #[tokio::test]
    async fn default_and_unknown_sort_use_name_ascending() {
        let expected = ["Baikal", "Caspian", "Mystery", "Ohrid", "Tahoe"];
        for uri in ["/lakes", "/lakes?sort=depth", "/lakes?sort=", "/lakes?sort=name%20DESC"] {
            let (status, body) = get(app(&sample()).await, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(names(&body), expected, "{uri}");
        }
    }

    #[tokio::test]
    async fn area_sort_is_descending_with_nulls_last() {
        let (_, body) = get(app(&sample()).await, "/lakes?sort=area").await;
        assert_eq!(names(&body), ["Caspian", "Baikal", "Tahoe", "Ohrid", "Mystery"]);
        assert_eq!(body[4]["area"], Value::Null);
    }

    #[tokio::test]
    async fn elevation_sort_is_descending_with_nulls_last() {
        let (_, body) = get(app(&sample()).await, "/lakes?sort=elevation").await;
        assert_eq!(names(&body), ["Tahoe", "Baikal", "Caspian", "Mystery", "Ohrid"]);
        let elevations: Vec<Value> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["elevation"].clone())
            .collect();
        assert_eq!(elevations, [json!(1897), json!(456), json!(-28), Value::Null, Value::Null]);
    }

    #[tokio::test]
    async fn type_filter_matches_exactly() {
        let (_, body) = get(app(&sample()).await, "/lakes?type=Freshwater&sort=area").await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r["type"] == "Freshwater"));
        assert_eq!(names(&body), ["Baikal", "Tahoe", "Ohrid"]);
    }

    #[tokio::test]
    async fn repeated_keys_keep_the_first_value() {
        let (status, body) = get(app(&sample()).await, "/lakes?sort=area&sort=name").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Caspian", "Baikal", "Tahoe", "Ohrid", "Mystery"]);

        let (status, body) =
            get(app(&sample()).await, "/lakes?type=Freshwater&type=Salt&sort=area").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Baikal", "Tahoe", "Ohrid"]);
    }

    #[tokio::test]
    async fn empty_type_means_no_filter() {
        let (_, body) = get(app(&sample()).await, "/lakes?type=").await;
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unmatched_type_is_empty_list() {
        let (status, body) = get(app(&sample()).await, "/lakes?type=Glacial").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    struct BrokenRepo;

    #[async_trait::async_trait]
    impl LakeRepo for BrokenRepo {
        async fn all_lakes(&self) -> Result<Vec<Lake>, RepoError> {
            Err(RepoError::Unavailable("down".into()))
        }

        async fn query_lakes(&self, _query: &LakeQuery) -> Result<Vec<LakeSummary>, RepoError> {
            Err(RepoError::Unavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn store_failure_is_a_server_error() {
        let app = router(AppState {
            repo: Arc::new(BrokenRepo),
        });
        let (status, body) = get(app, "/lakes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "lakes query failed");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let resp = app(&[])
            .await
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn openapi_document_is_json() {
        let (status, body) = get(app(&[]).await, "/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/lakes"]["get"].is_object());
    }
}
