mod docs;
mod health;
mod lakes;

use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(docs::openapi))
        .route("/lakes", get(lakes::list_lakes))
        .with_state(state)
}
