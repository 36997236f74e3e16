use axum::{http::StatusCode, response::IntoResponse};
use lakefeed_core::ports::repo::RepoError;
use serde::Serialize;

#[derive(Debug)]
pub struct ServerError {
    status: StatusCode,
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let code = status_code_to_string(status);
        Self {
            status,
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, axum::Json(body)).into_response()
    }
}

/// Store failures are logged in full; clients only see a generic message.
pub fn map_repo_error(err: RepoError, message: &str) -> ServerError {
    tracing::error!(error = %err, "{message}");
    ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn status_code_to_string(status: StatusCode) -> String {
    match status {
        StatusCode::BAD_REQUEST => "bad_request",
        StatusCode::NOT_FOUND => "not_found",
        StatusCode::INTERNAL_SERVER_ERROR => "internal_error",
        _ => status.canonical_reason().unwrap_or("error"),
    }
    .to_string()
}
