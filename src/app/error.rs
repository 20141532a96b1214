use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::utils::error::FaleproxyError;

/// Maps the error taxonomy onto the wire contract: a missing URL is
/// the caller's mistake (400); everything else surfaces as 500 with a
/// human-readable cause and no internal detail.
impl IntoResponse for FaleproxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            FaleproxyError::MissingUrl => StatusCode::BAD_REQUEST,
            FaleproxyError::InvalidUrl { .. }
            | FaleproxyError::Fetch(_)
            | FaleproxyError::Pattern(_)
            | FaleproxyError::InvalidConfigValue { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
