use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::app::state::AppState;
use crate::utils::error::{FaleproxyError, Result};

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub success: bool,
    pub content: String,
    pub title: String,
    #[serde(rename = "originalUrl")]
    pub original_url: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /fetch: fetch the requested page and return the rewritten copy.
pub async fn fetch_page(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchRequest>,
) -> Result<Json<FetchResponse>> {
    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(FaleproxyError::MissingUrl)?;

    let outcome = state.engine.run(url).await?;

    Ok(Json(FetchResponse {
        success: true,
        content: outcome.html,
        title: outcome.title,
        original_url: outcome.original_url,
    }))
}
