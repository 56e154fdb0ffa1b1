use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and which external services have credentials.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "rex-api",
        "analysis_configured": state.config.gemini_api_key.is_some(),
        "export_configured": state.config.html2pdf_api_key.is_some(),
    }))
}
