//! Axum route handlers for the REX API.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::payload::FeedbackPayload;
use crate::pipeline::{render_documents, RenderedDocument, RexPreview};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub filename: String,
    pub html: String,
    pub pdf_base64: String,
    pub size_bytes: usize,
}

impl From<RenderedDocument> for DocumentResponse {
    fn from(doc: RenderedDocument) -> Self {
        Self {
            pdf_base64: STANDARD.encode(&doc.buffer),
            size_bytes: doc.buffer.len(),
            filename: doc.filename,
            html: doc.html,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub collaborateur: DocumentResponse,
    pub manager: DocumentResponse,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub analysis: AnalysisResult,
    pub payload: FeedbackPayload,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub collaborateur_html: String,
    pub manager_html: String,
}

fn validate_identity(payload: &FeedbackPayload) -> Result<(), AppError> {
    let missing = payload.missing_identity_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "required fields cannot be empty: {}",
            missing.join(", ")
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/rex/reports
///
/// Full pipeline: analysis → both documents → both PDFs.
pub async fn handle_create_report(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackPayload>,
) -> Result<Json<ReportResponse>, AppError> {
    validate_identity(&payload)?;

    let report = state.pipeline.run(&payload).await?;

    Ok(Json(ReportResponse {
        report_id: report.report_id,
        collaborateur: report.collaborateur.into(),
        manager: report.manager.into(),
    }))
}

/// POST /api/v1/rex/preview
///
/// Analysis and HTML rendering only. Does not need the rendering-service key.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackPayload>,
) -> Result<Json<RexPreview>, AppError> {
    validate_identity(&payload)?;
    Ok(Json(state.pipeline.preview(&payload).await?))
}

/// POST /api/v1/rex/render
///
/// Re-renders both documents from a previously obtained analysis. No external calls.
pub async fn handle_render(
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    validate_identity(&request.payload)?;
    let (collaborateur_html, manager_html) =
        render_documents(&request.analysis, &request.payload, Utc::now());
    Ok(Json(RenderResponse {
        collaborateur_html,
        manager_html,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    use crate::test_support::alice_payload;

    #[test]
    fn test_document_response_encodes_pdf() {
        let doc = RenderedDocument {
            html: "<html></html>".to_string(),
            filename: "REX_Synthese_Alice_Martin_1.pdf".to_string(),
            buffer: Bytes::from_static(b"%PDF"),
        };
        let response = DocumentResponse::from(doc);
        assert_eq!(response.pdf_base64, "JVBERg==");
        assert_eq!(response.size_bytes, 4);
    }

    #[test]
    fn test_blank_identity_is_rejected() {
        let mut payload = alice_payload();
        payload.nom = "  ".to_string();
        let err = validate_identity(&payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("nom")));
    }
}
