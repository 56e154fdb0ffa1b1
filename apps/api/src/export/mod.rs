//! Export client — converts one HTML document to PDF through the html2pdf.app API.
//!
//! Rendering options are fixed (A4, portrait, backgrounds printed).
//! `AppState` holds an `Arc<dyn DocumentExporter>`; tests swap in a fake.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

const PAGE_FORMAT: &str = "A4";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Renders `html` and returns the PDF bytes.
    async fn export(&self, html: &str) -> Result<Bytes, AppError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderRequest<'a> {
    html: &'a str,
    format: &'static str,
    print_background: bool,
    landscape: bool,
}

impl<'a> RenderRequest<'a> {
    fn a4_portrait(html: &'a str) -> Self {
        Self {
            html,
            format: PAGE_FORMAT,
            print_background: true,
            landscape: false,
        }
    }
}

/// html2pdf.app client. One POST per document, no retries.
#[derive(Clone)]
pub struct Html2PdfClient {
    http: Arc<OnceLock<Client>>,
    api_key: Option<String>,
    endpoint: String,
}

impl Html2PdfClient {
    pub fn new(api_key: Option<String>, endpoint: String) -> Self {
        Self {
            http: Arc::new(OnceLock::new()),
            api_key,
            endpoint,
        }
    }

    fn http(&self) -> Result<&Client, AppError> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {e}")))?;
        Ok(self.http.get_or_init(|| client))
    }
}

#[async_trait]
impl DocumentExporter for Html2PdfClient {
    async fn export(&self, html: &str) -> Result<Bytes, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("HTML2PDF_API_KEY is not configured".to_string()))?;

        let response = self
            .http()?
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-Api-Key", api_key)
            .json(&RenderRequest::a4_portrait(html))
            .send()
            .await
            .map_err(|e| AppError::ExportService {
                status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExportService {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let pdf = response.bytes().await.map_err(|e| AppError::ExportService {
            status: status.as_u16(),
            reason: format!("failed to read PDF body: {e}"),
        })?;

        debug!("Exported document: {} bytes of HTML → {} bytes of PDF", html.len(), pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_stub;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};

    const FAKE_PDF: &[u8] = b"%PDF-1.4\n%fake\n";

    #[test]
    fn test_request_body_is_fixed_a4_portrait() {
        let body = serde_json::to_value(RenderRequest::a4_portrait("<p>x</p>")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "html": "<p>x</p>",
                "format": "A4",
                "printBackground": true,
                "landscape": false
            })
        );
    }

    #[tokio::test]
    async fn test_success_returns_pdf_bytes() {
        let router = Router::new().route(
            "/v1/generate",
            post(|headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(headers["x-api-key"], "pdf-key");
                assert_eq!(body["format"], "A4");
                FAKE_PDF
            }),
        );
        let base = spawn_stub(router).await;
        let client = Html2PdfClient::new(Some("pdf-key".to_string()), format!("{base}/v1/generate"));

        let pdf = client.export("<html></html>").await.unwrap();
        assert!(!pdf.is_empty());
        assert_eq!(&pdf[..], FAKE_PDF);
    }

    #[tokio::test]
    async fn test_server_error_is_export_error() {
        let router = Router::new().route(
            "/v1/generate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_stub(router).await;
        let client = Html2PdfClient::new(Some("pdf-key".to_string()), format!("{base}/v1/generate"));

        match client.export("<html></html>").await {
            Err(AppError::ExportService { status, reason }) => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected ExportService error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = Html2PdfClient::new(None, "http://127.0.0.1:9/v1/generate".to_string());
        let err = client.export("<html></html>").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
