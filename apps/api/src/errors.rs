use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Every pipeline stage fails fast with one of these; nothing is downgraded or retried.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A service credential is missing at call time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The analysis call failed, or its output could not be parsed.
    #[error("Upstream service error: {0}")]
    UpstreamService(String),

    /// The rendering service answered with a non-success status.
    #[error("Export service error: {status} {reason}")]
    ExportService { status: u16, reason: String },

    /// The model answered, but the result is structurally unusable.
    #[error("Malformed analysis: {0}")]
    MalformedAnalysis(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::UpstreamService(_) => "UPSTREAM_SERVICE_ERROR",
            AppError::ExportService { .. } => "EXPORT_SERVICE_ERROR",
            AppError::MalformedAnalysis(_) => "MALFORMED_ANALYSIS",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamService(_)
            | AppError::ExportService { .. }
            | AppError::MalformedAnalysis(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other => {
                tracing::error!(code = other.code(), "{other}");
                other.to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
