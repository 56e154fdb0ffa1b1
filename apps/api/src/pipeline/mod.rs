//! REX report pipeline — orchestrates one feedback submission end to end.
//!
//! Flow: analyze → render collaborator + manager HTML → export both concurrently
//!       → two named PDF artifacts sharing one timestamp.
//!
//! Atomic at the document-pair level: if either export fails, no artifact is returned.

pub mod handlers;

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::Analyzer;
use crate::errors::AppError;
use crate::export::DocumentExporter;
use crate::models::analysis::AnalysisResult;
use crate::models::payload::FeedbackPayload;
use crate::render::{render_collaborator_html, render_manager_html};

/// One generated document: its HTML source, download name and PDF bytes.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub html: String,
    pub filename: String,
    pub buffer: Bytes,
}

/// Both documents produced for one submission.
#[derive(Debug, Clone)]
pub struct RexReport {
    pub report_id: Uuid,
    pub collaborateur: RenderedDocument,
    pub manager: RenderedDocument,
}

/// Analysis plus both HTML documents, without export.
#[derive(Debug, Clone, Serialize)]
pub struct RexPreview {
    pub report_id: Uuid,
    pub analysis: AnalysisResult,
    pub collaborateur_html: String,
    pub manager_html: String,
}

/// `(collaborator, manager)` filenames for one run.
pub fn report_filenames(payload: &FeedbackPayload, timestamp_ms: i64) -> (String, String) {
    let prenom = filename_component(&payload.prenom);
    let nom = filename_component(&payload.nom);
    (
        format!("REX_Synthese_{prenom}_{nom}_{timestamp_ms}.pdf"),
        format!("REX_Manager_{prenom}_{nom}_{timestamp_ms}.pdf"),
    )
}

/// Keeps letters (accents included), digits, `-` and `_`; anything else becomes `_`.
fn filename_component(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Renders both documents for an already-obtained analysis.
pub fn render_documents(
    analysis: &AnalysisResult,
    payload: &FeedbackPayload,
    at: DateTime<Utc>,
) -> (String, String) {
    let issued_on = at.date_naive();
    (
        render_collaborator_html(analysis, payload, issued_on),
        render_manager_html(analysis, payload, issued_on),
    )
}

/// The analysis and export collaborators, injected once at startup.
#[derive(Clone)]
pub struct ReportPipeline {
    analyzer: Arc<dyn Analyzer>,
    exporter: Arc<dyn DocumentExporter>,
}

impl ReportPipeline {
    pub fn new(analyzer: Arc<dyn Analyzer>, exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { analyzer, exporter }
    }

    /// Analyzes and renders, stopping before the export stage.
    pub async fn preview(&self, payload: &FeedbackPayload) -> Result<RexPreview, AppError> {
        let report_id = Uuid::new_v4();
        info!("Previewing REX report {report_id} for {}", payload.full_name());

        let analysis = self.analyzer.analyze(payload).await?;
        let (collaborateur_html, manager_html) = render_documents(&analysis, payload, Utc::now());

        Ok(RexPreview {
            report_id,
            analysis,
            collaborateur_html,
            manager_html,
        })
    }

    /// Runs the full pipeline for one submission.
    pub async fn run(&self, payload: &FeedbackPayload) -> Result<RexReport, AppError> {
        let report_id = Uuid::new_v4();
        info!("Generating REX report {report_id} for {}", payload.full_name());

        let analysis = self.analyzer.analyze(payload).await?;
        info!(
            "Analysis for {report_id}: {} themes, {} priorities, {} actions",
            analysis.analyse_manager.analyse_par_thematique.len(),
            analysis.analyse_manager.points_prioritaires.len(),
            analysis.analyse_manager.plan_action.len()
        );

        // Captured once so both filenames and both documents agree.
        let now = Utc::now();
        let (collaborateur_html, manager_html) = render_documents(&analysis, payload, now);
        let (collaborateur_filename, manager_filename) =
            report_filenames(payload, now.timestamp_millis());

        // Wait for both exports, then surface whichever error occurred.
        let (collaborateur_pdf, manager_pdf) = tokio::join!(
            self.exporter.export(&collaborateur_html),
            self.exporter.export(&manager_html),
        );
        let collaborateur_pdf = collaborateur_pdf?;
        let manager_pdf = manager_pdf?;

        info!(
            "REX report {report_id} ready: {} ({} bytes), {} ({} bytes)",
            collaborateur_filename,
            collaborateur_pdf.len(),
            manager_filename,
            manager_pdf.len()
        );

        Ok(RexReport {
            report_id,
            collaborateur: RenderedDocument {
                html: collaborateur_html,
                filename: collaborateur_filename,
                buffer: collaborateur_pdf,
            },
            manager: RenderedDocument {
                html: manager_html,
                filename: manager_filename,
                buffer: manager_pdf,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::render::collaborator::MEETING_REQUESTED_NOTICE;
    use crate::test_support::{alice_payload, sample_analysis};

    struct FakeAnalyzer;

    #[async_trait]
    impl Analyzer for FakeAnalyzer {
        async fn analyze(&self, _payload: &FeedbackPayload) -> Result<AnalysisResult, AppError> {
            Ok(sample_analysis())
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl Analyzer for FailingAnalyzer {
        async fn analyze(&self, _payload: &FeedbackPayload) -> Result<AnalysisResult, AppError> {
            Err(AppError::Configuration("GEMINI_API_KEY is not configured".to_string()))
        }
    }

    /// Returns a fixed PDF, or fails for documents containing `fail_on`.
    struct FakeExporter {
        fail_on: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeExporter {
        fn ok() -> Self {
            Self { fail_on: None, calls: AtomicUsize::new(0) }
        }

        fn failing_on(marker: &'static str) -> Self {
            Self { fail_on: Some(marker), calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl DocumentExporter for FakeExporter {
        async fn export(&self, html: &str) -> Result<Bytes, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_on {
                Some(marker) if html.contains(marker) => Err(AppError::ExportService {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                }),
                _ => Ok(Bytes::from_static(b"%PDF-1.4 fake")),
            }
        }
    }

    fn timestamp_of<'a>(filename: &'a str, prefix: &str) -> &'a str {
        filename
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_alice_scenario() {
        let pipeline = ReportPipeline::new(Arc::new(FakeAnalyzer), Arc::new(FakeExporter::ok()));
        let report = pipeline.run(&alice_payload()).await.unwrap();

        let ts_collab = timestamp_of(&report.collaborateur.filename, "REX_Synthese_Alice_Martin_");
        let ts_manager = timestamp_of(&report.manager.filename, "REX_Manager_Alice_Martin_");
        assert_eq!(ts_collab, ts_manager);
        assert!(ts_collab.parse::<i64>().is_ok());

        assert!(report.manager.html.contains("RDV SOUHAITÉ"));
        assert!(report.collaborateur.html.contains(MEETING_REQUESTED_NOTICE));
        assert!(!report.collaborateur.buffer.is_empty());
        assert!(!report.manager.buffer.is_empty());
    }

    #[tokio::test]
    async fn test_one_failed_export_fails_the_pair() {
        let exporter = Arc::new(FakeExporter::failing_on("REX Manager"));
        let pipeline = ReportPipeline::new(Arc::new(FakeAnalyzer), exporter.clone());

        let err = pipeline.run(&alice_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::ExportService { status: 500, .. }));
        // Both exports were awaited, not cancelled.
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_analysis_failure_skips_export() {
        let exporter = Arc::new(FakeExporter::ok());
        let pipeline = ReportPipeline::new(Arc::new(FailingAnalyzer), exporter.clone());

        let err = pipeline.run(&alice_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_preview_does_not_export() {
        let exporter = Arc::new(FakeExporter::ok());
        let pipeline = ReportPipeline::new(Arc::new(FakeAnalyzer), exporter.clone());

        let preview = pipeline.preview(&alice_payload()).await.unwrap();
        assert!(preview.manager_html.contains("REX Manager"));
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_filenames_share_timestamp() {
        let (collab, manager) = report_filenames(&alice_payload(), 1_760_000_000_000);
        assert_eq!(collab, "REX_Synthese_Alice_Martin_1760000000000.pdf");
        assert_eq!(manager, "REX_Manager_Alice_Martin_1760000000000.pdf");
    }

    #[test]
    fn test_filenames_replace_unsafe_characters() {
        let payload = FeedbackPayload {
            prenom: "Jean Luc".to_string(),
            nom: "O'Neil/../x\"".to_string(),
            ..alice_payload()
        };
        let (collab, _) = report_filenames(&payload, 1);
        assert_eq!(collab, "REX_Synthese_Jean_Luc_O_Neil____x__1.pdf");

        let payload = FeedbackPayload {
            prenom: "Hélène".to_string(),
            nom: "Dupont-Moreau".to_string(),
            ..alice_payload()
        };
        let (_, manager) = report_filenames(&payload, 1);
        assert_eq!(manager, "REX_Manager_Hélène_Dupont-Moreau_1.pdf");
    }
}
