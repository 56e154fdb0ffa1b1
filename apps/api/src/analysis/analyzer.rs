//! Analysis client — turns a `FeedbackPayload` into a validated `AnalysisResult`.
//!
//! `AppState` holds an `Arc<dyn Analyzer>`; tests swap in a fake.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::context::build_prompt_context;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_PROMPT_VERSION};
use crate::analysis::validation::{parse_analysis, validate_completeness};
use crate::errors::AppError;
use crate::llm_client::prompts::{EDITORIAL_RULES, JSON_ONLY_RULES};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::models::payload::FeedbackPayload;

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, payload: &FeedbackPayload) -> Result<AnalysisResult, AppError>;
}

/// Full prompt for one submission: instruction template + context block.
pub fn build_analysis_prompt(payload: &FeedbackPayload) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{editorial_rules}", EDITORIAL_RULES)
        .replace("{json_rules}", JSON_ONLY_RULES)
        .replace("{context}", &build_prompt_context(payload))
}

/// Gemini-backed analyzer. One call per submission, no retries.
pub struct GeminiAnalyzer {
    llm: LlmClient,
    /// Reject analyses below the documented minimums instead of only warning.
    strict: bool,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient, strict: bool) -> Self {
        Self { llm, strict }
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(&self, payload: &FeedbackPayload) -> Result<AnalysisResult, AppError> {
        let prompt = build_analysis_prompt(payload);
        info!(
            prompt_version = ANALYSIS_PROMPT_VERSION,
            model = self.llm.model(),
            "Requesting REX analysis"
        );

        let text = self.llm.call_for_json_text(&prompt).await.map_err(|e| match e {
            LlmError::MissingApiKey => {
                AppError::Configuration("GEMINI_API_KEY is not configured".to_string())
            }
            other => AppError::UpstreamService(format!("Impossible d'analyser le feedback: {other}")),
        })?;

        let analysis = parse_analysis(&text)?;

        let report = validate_completeness(&analysis);
        if !report.is_complete() {
            if self.strict {
                return Err(AppError::MalformedAnalysis(report.issues.join("; ")));
            }
            for issue in &report.issues {
                warn!("Analysis below documented minimum: {issue}");
            }
        }

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alice_payload, sample_analysis, spawn_stub, GEMINI_STUB_ROUTE};
    use axum::{routing::post, Json, Router};

    async fn analyzer_answering(text: String, strict: bool) -> GeminiAnalyzer {
        let router = Router::new().route(
            GEMINI_STUB_ROUTE,
            post(move || {
                let text = text.clone();
                async move {
                    Json(serde_json::json!({
                        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                    }))
                }
            }),
        );
        let base = spawn_stub(router).await;
        let llm = LlmClient::new(
            Some("test-key".to_string()),
            "gemini-1.5-pro".to_string(),
            base,
        );
        GeminiAnalyzer::new(llm, strict)
    }

    #[test]
    fn test_prompt_contains_rules_and_context() {
        let prompt = build_analysis_prompt(&alice_payload());
        assert!(prompt.contains("1. PERSONNALISATION obligatoire"));
        assert!(prompt.contains("4. FORMAT JSON strict"));
        assert!(prompt.contains("COLLABORATEUR : Alice Martin"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{editorial_rules}"));
    }

    #[tokio::test]
    async fn test_analyze_parses_fenced_response() {
        let body = serde_json::to_string(&sample_analysis()).unwrap();
        let analyzer = analyzer_answering(format!("```json\n{body}\n```"), false).await;
        let analysis = analyzer.analyze(&alice_payload()).await.unwrap();
        assert_eq!(
            analysis.synthese_collaborateur.titre,
            "Merci pour votre retour, Alice"
        );
    }

    #[tokio::test]
    async fn test_analyze_missing_manager_section_is_malformed() {
        let body = serde_json::json!({
            "synthese_collaborateur": serde_json::to_value(sample_analysis().synthese_collaborateur).unwrap()
        });
        let analyzer = analyzer_answering(body.to_string(), false).await;
        let err = analyzer.analyze(&alice_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedAnalysis(_)));
    }

    #[tokio::test]
    async fn test_short_analysis_accepted_unless_strict() {
        let mut analysis = sample_analysis();
        analysis.analyse_manager.plan_action.truncate(2);
        let body = serde_json::to_string(&analysis).unwrap();

        let lenient = analyzer_answering(body.clone(), false).await;
        assert!(lenient.analyze(&alice_payload()).await.is_ok());

        let strict = analyzer_answering(body, true).await;
        let err = strict.analyze(&alice_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedAnalysis(_)));
    }

    #[tokio::test]
    async fn test_duplicated_theme_rejected_when_strict() {
        let mut analysis = sample_analysis();
        for entry in &mut analysis.analyse_manager.analyse_par_thematique {
            entry.thematique = "Relation Manager".to_string();
        }
        let body = serde_json::to_string(&analysis).unwrap();

        let lenient = analyzer_answering(body.clone(), false).await;
        assert!(lenient.analyze(&alice_payload()).await.is_ok());

        let strict = analyzer_answering(body, true).await;
        let err = strict.analyze(&alice_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedAnalysis(msg) if msg.contains("analysed 6 times")));
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let llm = LlmClient::new(None, "gemini-1.5-pro".to_string(), "http://127.0.0.1:9".to_string());
        let err = GeminiAnalyzer::new(llm, false)
            .analyze(&alice_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_upstream_error() {
        // Nothing listens on the discard port.
        let llm = LlmClient::new(
            Some("test-key".to_string()),
            "gemini-1.5-pro".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let err = GeminiAnalyzer::new(llm, false)
            .analyze(&alice_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamService(_)));
    }
}
