mod analysis;
mod config;
mod errors;
mod export;
mod llm_client;
mod models;
mod pipeline;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::GeminiAnalyzer;
use crate::config::Config;
use crate::export::Html2PdfClient;
use crate::llm_client::LlmClient;
use crate::pipeline::ReportPipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting REX API v{}", env!("CARGO_PKG_VERSION"));

    // Credentials are checked lazily per stage; only warn here.
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set: analysis requests will fail until it is configured");
    }
    if config.html2pdf_api_key.is_none() {
        warn!("HTML2PDF_API_KEY not set: PDF export will fail until it is configured");
    }

    // Initialize LLM client (HTTP handle is built on first call)
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    let analyzer = Arc::new(GeminiAnalyzer::new(llm, config.strict_validation));
    let exporter = Arc::new(Html2PdfClient::new(
        config.html2pdf_api_key.clone(),
        config.html2pdf_api_url.clone(),
    ));

    let state = AppState {
        pipeline: ReportPipeline::new(analyzer, exporter),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the form host once it is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
