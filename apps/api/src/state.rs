use crate::config::Config;
use crate::pipeline::ReportPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Analysis + export collaborators. Built once at startup; clones share the
    /// same underlying HTTP clients.
    pub pipeline: ReportPipeline,
}
