use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_HTML2PDF_API_URL: &str = "https://api.html2pdf.app/v1/generate";

/// Application configuration loaded from environment variables.
///
/// Service credentials are optional here: each pipeline stage checks its own
/// key when it is actually called, so the API boots without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub html2pdf_api_key: Option<String>,
    pub html2pdf_api_url: String,
    /// Reject analyses that miss the theme/priority/action minimums instead of warning.
    pub strict_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY")
                .or_else(|| optional_env("GOOGLE_GENERATIVE_AI_API_KEY")),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            html2pdf_api_key: optional_env("HTML2PDF_API_KEY"),
            html2pdf_api_url: optional_env("HTML2PDF_API_URL")
                .unwrap_or_else(|| DEFAULT_HTML2PDF_API_URL.to_string()),
            strict_validation: optional_env("REX_STRICT_VALIDATION")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("REX_STRICT_VALIDATION must be true/false")?
                .unwrap_or(false),
        })
    }
}

/// Reads an env var, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
