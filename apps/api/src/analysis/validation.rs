//! Parsing and structural validation of the model's analysis output.

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::analysis::AnalysisResult;
use crate::models::payload::Theme;

pub const MIN_PRIORITY_POINTS: usize = 3;
pub const MIN_ACTION_ITEMS: usize = 5;

const REQUIRED_SECTIONS: [&str; 2] = ["synthese_collaborateur", "analyse_manager"];

/// Parses raw model text into an `AnalysisResult`.
///
/// - Code fences are stripped first, so fenced and bare output parse identically.
/// - Text that is not JSON at all → `UpstreamService`.
/// - Missing top-level sections, or sections that do not match the schema → `MalformedAnalysis`.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AppError> {
    let cleaned = strip_json_fences(raw);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| AppError::UpstreamService(format!("Analysis output is not valid JSON: {e}")))?;

    let missing: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|key| value.get(key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MalformedAnalysis(format!(
            "missing required sections: {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::MalformedAnalysis(format!("analysis does not match schema: {e}")))
}

/// Minimum-count findings for an analysis. Empty `issues` means complete.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletenessReport {
    pub theme_count: usize,
    pub priority_count: usize,
    pub action_count: usize,
    pub issues: Vec<String>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks the six-theme / priority / action minimums the prompt asks for.
pub fn validate_completeness(analysis: &AnalysisResult) -> CompletenessReport {
    let manager = &analysis.analyse_manager;
    let mut report = CompletenessReport {
        theme_count: manager.analyse_par_thematique.len(),
        priority_count: manager.points_prioritaires.len(),
        action_count: manager.plan_action.len(),
        issues: Vec::new(),
    };

    if report.theme_count != Theme::ALL.len() {
        report.issues.push(format!(
            "expected {} thematic analyses, got {}",
            Theme::ALL.len(),
            report.theme_count
        ));
    }

    // Exactly one analysis per fixed theme.
    let mut seen = [0usize; 6];
    for entry in &manager.analyse_par_thematique {
        match Theme::from_label(&entry.thematique) {
            Some(theme) => seen[theme.number() - 1] += 1,
            None => report
                .issues
                .push(format!("unrecognized theme '{}'", entry.thematique)),
        }
    }
    for theme in Theme::ALL {
        match seen[theme.number() - 1] {
            0 => report
                .issues
                .push(format!("missing analysis for theme {}", theme.heading())),
            1 => {}
            n => report.issues.push(format!(
                "theme {} analysed {n} times",
                theme.heading()
            )),
        }
    }

    if report.priority_count < MIN_PRIORITY_POINTS {
        report.issues.push(format!(
            "expected at least {MIN_PRIORITY_POINTS} priority points, got {}",
            report.priority_count
        ));
    }
    if report.action_count < MIN_ACTION_ITEMS {
        report.issues.push(format!(
            "expected at least {MIN_ACTION_ITEMS} action items, got {}",
            report.action_count
        ));
    }

    report
}
