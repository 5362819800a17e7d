//! Display data derived from [`AnalysisState`]. Pure, so equal states render equally.

use contracts::usecases::u101_analyze_repository::{AnalysisResult, RepoSignals};

use super::state::AnalysisState;

/// Badge tone for the level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTone {
    Advanced,
    Intermediate,
    Beginner,
    /// Label the client does not know
    Neutral,
}

impl LevelTone {
    pub fn from_level(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "advanced" => Self::Advanced,
            "intermediate" => Self::Intermediate,
            "beginner" => Self::Beginner,
            _ => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    /// e.g. "Score: 87 / 100 (Advanced)"
    pub heading: String,
    pub level: String,
    pub tone: LevelTone,
    pub summary: String,
    pub roadmap: Vec<String>,
    pub signals: Option<Vec<(&'static str, String)>>,
}

impl ResultSection {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            heading: result.score_line(),
            level: result.level.clone(),
            tone: LevelTone::from_level(&result.level),
            summary: result.summary.clone(),
            roadmap: result.roadmap.clone(),
            signals: result.signals_used.as_ref().map(signal_rows),
        }
    }
}

/// `None` until the first successful response.
pub fn result_section(state: &AnalysisState) -> Option<ResultSection> {
    state.result().map(ResultSection::from_result)
}

pub fn signal_rows(signals: &RepoSignals) -> Vec<(&'static str, String)> {
    let languages = if signals.languages.is_empty() {
        "—".to_string()
    } else {
        signals.languages.join(", ")
    };

    vec![
        ("Stars", signals.stars.to_string()),
        ("Files", signals.files_count.to_string()),
        ("Commits", signals.commit_count.to_string()),
        ("Languages", languages),
        ("README length", signals.readme_len.to_string()),
        ("README: install", yes_no(signals.readme_has_install)),
        ("README: usage", yes_no(signals.readme_has_usage)),
        ("src/ directory", yes_no(signals.has_src)),
        ("Tests", yes_no(signals.has_tests)),
        ("CI workflows", yes_no(signals.has_ci)),
        (".env.example", yes_no(signals.has_env_example)),
    ]
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
