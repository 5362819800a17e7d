use serde::{Deserialize, Deserializer, Serialize};

use super::signals::RepoSignals;

/// Analysis result returned by the scoring service.
///
/// The four headline fields are required. `signals_used` is informational:
/// anything that does not fit [`RepoSignals`] is dropped instead of failing
/// the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Expected range is 0..=100, not enforced
    pub score: f64,

    /// Free-form label, e.g. "Beginner", "Intermediate", "Advanced"
    pub level: String,

    pub summary: String,

    /// Recommended next steps, in the order the service returned them
    pub roadmap: Vec<String>,

    #[serde(default, deserialize_with = "lenient_signals", skip_serializing_if = "Option::is_none")]
    pub signals_used: Option<RepoSignals>,
}

impl AnalysisResult {
    /// Headline such as "Score: 87 / 100 (Advanced)"
    pub fn score_line(&self) -> String {
        format!("Score: {} / 100 ({})", self.score, self.level)
    }
}

fn lenient_signals<'de, D>(deserializer: D) -> Result<Option<RepoSignals>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"score":87,"level":"Advanced","summary":"Solid structure","roadmap":["Add tests","Improve docs"]}"#;

    #[test]
    fn test_decode_sample() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.score_line(), "Score: 87 / 100 (Advanced)");
        assert_eq!(result.summary, "Solid structure");
        assert_eq!(result.roadmap, vec!["Add tests", "Improve docs"]);
        assert!(result.signals_used.is_none());
    }

    #[test]
    fn test_score_line_keeps_fraction_and_out_of_range_values() {
        let mut result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        result.score = 42.5;
        assert_eq!(result.score_line(), "Score: 42.5 / 100 (Advanced)");
        result.score = 140.0;
        result.level = "???".into();
        assert_eq!(result.score_line(), "Score: 140 / 100 (???)");
    }

    #[test]
    fn test_missing_roadmap_is_rejected() {
        let body = r#"{"score":10,"level":"Beginner","summary":"x"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn test_mistyped_score_is_rejected() {
        let body = r#"{"score":"87","level":"Advanced","summary":"x","roadmap":[]}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{"score":0,"level":"Beginner","summary":"","roadmap":[],"version":3}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.roadmap.is_empty());
    }

    #[test]
    fn test_signals_are_decoded_when_present() {
        let body = r#"{
            "score": 55, "level": "Intermediate", "summary": "ok", "roadmap": [],
            "signals_used": {"stars": 12, "has_tests": true, "languages": ["Rust", "Python"]}
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        let signals = result.signals_used.unwrap();
        assert_eq!(signals.stars, 12);
        assert!(signals.has_tests);
        assert!(!signals.has_ci);
        assert_eq!(signals.languages, vec!["Rust", "Python"]);
    }

    #[test]
    fn test_malformed_signals_do_not_fail_the_result() {
        for signals in [r#"null"#, r#""n/a""#, r#"{"stars":"many"}"#] {
            let body = format!(
                r#"{{"score":1,"level":"Beginner","summary":"s","roadmap":["a"],"signals_used":{}}}"#,
                signals
            );
            let result: AnalysisResult = serde_json::from_str(&body).unwrap();
            assert!(result.signals_used.is_none(), "signals: {}", signals);
        }
    }
}
