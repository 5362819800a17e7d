use serde_json::error::Category;

/// Longest server-provided text carried into an error message.
const MAX_EXCERPT_CHARS: usize = 200;

/// Why a submission did not produce an analysis result.
///
/// `Display` is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Could not build the request: {0}")]
    Request(String),

    #[error("Could not reach the analysis service: {0}")]
    Network(String),

    #[error("Analysis service answered {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Analysis service returned a non-JSON response: {0}")]
    InvalidJson(String),

    #[error("Analysis service returned an unexpected response: {0}")]
    UnexpectedShape(String),

    #[error("No answer from the analysis service within {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },
}

impl AnalysisError {
    /// Build an error for a non-2xx response.
    ///
    /// Prefers a `detail` string from a JSON error body, then the raw body,
    /// then the status text.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

        let message = detail
            .or_else(|| Some(body.trim()).filter(|b| !b.is_empty()).map(str::to_string))
            .or_else(|| Some(status_text.trim()).filter(|t| !t.is_empty()).map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());

        Self::HttpStatus {
            status,
            message: excerpt(&message),
        }
    }

    /// Split decoding failures into "not JSON at all" and "JSON of the wrong shape".
    pub fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::UnexpectedShape(err.to_string()),
            _ => Self::InvalidJson(err.to_string()),
        }
    }

    /// Short suggestion rendered under the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Request(_) => "The repository URL could not be sent. Try editing it and submit again.",
            Self::Network(_) => {
                "Check that the analysis service is running and accepts requests from this page."
            }
            Self::HttpStatus { status, .. } if *status >= 500 => {
                "The analysis service failed. Try again in a moment."
            }
            Self::HttpStatus { .. } => "Check the repository URL and submit again.",
            Self::InvalidJson(_) | Self::UnexpectedShape(_) => {
                "The configured endpoint does not look like a GitGrade analysis service."
            }
            Self::Timeout { .. } => "The analysis is taking too long. Try again later.",
        }
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_EXCERPT_CHARS - 1).collect();
    cut.push('…');
    cut
}
