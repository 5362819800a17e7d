use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Repository URL exactly as the user typed it
    pub repo_url: String,
}

impl AnalyzeRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}
