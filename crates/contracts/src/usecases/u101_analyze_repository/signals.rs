use serde::{Deserialize, Serialize};

/// Repository facts the service based its score on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoSignals {
    pub stars: u64,
    pub files_count: u64,
    pub has_src: bool,
    pub has_tests: bool,
    /// README length in characters
    pub readme_len: u64,
    pub readme_has_install: bool,
    pub readme_has_usage: bool,
    /// Capped by the service at one page of commits
    pub commit_count: u64,
    pub languages: Vec<String>,
    pub has_ci: bool,
    pub has_env_example: bool,
}
