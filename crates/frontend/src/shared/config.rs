//! Client configuration.
//!
//! Each key is resolved once at start-up, highest precedence first:
//!   1. `<meta name="gitgrade:…" content="…">` in the host page
//!   2. build-time environment (`GITGRADE_ANALYSIS_ENDPOINT`, `GITGRADE_REQUEST_TIMEOUT_MS`)
//!   3. compiled-in defaults
//!
//! Usage:
//! ```rust,no_run
//! use frontend::shared::config::AppConfig;
//! use frontend::usecases::u101_analyze_repository::HttpAnalysisService;
//!
//! let config = AppConfig::load();
//! let service = HttpAnalysisService::from_config(&config);
//! ```

/// Endpoint used when nothing overrides it.
pub const DEFAULT_ANALYSIS_ENDPOINT: &str = "http://localhost:8000/analyze";

const ENDPOINT_META: &str = "gitgrade:analysis-endpoint";
const TIMEOUT_META: &str = "gitgrade:request-timeout-ms";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Full URL the analyze request is POSTed to
    pub analysis_endpoint: String,
    /// `None` waits for the service indefinitely
    pub request_timeout_ms: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_endpoint: DEFAULT_ANALYSIS_ENDPOINT.to_string(),
            request_timeout_ms: None,
        }
    }
}

/// Raw, unparsed values from one configuration layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub analysis_endpoint: Option<String>,
    pub request_timeout_ms: Option<String>,
}

impl ConfigSource {
    fn from_page() -> Self {
        Self {
            analysis_endpoint: read_meta(ENDPOINT_META),
            request_timeout_ms: read_meta(TIMEOUT_META),
        }
    }

    fn from_build_env() -> Self {
        Self {
            analysis_endpoint: option_env!("GITGRADE_ANALYSIS_ENDPOINT").map(str::to_string),
            request_timeout_ms: option_env!("GITGRADE_REQUEST_TIMEOUT_MS").map(str::to_string),
        }
    }
}

impl AppConfig {
    /// Load configuration from the host page and the build environment.
    pub fn load() -> Self {
        let config = Self::resolve(&[ConfigSource::from_page(), ConfigSource::from_build_env()]);
        log::info!(
            "analysis endpoint: {} (timeout: {})",
            config.analysis_endpoint,
            config
                .request_timeout_ms
                .map(|ms| format!("{} ms", ms))
                .unwrap_or_else(|| "none".to_string())
        );
        config
    }

    /// Merge layers; earlier layers win. Blank values fall through.
    pub fn resolve(layers: &[ConfigSource]) -> Self {
        let defaults = Self::default();

        let analysis_endpoint = layers
            .iter()
            .filter_map(|layer| non_blank(layer.analysis_endpoint.as_deref()))
            .next()
            .map(str::to_string)
            .unwrap_or(defaults.analysis_endpoint);

        let request_timeout_ms = layers
            .iter()
            .filter_map(|layer| non_blank(layer.request_timeout_ms.as_deref()))
            .find_map(parse_timeout)
            .or(defaults.request_timeout_ms);

        Self {
            analysis_endpoint,
            request_timeout_ms,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_timeout(raw: &str) -> Option<u32> {
    match raw.parse::<u32>() {
        Ok(0) => {
            log::warn!("ignoring zero request timeout");
            None
        }
        Ok(ms) => Some(ms),
        Err(e) => {
            log::warn!("ignoring request timeout {:?}: {}", raw, e);
            None
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}
