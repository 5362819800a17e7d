use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use contracts::usecases::u101_analyze_repository::{AnalysisResult, AnalyzeRequest};
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::error::AnalysisError;
use crate::shared::config::AppConfig;

/// Anything that can turn an [`AnalyzeRequest`] into an [`AnalysisResult`].
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait AnalysisService {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Handle stored in the Leptos context.
pub type SharedAnalysisService = Arc<dyn AnalysisService + Send + Sync>;

/// API client for UseCase u101
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    endpoint: String,
    timeout_ms: Option<u32>,
}

impl HttpAnalysisService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: None,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: Option<u32>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.analysis_endpoint.clone()).with_timeout(config.request_timeout_ms)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        // `.json()` also sets `Content-Type: application/json`
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AnalysisError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AnalysisError::from_status(
                response.status(),
                &response.status_text(),
                &body,
            ));
        }

        decode_analysis(&body)
    }
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisResult, AnalysisError> {
        with_timeout(self.post(&request), self.timeout_ms).await
    }
}

/// Decode a 2xx response body.
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, AnalysisError> {
    serde_json::from_str(body).map_err(AnalysisError::from_decode)
}

/// Race `request` against a browser timer. `None` waits forever.
pub async fn with_timeout<F, T>(request: F, timeout_ms: Option<u32>) -> Result<T, AnalysisError>
where
    F: Future<Output = Result<T, AnalysisError>>,
{
    match timeout_ms {
        Some(timeout_ms) => race_timeout(request, TimeoutFuture::new(timeout_ms), timeout_ms).await,
        None => request.await,
    }
}

/// Whichever of `request` and `timer` finishes first decides the outcome.
pub async fn race_timeout<F, D, T>(request: F, timer: D, timeout_ms: u32) -> Result<T, AnalysisError>
where
    F: Future<Output = Result<T, AnalysisError>>,
    D: Future,
{
    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(timer);
    match future::select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(AnalysisError::Timeout { timeout_ms }),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{result, ScriptedService};
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_decode_sample_response() {
        let body = r#"{"score":87,"level":"Advanced","summary":"Solid structure","roadmap":["Add tests","Improve docs"]}"#;
        let decoded = decode_analysis(body).unwrap();
        assert_eq!(decoded.score_line(), "Score: 87 / 100 (Advanced)");
        assert_eq!(decoded.roadmap, vec!["Add tests", "Improve docs"]);
    }

    #[test]
    fn test_decode_failures_are_classified() {
        assert!(matches!(
            decode_analysis("Internal Server Error"),
            Err(AnalysisError::InvalidJson(_))
        ));
        assert!(matches!(
            decode_analysis(r#"{"detail":"Not Found"}"#),
            Err(AnalysisError::UnexpectedShape(_))
        ));
        assert!(matches!(
            decode_analysis("[]"),
            Err(AnalysisError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_without_timeout_the_request_decides() {
        let ok: Result<u8, AnalysisError> = block_on(with_timeout(async { Ok(7) }, None));
        assert_eq!(ok, Ok(7));

        let err: Result<u8, AnalysisError> = block_on(with_timeout(
            async { Err(AnalysisError::Network("refused".into())) },
            None,
        ));
        assert_eq!(err, Err(AnalysisError::Network("refused".into())));
    }

    #[test]
    fn test_elapsed_timer_fails_with_timeout() {
        let outcome: Result<u8, AnalysisError> =
            block_on(race_timeout(future::pending(), future::ready(()), 3000));
        assert_eq!(outcome, Err(AnalysisError::Timeout { timeout_ms: 3000 }));
        assert_eq!(
            outcome.unwrap_err().to_string(),
            "No answer from the analysis service within 3000 ms"
        );
    }

    #[test]
    fn test_request_finishing_first_beats_the_timer() {
        let ok = block_on(race_timeout(
            async { Ok(result(87.0, "Advanced", &["Add tests"])) },
            future::pending::<()>(),
            10,
        ));
        assert_eq!(ok.unwrap().score_line(), "Score: 87 / 100 (Advanced)");

        let err: Result<u8, AnalysisError> = block_on(race_timeout(
            async { Err(AnalysisError::Network("refused".into())) },
            future::pending::<()>(),
            10,
        ));
        assert_eq!(err, Err(AnalysisError::Network("refused".into())));
    }

    #[test]
    fn test_from_config_copies_endpoint_and_timeout() {
        let config = AppConfig {
            analysis_endpoint: "http://grader.local/analyze".into(),
            request_timeout_ms: Some(1500),
        };
        let service = HttpAnalysisService::from_config(&config);
        assert_eq!(service.endpoint(), "http://grader.local/analyze");
        assert_eq!(service.timeout_ms, Some(1500));
    }

    #[test]
    fn test_scripted_service_replays_in_order() {
        let service = ScriptedService::replying(vec![Ok(result(10.0, "Beginner", &[]))]);
        let first = block_on(service.analyze(AnalyzeRequest::new("a")));
        let second = block_on(service.analyze(AnalyzeRequest::new("b")));
        assert_eq!(first.unwrap().level, "Beginner");
        assert!(second.is_err());
        assert_eq!(service.urls(), vec!["a", "b"]);
    }
}
