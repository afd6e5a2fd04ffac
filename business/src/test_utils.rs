//! Test utilities for business layer testing with mock servers.
//!
//! Provides a [`TestContext`] holding a `wiremock::MockServer` and a fully
//! registered `StateCtx`, plus `mock_*` helpers for each backend endpoint.
//! Commands run their HTTP requests through ehttp's background fetch, so
//! tests poll with [`TestContext::wait_for`] until the target compute
//! settles.

use std::time::Duration;

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{
    AiHealth, AnalyzeCompute, AnalyzeContentCommand, ApiStatus, BusinessConfig,
    ErrorCorrectionLevelsCompute, FetchErrorCorrectionLevelsCommand, FetchQrTypesCommand,
    FetchSuggestionsCommand, GenerateQrCommand, GenerateQrCompute, GenerateQrInput,
    QrTypesCompute, Route, SuggestionsCompute, UrlValidationCompute, ValidateUrlCommand,
};
use quickqr_states::{StateCtx, Time};

/// Test context that holds a mock server and a configured StateCtx.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let base_url = mock_server.uri();

        let config = BusinessConfig::new(base_url);
        let ctx = build_test_state_ctx(config);

        Self { mock_server, ctx }
    }

    /// Poll `sync_computes()` until `done` returns true or a timeout hits.
    pub async fn wait_for(&mut self, mut done: impl FnMut(&StateCtx) -> bool) {
        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        loop {
            self.ctx.sync_computes();
            if done(&self.ctx) {
                return;
            }
            if start.elapsed() > timeout {
                panic!("Timed out waiting for compute update");
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    /// Mock the generate endpoint with a successful render.
    pub async fn mock_generate(&self, qr_id: &str, data_url: &str) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "qr_code_data": data_url,
            "qr_id": qr_id,
            "view_url": format!("/view/{qr_id}"),
            "metadata": {
                "content": "https://example.com",
                "qr_type": "url",
                "size": 10,
                "error_correction": "M"
            }
        }));

        Mock::given(method("POST"))
            .and(path("/api/v1/qr/generate"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the generate endpoint with an error response.
    pub async fn mock_generate_error(&self, status: u16, error: &str) {
        let response = ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "success": false,
            "error": error
        }));

        Mock::given(method("POST"))
            .and(path("/api/v1/qr/generate"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the AI suggestions endpoint.
    pub async fn mock_suggestions(
        &self,
        suggestions: &[&str],
        optimized: Option<&str>,
        confidence: f32,
    ) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": suggestions,
            "optimized_content": optimized,
            "confidence_score": confidence
        }));

        Mock::given(method("POST"))
            .and(path("/api/v1/ai/suggestions"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the content analysis endpoint.
    pub async fn mock_analyze(&self, length: usize, is_url: bool) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "length": length,
            "has_special_chars": false,
            "is_url": is_url,
            "suggestions": []
        }));

        Mock::given(method("POST"))
            .and(path("/api/v1/ai/analyze"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the URL validation endpoint.
    pub async fn mock_validate_url(&self, url: &str, is_valid: bool, suggestions: &[&str]) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": url,
            "is_valid": is_valid,
            "suggestions": suggestions
        }));

        Mock::given(method("POST"))
            .and(path("/api/v1/qr/validate-url"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the QR type list endpoint.
    pub async fn mock_qr_types(&self) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "types": [
                {"value": "url", "label": "Website URL", "description": "Link to a website"},
                {"value": "text", "label": "Plain Text", "description": "Any text"},
                {"value": "wifi", "label": "WiFi Network", "description": "Network credentials"}
            ]
        }));

        Mock::given(method("GET"))
            .and(path("/api/v1/qr/types"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the error correction level list endpoint.
    pub async fn mock_error_correction_levels(&self) {
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "levels": [
                {"value": "L", "label": "Low (7%)", "description": ""},
                {"value": "M", "label": "Medium (15%)", "description": ""},
                {"value": "Q", "label": "Quartile (25%)", "description": ""},
                {"value": "H", "label": "High (30%)", "description": ""}
            ]
        }));

        Mock::given(method("GET"))
            .and(path("/api/v1/qr/error-correction-levels"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the health endpoint.
    pub async fn mock_health(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/v1/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "status": if status == 200 { "healthy" } else { "unhealthy" },
                "service": "quickqr-api"
            })))
            .mount(&self.mock_server)
            .await;
    }
}

/// Build a StateCtx registered the way the app registers it.
fn build_test_state_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(Route::default());
    ctx.add_state(GenerateQrInput::default());

    ctx.record_compute(ApiStatus::default());
    ctx.record_compute(AiHealth::default());
    ctx.record_compute(GenerateQrCompute::default());
    ctx.record_compute(SuggestionsCompute::default());
    ctx.record_compute(AnalyzeCompute::default());
    ctx.record_compute(UrlValidationCompute::default());
    ctx.record_compute(QrTypesCompute::default());
    ctx.record_compute(ErrorCorrectionLevelsCompute::default());

    ctx.record_command(GenerateQrCommand);
    ctx.record_command(FetchSuggestionsCommand);
    ctx.record_command(AnalyzeContentCommand);
    ctx.record_command(ValidateUrlCommand);
    ctx.record_command(FetchQrTypesCommand);
    ctx.record_command(FetchErrorCorrectionLevelsCommand);

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AnalyzeStatus, EMPTY_CONTENT_MESSAGE, GenerateStatus, OptionsStatus, SuggestionsStatus,
        ValidationStatus,
    };

    #[tokio::test]
    async fn test_context_creation() {
        let test_ctx = TestContext::new().await;
        assert!(!test_ctx.mock_server.uri().is_empty());
        assert!(test_ctx.ctx.verify_deps().is_ok());
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_generate("abc123", "data:image/png;base64,AAAA")
            .await;

        test_ctx.ctx.update::<GenerateQrInput>(|input| {
            input.content = "https://example.com".to_owned();
        });
        test_ctx.ctx.dispatch::<GenerateQrCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<GenerateQrCompute>()
                    .is_some_and(|c| !c.status.is_pending() && !c.status.is_idle())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<GenerateQrCompute>()
            .expect("compute registered");
        match &compute.status {
            GenerateStatus::Success(response) => {
                assert_eq!(response.qr_id.as_deref(), Some("abc123"));
                assert_eq!(
                    response.qr_code_data.as_deref(),
                    Some("data:image/png;base64,AAAA")
                );
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_content_fails_without_request() {
        let mut test_ctx = TestContext::new().await;
        // No mock mounted: a request would 404 and produce a different error.

        test_ctx.ctx.dispatch::<GenerateQrCommand>();
        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<GenerateQrCompute>()
                    .is_some_and(|c| c.status.error_message().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<GenerateQrCompute>()
            .expect("compute registered");
        assert_eq!(compute.status.error_message(), Some(EMPTY_CONTENT_MESSAGE));
        assert!(
            test_ctx.mock_server.received_requests().await.is_none_or(|r| r.is_empty()),
            "validation failure must not reach the backend"
        );
    }

    #[tokio::test]
    async fn test_generate_backend_error() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_generate_error(400, "Invalid color format").await;

        test_ctx.ctx.update::<GenerateQrInput>(|input| {
            input.content = "hello".to_owned();
            input.foreground_color = "notacolor".to_owned();
        });
        test_ctx.ctx.dispatch::<GenerateQrCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<GenerateQrCompute>()
                    .is_some_and(|c| c.status.error_message().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<GenerateQrCompute>()
            .expect("compute registered");
        assert_eq!(compute.status.error_message(), Some("Invalid color format"));
    }

    #[tokio::test]
    async fn test_suggestions_success() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_suggestions(&["Use HTTPS"], Some("https://example.com"), 0.9)
            .await;

        test_ctx.ctx.update::<GenerateQrInput>(|input| {
            input.content = "example.com".to_owned();
        });
        test_ctx.ctx.dispatch::<FetchSuggestionsCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<SuggestionsCompute>()
                    .is_some_and(|c| c.status.response().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<SuggestionsCompute>()
            .expect("compute registered");
        let response = compute.status.response().expect("success");
        assert_eq!(response.suggestions, vec!["Use HTTPS".to_owned()]);
        assert_eq!(response.optimized_content.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_suggestions_require_content() {
        let mut test_ctx = TestContext::new().await;

        test_ctx.ctx.dispatch::<FetchSuggestionsCommand>();
        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<SuggestionsCompute>()
                    .is_some_and(|c| c.status.error_message().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<SuggestionsCompute>()
            .expect("compute registered");
        assert!(matches!(compute.status, SuggestionsStatus::Error(_)));
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_analyze(19, true).await;

        test_ctx.ctx.update::<GenerateQrInput>(|input| {
            input.content = "https://example.com".to_owned();
        });
        test_ctx.ctx.dispatch::<AnalyzeContentCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<AnalyzeCompute>()
                    .is_some_and(|c| c.status.analysis().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<AnalyzeCompute>()
            .expect("compute registered");
        let analysis = compute.status.analysis().expect("success");
        assert_eq!(analysis.length, 19);
        assert!(analysis.is_url);
        assert!(matches!(compute.status, AnalyzeStatus::Success(_)));
    }

    #[tokio::test]
    async fn test_validate_url() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_validate_url("example.com", false, &["Add https:// prefix"])
            .await;

        test_ctx.ctx.update::<GenerateQrInput>(|input| {
            input.content = "example.com".to_owned();
        });
        test_ctx.ctx.dispatch::<ValidateUrlCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<UrlValidationCompute>()
                    .is_some_and(|c| c.status.validation().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<UrlValidationCompute>()
            .expect("compute registered");
        let validation = compute.status.validation().expect("success");
        assert!(!validation.is_valid);
        assert_eq!(validation.suggestions, vec!["Add https:// prefix".to_owned()]);
        assert!(matches!(compute.status, ValidationStatus::Success(_)));
    }

    #[tokio::test]
    async fn test_fetch_option_lists() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_qr_types().await;
        test_ctx.mock_error_correction_levels().await;

        test_ctx.ctx.dispatch::<FetchQrTypesCommand>();
        test_ctx.ctx.dispatch::<FetchErrorCorrectionLevelsCommand>();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<QrTypesCompute>()
                    .is_some_and(|c| c.status.options().is_some())
                    && ctx
                        .cached::<ErrorCorrectionLevelsCompute>()
                        .is_some_and(|c| c.status.options().is_some())
            })
            .await;

        let types = test_ctx
            .ctx
            .cached::<QrTypesCompute>()
            .and_then(|c| c.status.options().map(<[_]>::len));
        assert_eq!(types, Some(3));

        let levels = test_ctx
            .ctx
            .cached::<ErrorCorrectionLevelsCompute>()
            .and_then(|c| c.status.options().map(<[_]>::len));
        assert_eq!(levels, Some(4));
    }

    #[tokio::test]
    async fn test_options_error_status() {
        let mut test_ctx = TestContext::new().await;
        // No mocks mounted: wiremock answers 404.

        test_ctx.ctx.dispatch::<FetchQrTypesCommand>();
        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<QrTypesCompute>()
                    .is_some_and(|c| c.status.error_message().is_some())
            })
            .await;

        let compute = test_ctx
            .ctx
            .cached::<QrTypesCompute>()
            .expect("compute registered");
        assert!(matches!(compute.status, OptionsStatus::Error(_)));
    }

    #[tokio::test]
    async fn test_health_poll_marks_api_available() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_health(200).await;

        // Time and the health computes are dirty after registration.
        test_ctx.ctx.run_all_dirty();

        test_ctx
            .wait_for(|ctx| {
                ctx.cached::<ApiStatus>().is_some_and(|status| {
                    matches!(
                        status.api_availability(),
                        crate::ApiAvailability::Available(_)
                    )
                })
            })
            .await;
    }
}
