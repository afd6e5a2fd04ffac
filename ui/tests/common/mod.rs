use quickqr_ui::QuickQrApp;
use quickqr_ui::state::State;
use egui_kittest::Harness;
use wiremock::Mock;
use wiremock::matchers::{method, path};
use wiremock::{MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub async fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let (mock_server, state) = setup_test_state(200).await;
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, QuickQrApp> {
    #[allow(unused)]
    pub async fn new_app() -> Self {
        Self::new_app_with_status(200).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let (mock_server, state) = setup_test_state(status_code).await;
        let app = QuickQrApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Mounts the endpoints every app instance touches at startup: both health
/// checks plus the two option lists.
async fn setup_test_state(status_code: u16) -> (MockServer, State) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(serde_json::json!({
            "status": if status_code == 200 { "healthy" } else { "unhealthy" },
            "service": "quickqr-api"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ai/health"))
        .respond_with(ResponseTemplate::new(status_code))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qr/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "types": [
                {"value": "url", "label": "Website URL", "description": "Link to a website"},
                {"value": "text", "label": "Plain Text", "description": "Any text"},
                {"value": "wifi", "label": "WiFi Network", "description": "Network credentials"}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qr/error-correction-levels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "levels": [
                {"value": "L", "label": "Low (7%)"},
                {"value": "M", "label": "Medium (15%)"},
                {"value": "Q", "label": "Quartile (25%)"},
                {"value": "H", "label": "High (30%)"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let state = State::test(base_url);

    (mock_server, state)
}

/// Give ehttp's background fetch time to complete.
#[allow(unused)]
pub async fn wait_for_network(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
