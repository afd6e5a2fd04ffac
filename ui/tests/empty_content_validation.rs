//! Submitting an empty form must show the validation message without any
//! request reaching the generate endpoint.

mod common;

use common::TestCtx;
use kittest::Queryable;
use quickqr_business::{EMPTY_CONTENT_MESSAGE, Route};

#[tokio::test]
async fn test_empty_content_shows_validation_error_without_request() {
    let mut ctx = TestCtx::new_app().await;

    {
        let harness = ctx.harness_mut();
        harness.state_mut().state.ctx.update::<Route>(|route| *route = Route::Generator);
        harness.step();

        harness.get_by_label("Generate QR Code").click();
        harness.step();

        common::wait_for_network(100).await;
        harness.state_mut().state.ctx.sync_computes();
        harness.step();

        assert!(
            harness.query_by_label_contains(EMPTY_CONTENT_MESSAGE).is_some(),
            "The empty-content message should be rendered in the preview"
        );
    }

    let requests = ctx
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    assert!(
        requests.iter().all(|r| r.url.path() != "/api/v1/qr/generate"),
        "Validation failure must not reach the generate endpoint"
    );
}
