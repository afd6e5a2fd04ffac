use quickqr_business::{
    AiHealth, AnalyzeCompute, AnalyzeContentCommand, ApiStatus, BusinessConfig,
    ErrorCorrectionLevelsCompute, FetchErrorCorrectionLevelsCommand, FetchQrTypesCommand,
    FetchSuggestionsCommand, GenerateQrCommand, GenerateQrCompute, GenerateQrInput,
    QrTypesCompute, Route, SuggestionsCompute, UrlValidationCompute, ValidateUrlCommand,
};
use quickqr_states::{StateCtx, Time};

use crate::widgets::QrPreviewState;

/// The main application state.
///
/// `ctx` holds every registered state/compute/command; `preview` holds the
/// decoded QR texture, which cannot cross the updater channel and therefore
/// lives outside the registry.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Texture cache for the rendered QR preview.
    pub preview: QrPreviewState,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State pointed at a mock server, for integration tests.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
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

        debug_assert!(
            ctx.verify_deps().is_ok(),
            "compute dependencies must form a DAG"
        );

        Self {
            ctx,
            preview: QrPreviewState::default(),
        }
    }
}
