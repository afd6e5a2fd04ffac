use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};
use quickqr_business::{AiHealth, AiHealthAvailability, ApiAvailability, ApiStatus};
use quickqr_states::StateCtx;
use egui::{Color32, Response, Ui};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

/// Cached UI version string to avoid repeated computation
fn ui_version() -> &'static str {
    use std::sync::OnceLock;
    static UI_VERSION: OnceLock<String> = OnceLock::new();
    UI_VERSION.get_or_init(quickqr_business::version_info::format_env_version)
}

fn format_tooltip(service: &str, status: &str) -> String {
    format!("UI: {}\n{service}: {status}", ui_version())
}

/// Renders a single status dot with tooltip using a drawn circle
fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );

    let center = rect.center();
    ui.painter()
        .circle(center, STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);

    response.on_hover_text(tooltip_text)
}

/// Get the backend API status dot info (tooltip and color)
fn backend_status_info(state_ctx: &StateCtx) -> (String, Color32) {
    match state_ctx
        .cached::<ApiStatus>()
        .map(|v| v.api_availability())
    {
        Some(ApiAvailability::Available(checked)) => (
            format_tooltip("API", &format!("healthy ({})", checked.format("%H:%M UTC"))),
            COLOR_GREEN,
        ),
        Some(ApiAvailability::Unavailable((_, err))) => {
            (format_tooltip("API", err), COLOR_RED)
        }
        _ => (format_tooltip("API", "checking"), COLOR_AMBER),
    }
}

/// Get the AI subsystem status dot info (tooltip and color)
fn ai_status_info(state_ctx: &StateCtx) -> (String, Color32) {
    match state_ctx.cached::<AiHealth>().map(|v| v.availability()) {
        Some(AiHealthAvailability::Available(checked)) => (
            format_tooltip("AI", &format!("healthy ({})", checked.format("%H:%M UTC"))),
            COLOR_GREEN,
        ),
        Some(AiHealthAvailability::Unavailable((_, err))) => {
            (format_tooltip("AI", err), COLOR_RED)
        }
        _ => (format_tooltip("AI", "checking"), COLOR_AMBER),
    }
}

/// Displays the API status indicators centered in the current row.
///
/// Two dots: one for the backend API (`/health`), one for the AI subsystem
/// (`/ai/health`). Each dot has a tooltip with the status details and the
/// UI version.
pub fn api_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (api_tooltip, api_color) = backend_status_info(state_ctx);
    let (ai_tooltip, ai_color) = ai_status_info(state_ctx);

    ui.horizontal(|ui| {
        let response = status_dot(ui, api_tooltip, api_color);

        ui.add_space(4.0);
        status_dot(ui, ai_tooltip, ai_color);

        response
    })
    .inner
}
