mod ai_suggestions;
pub mod api_status;
mod color_picker;
mod env_version;
mod qr_form;
mod qr_preview;

pub use ai_suggestions::ai_suggestions;
pub use api_status::api_status;
pub use color_picker::color_picker;
pub use env_version::env_version;
pub use qr_form::qr_form;
pub use qr_preview::{QrPreviewState, qr_preview};

pub fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
