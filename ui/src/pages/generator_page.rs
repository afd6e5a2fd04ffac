//! Generator page: form and AI panel on the left, preview and tips on the
//! right.

use crate::{state::State, widgets};
use egui::{Response, RichText, Ui};
use egui_extras::{Size, StripBuilder};

const TIPS: [&str; 4] = [
    "Higher error correction keeps codes scannable when partially covered.",
    "Keep strong contrast between foreground and background colors.",
    "Shorter content produces a less dense, easier-to-scan symbol.",
    "Test the printed code with several devices before distributing it.",
];

pub fn generator_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Create Your QR Code");
        ui.add_space(8.0);

        StripBuilder::new(ui)
            .size(Size::relative(0.55))
            .size(Size::remainder())
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    widgets::qr_form(&mut state.ctx, ui);
                    ui.add_space(12.0);
                    ui.separator();
                    widgets::ai_suggestions(&mut state.ctx, ui);
                });
                strip.cell(|ui| {
                    let State { ctx, preview } = state;
                    widgets::qr_preview(ctx, preview, ui);
                    ui.add_space(12.0);
                    tips(ui);
                });
            });
    })
    .response
}

fn tips(ui: &mut Ui) {
    ui.group(|ui| {
        ui.strong("Tips");
        for tip in TIPS {
            ui.label(RichText::new(tip).weak());
        }
    });
}
