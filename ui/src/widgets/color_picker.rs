//! Foreground/background color pickers with a preset palette.
//!
//! Colors are kept as `#RRGGBB` strings (the backend's wire format) and run
//! through egui's srgb color button for editing.

use crate::utils::colors::{PRESET_PALETTE, format_hex_color, parse_hex_color};
use egui::{Color32, Response, Sense, Stroke, StrokeKind, Ui};

/// Side length of a preset swatch (in points).
const SWATCH_SIZE: f32 = 16.0;

pub fn color_picker(ui: &mut Ui, foreground: &mut String, background: &mut String) -> Response {
    ui.vertical(|ui| {
        hex_color_row(ui, "Foreground", foreground);
        hex_color_row(ui, "Background", background);
        preset_row(ui, foreground);
    })
    .response
}

/// Label + color button + editable hex field for one color.
fn hex_color_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);

        let mut rgb = parse_hex_color(value).unwrap_or([0, 0, 0]);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            *value = format_hex_color(rgb);
        }

        ui.add(egui::TextEdit::singleline(value).desired_width(72.0));
    });
}

/// Clickable swatches that set the foreground color.
fn preset_row(ui: &mut Ui, foreground: &mut String) {
    ui.horizontal_wrapped(|ui| {
        for hex in PRESET_PALETTE {
            let Some([r, g, b]) = parse_hex_color(hex) else {
                continue;
            };

            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            ui.painter().rect_filled(rect, 3.0, Color32::from_rgb(r, g, b));
            if foreground.eq_ignore_ascii_case(hex) {
                ui.painter().rect_stroke(
                    rect,
                    3.0,
                    Stroke::new(1.5, ui.visuals().strong_text_color()),
                    StrokeKind::Outside,
                );
            }

            if response.clicked() {
                *foreground = hex.to_owned();
            }
            response.on_hover_text(hex);
        }
    });
}
