//! Preview of the last generated QR code.
//!
//! Renders one of four states from [`GenerateQrCompute`]: a dashed empty
//! frame before the first generation, a spinner while the request is in
//! flight, the error message on failure, or the decoded PNG with
//! download/copy actions on success.

use crate::utils::colors::COLOR_RED;
use crate::utils::qr_image;
use quickqr_business::{GenerateQrCompute, GenerateStatus, QrCodeResponse};
use quickqr_states::StateCtx;
use egui::{
    Align2, Context, FontId, Response, Sense, Stroke, StrokeKind, TextureHandle, TextureOptions,
    Ui,
};

/// Side length of the preview area (in points).
const PREVIEW_SIZE: f32 = 280.0;

/// Texture cache for the rendered QR code.
///
/// Holds the decoded texture together with the data URL it was decoded from,
/// so the PNG is decoded once per generation rather than once per frame.
#[derive(Default)]
pub struct QrPreviewState {
    texture: Option<TextureHandle>,
    png_bytes: Vec<u8>,
    decoded_for: Option<String>,
    decode_error: Option<String>,
}

impl std::fmt::Debug for QrPreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrPreviewState")
            .field("decoded_for", &self.decoded_for)
            .field("decode_error", &self.decode_error)
            .field("png_len", &self.png_bytes.len())
            .finish_non_exhaustive()
    }
}

impl QrPreviewState {
    /// Decode `data_url` into a texture unless it is already the cached one.
    fn ensure_decoded(&mut self, ctx: &Context, data_url: &str) {
        if self.decoded_for.as_deref() == Some(data_url) {
            return;
        }
        self.decoded_for = Some(data_url.to_owned());

        match qr_image::decode_data_url(data_url) {
            Ok(decoded) => {
                // NEAREST keeps module edges crisp when the symbol is scaled.
                self.texture = Some(ctx.load_texture(
                    "qr_preview",
                    decoded.image,
                    TextureOptions::NEAREST,
                ));
                self.png_bytes = decoded.png_bytes;
                self.decode_error = None;
            }
            Err(e) => {
                log::warn!("qr_preview: failed to decode QR payload: {e}");
                self.texture = None;
                self.png_bytes.clear();
                self.decode_error = Some(e.to_string());
            }
        }
    }

    /// True when the current texture decoded cleanly.
    pub fn has_image(&self) -> bool {
        self.texture.is_some()
    }
}

/// Renders the preview pane for the current generation status.
pub fn qr_preview(state_ctx: &StateCtx, preview: &mut QrPreviewState, ui: &mut Ui) -> Response {
    let status = state_ctx
        .cached::<GenerateQrCompute>()
        .map(|c| c.status.clone())
        .unwrap_or_default();

    ui.vertical(|ui| {
        ui.strong("Preview");
        ui.add_space(4.0);

        match &status {
            GenerateStatus::Idle => empty_state(ui),
            GenerateStatus::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating...");
                });
            }
            GenerateStatus::Error(message) => {
                ui.colored_label(COLOR_RED, message);
            }
            GenerateStatus::Success(response) => show_result(preview, response, ui),
        }
    })
    .response
}

/// Dashed placeholder frame shown before the first generation.
fn empty_state(ui: &mut Ui) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE), Sense::hover());
    let color = ui.visuals().weak_text_color();

    ui.painter().rect_stroke(
        rect,
        8.0,
        Stroke::new(1.0, color),
        StrokeKind::Inside,
    );
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Your QR code will appear here",
        FontId::default(),
        color,
    );
}

fn show_result(preview: &mut QrPreviewState, response: &QrCodeResponse, ui: &mut Ui) {
    let Some(data_url) = response.qr_code_data.as_deref() else {
        ui.colored_label(COLOR_RED, "Response contained no image data");
        return;
    };

    preview.ensure_decoded(ui.ctx(), data_url);

    if let Some(error) = &preview.decode_error {
        ui.colored_label(COLOR_RED, format!("Failed to display QR code: {error}"));
        return;
    }
    let Some(texture) = &preview.texture else {
        return;
    };

    ui.add(egui::Image::new(egui::load::SizedTexture::new(
        texture.id(),
        egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE),
    )));

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        #[cfg(not(target_arch = "wasm32"))]
        if ui.button("Download PNG").clicked() {
            save_png(&preview.png_bytes);
        }

        if ui.button("Copy Data").clicked() {
            ui.ctx().copy_text(data_url.to_owned());
        }
    });

    if let Some(view_url) = &response.view_url {
        ui.label(egui::RichText::new(format!("View: {view_url}")).weak());
    }
}

/// Native save dialog for the rendered PNG.
#[cfg(not(target_arch = "wasm32"))]
fn save_png(png_bytes: &[u8]) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name("qrcode.png")
        .add_filter("PNG image", &["png"])
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, png_bytes) {
        Ok(()) => log::info!("qr_preview: saved QR code to {}", path.display()),
        Err(e) => log::error!("qr_preview: failed to save {}: {e}", path.display()),
    }
}
