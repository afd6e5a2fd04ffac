//! The QR generator form.
//!
//! Edits [`GenerateQrInput`] and dispatches [`GenerateQrCommand`] on submit.
//! The type and error-correction selectors prefer the lists served by the
//! backend and fall back to the built-in enums until those land.

use crate::utils::colors::COLOR_RED;
use crate::widgets::color_picker;
use quickqr_business::{
    ErrorCorrection, ErrorCorrectionLevelsCompute, GenerateQrCommand, GenerateQrCompute,
    GenerateQrInput, QrType, QrTypesCompute, UrlValidationCompute, ValidateUrlCommand,
    ValidationStatus,
};
use quickqr_states::StateCtx;
use egui::{Response, RichText, Ui};

/// Selectable QR types: the fetched list when available, the enum otherwise.
fn type_options(state_ctx: &StateCtx) -> Vec<QrType> {
    state_ctx
        .cached::<QrTypesCompute>()
        .and_then(|c| c.status.options())
        .map(|options| {
            options
                .iter()
                .filter_map(|option| QrType::from_value(&option.value))
                .collect::<Vec<_>>()
        })
        .filter(|options| !options.is_empty())
        .unwrap_or_else(|| QrType::ALL.to_vec())
}

fn level_options(state_ctx: &StateCtx) -> Vec<ErrorCorrection> {
    state_ctx
        .cached::<ErrorCorrectionLevelsCompute>()
        .and_then(|c| c.status.options())
        .map(|options| {
            options
                .iter()
                .filter_map(|option| ErrorCorrection::from_value(&option.value))
                .collect::<Vec<_>>()
        })
        .filter(|options| !options.is_empty())
        .unwrap_or_else(|| ErrorCorrection::ALL.to_vec())
}

/// Renders the generator form and dispatches commands for submit/validate.
pub fn qr_form(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let types = type_options(state_ctx);
    let levels = level_options(state_ctx);
    let pending = state_ctx
        .cached::<GenerateQrCompute>()
        .is_some_and(|c| c.status.is_pending());

    let mut input = state_ctx.state::<GenerateQrInput>().clone();
    let mut generate = false;
    let mut validate = false;

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("Content type");
                egui::ComboBox::from_id_salt("qr_type")
                    .selected_text(input.qr_type.label())
                    .show_ui(ui, |ui| {
                        for qr_type in &types {
                            ui.selectable_value(&mut input.qr_type, *qr_type, qr_type.label());
                        }
                    });
            });
            ui.label(RichText::new(input.qr_type.description()).weak());

            ui.add_space(8.0);

            ui.add(
                egui::TextEdit::multiline(&mut input.content)
                    .hint_text(input.qr_type.placeholder())
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            if input.qr_type == QrType::Url {
                url_check_row(state_ctx, ui, &mut validate);
            }

            ui.add_space(8.0);

            ui.collapsing("Advanced Options", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Error correction");
                    egui::ComboBox::from_id_salt("error_correction")
                        .selected_text(input.error_correction.label())
                        .show_ui(ui, |ui| {
                            for level in &levels {
                                ui.selectable_value(
                                    &mut input.error_correction,
                                    *level,
                                    level.label(),
                                );
                            }
                        });
                });

                ui.add(egui::Slider::new(&mut input.size, 1..=40).text("Size"));
                ui.add(egui::Slider::new(&mut input.border, 0..=10).text("Border"));

                ui.add_space(4.0);
                color_picker(ui, &mut input.foreground_color, &mut input.background_color);

                if input.qr_type == QrType::Content {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Title");
                        ui.text_edit_singleline(&mut input.title);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Description");
                        ui.text_edit_singleline(&mut input.description);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Logo URL");
                        ui.text_edit_singleline(&mut input.logo_url);
                    });
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                // Stays enabled with empty content: the command reports the
                // validation error, which the preview renders.
                if ui
                    .add_enabled(!pending, egui::Button::new("Generate QR Code"))
                    .clicked()
                {
                    generate = true;
                }
                if pending {
                    ui.spinner();
                }
            });
        })
        .response;

    if input != *state_ctx.state::<GenerateQrInput>() {
        *state_ctx.state_mut::<GenerateQrInput>() = input;
    }

    if validate {
        state_ctx.dispatch::<ValidateUrlCommand>();
    }
    if generate {
        state_ctx.dispatch::<GenerateQrCommand>();
    }

    response
}

/// "Check URL" button plus the latest validation verdict.
fn url_check_row(state_ctx: &StateCtx, ui: &mut Ui, validate: &mut bool) {
    ui.horizontal(|ui| {
        if ui.small_button("Check URL").clicked() {
            *validate = true;
        }

        let status = state_ctx
            .cached::<UrlValidationCompute>()
            .map(|c| c.status.clone())
            .unwrap_or_default();
        match &status {
            ValidationStatus::Idle => {}
            ValidationStatus::Pending => {
                ui.spinner();
            }
            ValidationStatus::Success(validation) if validation.is_valid => {
                ui.colored_label(crate::utils::colors::COLOR_GREEN, "URL looks valid");
            }
            ValidationStatus::Success(_) => {
                ui.colored_label(COLOR_RED, "URL may be invalid");
            }
            ValidationStatus::Error(message) => {
                ui.colored_label(COLOR_RED, message);
            }
        }
    });

    if let Some(validation) = state_ctx
        .cached::<UrlValidationCompute>()
        .and_then(|c| c.status.validation())
        .filter(|v| !v.is_valid)
    {
        for suggestion in &validation.suggestions {
            ui.label(RichText::new(suggestion).weak());
        }
    }
}
