//! Static about page.

use crate::widgets;
use egui::{Response, RichText, Ui};

pub fn about_page(ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("About QuickQR");
        ui.add_space(8.0);

        ui.label(
            "QuickQR is a client for the QuickQR generation service. The app \
             gathers your content and styling choices and the backend renders \
             the QR symbol; nothing you enter is stored by this application.",
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Generation, URL validation and AI suggestions are provided by \
                 the QuickQR REST API.",
            )
            .weak(),
        );

        ui.add_space(16.0);
        widgets::powered_by_egui_and_eframe(ui);
    })
    .response
}
