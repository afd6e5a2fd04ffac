//! Landing page: hero copy, feature list and the jump into the generator.

use crate::{state::State, widgets};
use quickqr_business::Route;
use egui::{Response, RichText, Ui};

const FEATURES: [(&str, &str); 3] = [
    (
        "Eight content types",
        "URLs, plain text, contacts, WiFi credentials, email, phone, SMS and rich content.",
    ),
    (
        "Custom styling",
        "Pick colors, size, border and error correction before generating.",
    ),
    (
        "AI assistance",
        "Get content suggestions and analysis from the built-in assistant.",
    ),
];

pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("QuickQR");
        ui.label("Generate QR codes for anything, rendered by the QuickQR service.");
        ui.add_space(16.0);

        if ui.button("Start Creating").clicked() {
            state.ctx.update::<Route>(|route| *route = Route::Generator);
        }

        ui.add_space(24.0);
        for (title, text) in FEATURES {
            ui.strong(title);
            ui.label(RichText::new(text).weak());
            ui.add_space(8.0);
        }

        ui.add_space(16.0);
        widgets::powered_by_egui_and_eframe(ui);
    })
    .response
}

#[cfg(test)]
mod home_page_test {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable as _;

    #[test]
    fn test_start_creating_switches_to_generator() {
        let state = State::test("http://127.0.0.1:1".to_owned());
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                home_page(state, ui);
            },
            state,
        );
        harness.step();

        // The tagline is unique; "QuickQR" alone also matches the heading.
        assert!(
            harness
                .query_by_label_contains("Generate QR codes for anything")
                .is_some()
        );

        harness.get_by_label("Start Creating").click();
        harness.step();

        assert_eq!(*harness.state().ctx.state::<Route>(), Route::Generator);
    }
}
