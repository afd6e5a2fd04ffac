use quickqr_business::{FetchErrorCorrectionLevelsCommand, FetchQrTypesCommand, Route};
use quickqr_states::Time;

use crate::{pages, state::State, widgets};

pub struct QuickQrApp {
    pub state: State,
}

impl QuickQrApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        // The option lists are fetched once; the form falls back to the
        // built-in enum lists until they land.
        state.ctx.dispatch::<FetchQrTypesCommand>();
        state.ctx.dispatch::<FetchErrorCorrectionLevelsCommand>();

        Self { state }
    }
}

impl eframe::App for QuickQrApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        // Advance the clock so interval-gated health polls can re-run.
        self.state.ctx.update::<Time>(|time| time.tick());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let current = *self.state.ctx.state::<Route>();
                for route in [Route::Home, Route::Generator, Route::About] {
                    if ui.selectable_label(current == route, route.title()).clicked() {
                        self.state.ctx.update::<Route>(|r| *r = route);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                    widgets::api_status(&self.state.ctx, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match *self.state.ctx.state::<Route>() {
                Route::Home => {
                    pages::home_page(&mut self.state, ui);
                }
                Route::Generator => {
                    pages::generator_page(&mut self.state, ui);
                }
                Route::About => {
                    pages::about_page(ui);
                }
            }
        });

        // Run background jobs
        self.state.ctx.run_all_dirty();
    }
}
