//! AI assistant panel: content suggestions and analysis.
//!
//! "Get Suggestions" dispatches `FetchSuggestionsCommand`; each returned
//! suggestion carries an Apply button that copies the text back into the
//! content field. "Analyze" dispatches `AnalyzeContentCommand` and shows the
//! returned content facts.

use crate::utils::colors::COLOR_RED;
use quickqr_business::{
    AiHealth, AiHealthAvailability, AnalyzeCompute, AnalyzeContentCommand, AnalyzeStatus,
    FetchSuggestionsCommand, GenerateQrInput, SuggestionsCompute, SuggestionsStatus,
};
use quickqr_states::StateCtx;
use egui::{Response, RichText, Ui};

pub fn ai_suggestions(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let suggestions_status = state_ctx
        .cached::<SuggestionsCompute>()
        .map(|c| c.status.clone())
        .unwrap_or_default();
    let analyze_status = state_ctx
        .cached::<AnalyzeCompute>()
        .map(|c| c.status.clone())
        .unwrap_or_default();
    let ai_offline = matches!(
        state_ctx.cached::<AiHealth>().map(|h| h.availability()),
        Some(AiHealthAvailability::Unavailable(_))
    );

    let mut apply: Option<String> = None;
    let mut fetch = false;
    let mut analyze = false;

    let response = ui
        .vertical(|ui| {
            ui.strong("AI Assistant");
            if ai_offline {
                ui.label(RichText::new("AI assistant is currently unavailable").weak());
            }

            ui.horizontal(|ui| {
                let busy = suggestions_status.is_pending() || analyze_status.is_pending();
                if ui
                    .add_enabled(!busy, egui::Button::new("Get Suggestions"))
                    .clicked()
                {
                    fetch = true;
                }
                if ui.add_enabled(!busy, egui::Button::new("Analyze")).clicked() {
                    analyze = true;
                }
                if busy {
                    ui.spinner();
                }
            });

            show_suggestions(&suggestions_status, ui, &mut apply);
            show_analysis(&analyze_status, ui);
        })
        .response;

    if let Some(content) = apply {
        state_ctx.update::<GenerateQrInput>(|input| input.content = content);
    }
    if fetch {
        state_ctx.dispatch::<FetchSuggestionsCommand>();
    }
    if analyze {
        state_ctx.dispatch::<AnalyzeContentCommand>();
    }

    response
}

fn show_suggestions(status: &SuggestionsStatus, ui: &mut Ui, apply: &mut Option<String>) {
    match status {
        SuggestionsStatus::Idle => {
            ui.label(RichText::new("Suggestions for your content appear here.").weak());
        }
        SuggestionsStatus::Pending => {}
        SuggestionsStatus::Error(message) => {
            ui.colored_label(COLOR_RED, message);
        }
        SuggestionsStatus::Success(response) => {
            ui.label(format!(
                "Confidence: {:.0}%",
                response.confidence_score * 100.0
            ));

            if let Some(optimized) = &response.optimized_content {
                ui.horizontal(|ui| {
                    ui.label(optimized);
                    if ui.small_button("Use optimized").clicked() {
                        *apply = Some(optimized.clone());
                    }
                });
            }

            for (index, suggestion) in response.suggestions.iter().enumerate() {
                ui.push_id(index, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(suggestion);
                        if ui.small_button("Apply").clicked() {
                            *apply = Some(suggestion.clone());
                        }
                    });
                });
            }
        }
    }
}

fn show_analysis(status: &AnalyzeStatus, ui: &mut Ui) {
    let AnalyzeStatus::Success(analysis) = status else {
        if let AnalyzeStatus::Error(message) = status {
            ui.colored_label(COLOR_RED, message);
        }
        return;
    };

    ui.add_space(4.0);
    ui.label(RichText::new(format!("Length: {} characters", analysis.length)).weak());
    if analysis.is_url {
        ui.label(RichText::new("Looks like a URL").weak());
    }
    if analysis.has_special_chars {
        ui.label(RichText::new("Contains special characters").weak());
    }
    for suggestion in &analysis.suggestions {
        ui.label(RichText::new(suggestion).weak());
    }
}

#[cfg(test)]
mod ai_suggestions_widget_test {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable as _;
    use quickqr_business::AiSuggestionResponse;

    fn ctx_with_suggestions(status: SuggestionsStatus) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(GenerateQrInput::default());
        ctx.record_compute(SuggestionsCompute { status });
        ctx.record_compute(AnalyzeCompute::default());
        ctx
    }

    #[test]
    fn test_suggestions_listed_with_apply_buttons() {
        let status = SuggestionsStatus::Success(AiSuggestionResponse {
            suggestions: vec!["Use HTTPS".to_owned()],
            optimized_content: None,
            confidence_score: 0.85,
        });
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                ai_suggestions(state_ctx, ui);
            },
            ctx_with_suggestions(status),
        );
        harness.step();

        assert!(harness.query_by_label_contains("Use HTTPS").is_some());
        assert!(harness.query_by_label_contains("Confidence: 85%").is_some());
        assert!(harness.query_by_label_contains("Apply").is_some());
    }

    #[test]
    fn test_apply_copies_suggestion_into_content() {
        let status = SuggestionsStatus::Success(AiSuggestionResponse {
            suggestions: vec!["https://example.com".to_owned()],
            optimized_content: None,
            confidence_score: 0.5,
        });
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                ai_suggestions(state_ctx, ui);
            },
            ctx_with_suggestions(status),
        );
        harness.step();

        harness.get_by_label("Apply").click();
        harness.step();

        assert_eq!(
            harness.state().state::<GenerateQrInput>().content,
            "https://example.com"
        );
    }

    #[test]
    fn test_error_status_is_shown() {
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                ai_suggestions(state_ctx, ui);
            },
            ctx_with_suggestions(SuggestionsStatus::Error("Server error".to_owned())),
        );
        harness.step();

        assert!(harness.query_by_label_contains("Server error").is_some());
    }
}
