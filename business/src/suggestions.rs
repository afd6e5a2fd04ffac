//! AI content suggestions for the current form input.

use std::any::Any;

use crate::generate::GenerateQrInput;
use crate::{AiSuggestionRequest, AiSuggestionResponse, BusinessConfig};
use log::{error, info};
use quickqr_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};

/// Progress of the last suggestion request.
#[derive(Debug, Clone, Default)]
pub enum SuggestionsStatus {
    #[default]
    Idle,
    Pending,
    Success(AiSuggestionResponse),
    Error(String),
}

impl SuggestionsStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn response(&self) -> Option<&AiSuggestionResponse> {
        match self {
            Self::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Compute-shaped cache for suggestion results, filled by
/// [`FetchSuggestionsCommand`].
#[derive(Default, Debug)]
pub struct SuggestionsCompute {
    pub status: SuggestionsStatus,
}

impl Compute for SuggestionsCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; suggestions are requested explicitly.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that requests AI suggestions for the current content.
///
/// Dispatch explicitly via `ctx.dispatch::<FetchSuggestionsCommand>()`.
#[derive(Default, Debug)]
pub struct FetchSuggestionsCommand;

impl Command for FetchSuggestionsCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<GenerateQrInput>();
        let config = deps.get_state_ref::<BusinessConfig>();

        let content = input.content.trim().to_owned();
        if content.is_empty() {
            info!("FetchSuggestionsCommand: content is empty");
            updater.set(SuggestionsCompute {
                status: SuggestionsStatus::Error(
                    "Enter some content to get suggestions".to_owned(),
                ),
            });
            return;
        }

        info!(
            "FetchSuggestionsCommand: requesting suggestions for {} content",
            input.qr_type.value()
        );

        updater.set(SuggestionsCompute {
            status: SuggestionsStatus::Pending,
        });

        let url = format!("{}/ai/suggestions", config.api_url());
        let body = match serde_json::to_vec(&AiSuggestionRequest {
            content,
            qr_type: input.qr_type,
            context: None,
        }) {
            Ok(body) => body,
            Err(e) => {
                error!("FetchSuggestionsCommand: failed to serialize request: {e}");
                updater.set(SuggestionsCompute {
                    status: SuggestionsStatus::Error(format!("Internal error: {e}")),
                });
                return;
            }
        };

        let mut request = ehttp::Request::post(&url, body);
        request.headers.insert("Content-Type", "application/json");

        ehttp::fetch(request, move |result| match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<AiSuggestionResponse>(&response.bytes) {
                        Ok(suggestions) => {
                            info!(
                                "FetchSuggestionsCommand: received {} suggestions",
                                suggestions.suggestions.len()
                            );
                            updater.set(SuggestionsCompute {
                                status: SuggestionsStatus::Success(suggestions),
                            });
                        }
                        Err(e) => {
                            error!("FetchSuggestionsCommand: failed to parse response: {e}");
                            updater.set(SuggestionsCompute {
                                status: SuggestionsStatus::Error(
                                    "Failed to parse server response".to_owned(),
                                ),
                            });
                        }
                    }
                } else {
                    let message = format!("Server error (status {})", response.status);
                    error!("FetchSuggestionsCommand: {message}");
                    updater.set(SuggestionsCompute {
                        status: SuggestionsStatus::Error(message),
                    });
                }
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("FetchSuggestionsCommand: {message}");
                updater.set(SuggestionsCompute {
                    status: SuggestionsStatus::Error(message),
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessors() {
        assert!(SuggestionsStatus::Pending.is_pending());
        assert!(SuggestionsStatus::Idle.response().is_none());

        let status = SuggestionsStatus::Success(AiSuggestionResponse {
            suggestions: vec!["Use HTTPS".to_owned()],
            optimized_content: None,
            confidence_score: 0.5,
        });
        assert_eq!(
            status.response().map(|r| r.suggestions.len()),
            Some(1)
        );
    }

    #[test]
    fn test_request_serialization_skips_missing_context() {
        let request = AiSuggestionRequest {
            content: "hello".to_owned(),
            qr_type: crate::QrType::Text,
            context: None,
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains("\"qr_type\":\"text\""));
        assert!(!json.contains("context"));
    }
}
