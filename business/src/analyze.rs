//! Content analysis via the backend's `/ai/analyze` endpoint.

use std::any::Any;

use crate::generate::GenerateQrInput;
use crate::{AiSuggestionRequest, BusinessConfig};
use log::{error, info};
use quickqr_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};
use serde::Deserialize;

/// Response of `POST /ai/analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentAnalysis {
    pub length: usize,
    #[serde(default)]
    pub has_special_chars: bool,
    #[serde(default)]
    pub is_url: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub enum AnalyzeStatus {
    #[default]
    Idle,
    Pending,
    Success(ContentAnalysis),
    Error(String),
}

impl AnalyzeStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn analysis(&self) -> Option<&ContentAnalysis> {
        match self {
            Self::Success(analysis) => Some(analysis),
            _ => None,
        }
    }
}

/// Compute-shaped cache for the analysis result, filled by
/// [`AnalyzeContentCommand`].
#[derive(Default, Debug)]
pub struct AnalyzeCompute {
    pub status: AnalyzeStatus,
}

impl Compute for AnalyzeCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; analysis is requested explicitly.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that asks the backend to analyze the current content.
///
/// Dispatch explicitly via `ctx.dispatch::<AnalyzeContentCommand>()`.
#[derive(Default, Debug)]
pub struct AnalyzeContentCommand;

impl Command for AnalyzeContentCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<GenerateQrInput>();
        let config = deps.get_state_ref::<BusinessConfig>();

        let content = input.content.trim().to_owned();
        if content.is_empty() {
            updater.set(AnalyzeCompute {
                status: AnalyzeStatus::Idle,
            });
            return;
        }

        updater.set(AnalyzeCompute {
            status: AnalyzeStatus::Pending,
        });

        let url = format!("{}/ai/analyze", config.api_url());
        let body = match serde_json::to_vec(&AiSuggestionRequest {
            content,
            qr_type: input.qr_type,
            context: None,
        }) {
            Ok(body) => body,
            Err(e) => {
                error!("AnalyzeContentCommand: failed to serialize request: {e}");
                updater.set(AnalyzeCompute {
                    status: AnalyzeStatus::Error(format!("Internal error: {e}")),
                });
                return;
            }
        };

        let mut request = ehttp::Request::post(&url, body);
        request.headers.insert("Content-Type", "application/json");

        ehttp::fetch(request, move |result| match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<ContentAnalysis>(&response.bytes) {
                        Ok(analysis) => {
                            info!(
                                "AnalyzeContentCommand: analyzed {} chars",
                                analysis.length
                            );
                            updater.set(AnalyzeCompute {
                                status: AnalyzeStatus::Success(analysis),
                            });
                        }
                        Err(e) => {
                            error!("AnalyzeContentCommand: failed to parse response: {e}");
                            updater.set(AnalyzeCompute {
                                status: AnalyzeStatus::Error(
                                    "Failed to parse server response".to_owned(),
                                ),
                            });
                        }
                    }
                } else {
                    let message = format!("Server error (status {})", response.status);
                    error!("AnalyzeContentCommand: {message}");
                    updater.set(AnalyzeCompute {
                        status: AnalyzeStatus::Error(message),
                    });
                }
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("AnalyzeContentCommand: {message}");
                updater.set(AnalyzeCompute {
                    status: AnalyzeStatus::Error(message),
                });
            }
        });
    }
}
