//! QR generation form state and the command that submits it.
//!
//! The form fields live in [`GenerateQrInput`]; pressing Generate dispatches
//! [`GenerateQrCommand`], which validates the input, posts it to
//! `/qr/generate` and publishes the outcome into [`GenerateQrCompute`].

use std::any::Any;

use crate::{BusinessConfig, ErrorCorrection, QrCodeRequest, QrCodeResponse, QrType};
use log::{error, info};
use quickqr_states::{
    Command, Compute, ComputeDeps, Dep, State, Updater, assign_impl, state_assign_impl,
};

/// Validation message shown when Generate is pressed with no content.
pub const EMPTY_CONTENT_MESSAGE: &str = "Please enter some content for your QR code";

/// Editable state of the generator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateQrInput {
    pub content: String,
    pub qr_type: QrType,
    pub size: u32,
    pub error_correction: ErrorCorrection,
    pub border: u32,
    pub foreground_color: String,
    pub background_color: String,
    /// Only sent for the `content` type; empty means absent.
    pub title: String,
    pub description: String,
    pub logo_url: String,
}

impl Default for GenerateQrInput {
    fn default() -> Self {
        let request = QrCodeRequest::default();
        Self {
            content: String::new(),
            qr_type: request.qr_type,
            size: request.size,
            error_correction: request.error_correction,
            border: request.border,
            foreground_color: request.foreground_color,
            background_color: request.background_color,
            title: String::new(),
            description: String::new(),
            logo_url: String::new(),
        }
    }
}

impl GenerateQrInput {
    /// Assemble the wire request. Out-of-range values are clamped instead of
    /// rejected; empty optional fields are dropped.
    pub fn to_request(&self) -> QrCodeRequest {
        let non_empty = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        };
        QrCodeRequest {
            content: self.content.trim().to_owned(),
            qr_type: self.qr_type,
            size: self.size.clamp(1, 40),
            error_correction: self.error_correction,
            border: self.border.min(10),
            foreground_color: self.foreground_color.clone(),
            background_color: self.background_color.clone(),
            logo_url: non_empty(&self.logo_url),
            title: non_empty(&self.title),
            description: non_empty(&self.description),
        }
    }
}

impl State for GenerateQrInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Progress of the last generation request.
#[derive(Debug, Clone, Default)]
pub enum GenerateStatus {
    /// Nothing generated yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// The backend rendered a code.
    Success(QrCodeResponse),
    /// Validation or request failure.
    Error(String),
}

impl GenerateStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn response(&self) -> Option<&QrCodeResponse> {
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

/// Compute-shaped cache for the generation result.
///
/// Intentionally a `Compute` with a no-op `compute()` so it can be read
/// through the normal caching path and updated via `Updater::set(...)` from
/// [`GenerateQrCommand`].
#[derive(Default, Debug)]
pub struct GenerateQrCompute {
    pub status: GenerateStatus,
}

impl Compute for GenerateQrCompute {
    fn deps(&self) -> ComputeDeps {
        // Cache updated by a command; no derived dependencies.
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; generation is an explicit user action.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Extracts the backend's error message from a response body, falling back
/// to a default message.
pub(crate) fn extract_error_message(response_bytes: &[u8], default: &str) -> String {
    serde_json::from_slice::<QrCodeResponse>(response_bytes)
        .map(|r| r.error.unwrap_or_else(|| default.to_owned()))
        .unwrap_or_else(|_| default.to_owned())
}

/// Manual-only command that submits the generator form.
///
/// ## Flow
///
/// 1. Validates that the content is non-empty (no request is sent otherwise)
/// 2. Sets status to `Pending`
/// 3. Makes HTTP POST to `/qr/generate` with the assembled request
/// 4. On success, sets status to `Success` with the rendered code
/// 5. On failure, sets status to `Error` with the backend's message
///
/// Dispatch explicitly via `ctx.dispatch::<GenerateQrCommand>()`.
#[derive(Default, Debug)]
pub struct GenerateQrCommand;

impl Command for GenerateQrCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<GenerateQrInput>();
        let config = deps.get_state_ref::<BusinessConfig>();

        let request_body = input.to_request();
        if request_body.content.is_empty() {
            info!("GenerateQrCommand: content is empty");
            updater.set(GenerateQrCompute {
                status: GenerateStatus::Error(EMPTY_CONTENT_MESSAGE.to_owned()),
            });
            return;
        }

        info!(
            "GenerateQrCommand: generating {} code, size {}",
            request_body.qr_type.value(),
            request_body.size
        );

        updater.set(GenerateQrCompute {
            status: GenerateStatus::Pending,
        });

        let url = format!("{}/qr/generate", config.api_url());
        let body = match serde_json::to_vec(&request_body) {
            Ok(body) => body,
            Err(e) => {
                error!("GenerateQrCommand: failed to serialize QrCodeRequest: {e}");
                updater.set(GenerateQrCompute {
                    status: GenerateStatus::Error(format!("Internal error: {e}")),
                });
                return;
            }
        };

        let mut request = ehttp::Request::post(&url, body);
        request.headers.insert("Content-Type", "application/json");

        ehttp::fetch(request, move |result| match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<QrCodeResponse>(&response.bytes) {
                        Ok(qr_response) => {
                            if qr_response.success {
                                info!(
                                    "GenerateQrCommand: generated code {:?}",
                                    qr_response.qr_id
                                );
                                updater.set(GenerateQrCompute {
                                    status: GenerateStatus::Success(qr_response),
                                });
                            } else {
                                let message = qr_response
                                    .error
                                    .unwrap_or_else(|| "Failed to generate QR code".to_owned());
                                info!("GenerateQrCommand: backend rejected request: {message}");
                                updater.set(GenerateQrCompute {
                                    status: GenerateStatus::Error(message),
                                });
                            }
                        }
                        Err(e) => {
                            error!("GenerateQrCommand: failed to parse QrCodeResponse: {e}");
                            updater.set(GenerateQrCompute {
                                status: GenerateStatus::Error(
                                    "Failed to parse server response".to_owned(),
                                ),
                            });
                        }
                    }
                } else if response.status == 400 || response.status == 422 {
                    let message = extract_error_message(&response.bytes, "Invalid request");
                    info!("GenerateQrCommand: bad request: {message}");
                    updater.set(GenerateQrCompute {
                        status: GenerateStatus::Error(message),
                    });
                } else {
                    let message = format!("Server error (status {})", response.status);
                    error!("GenerateQrCommand: {message}");
                    updater.set(GenerateQrCompute {
                        status: GenerateStatus::Error(message),
                    });
                }
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("GenerateQrCommand: {message}");
                updater.set(GenerateQrCompute {
                    status: GenerateStatus::Error(message),
                });
            }
        });
    }
}
