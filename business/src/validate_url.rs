//! URL validation via the backend's `/qr/validate-url` endpoint.

use std::any::Any;

use crate::generate::GenerateQrInput;
use crate::{BusinessConfig, QrType};
use log::{error, info};
use quickqr_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct ValidateUrlRequest {
    url: String,
}

/// Response of `POST /qr/validate-url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlValidation {
    pub url: String,
    pub is_valid: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub enum ValidationStatus {
    #[default]
    Idle,
    Pending,
    Success(UrlValidation),
    Error(String),
}

impl ValidationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn validation(&self) -> Option<&UrlValidation> {
        match self {
            Self::Success(validation) => Some(validation),
            _ => None,
        }
    }
}

/// Compute-shaped cache for the URL validation result, filled by
/// [`ValidateUrlCommand`].
#[derive(Default, Debug)]
pub struct UrlValidationCompute {
    pub status: ValidationStatus,
}

impl Compute for UrlValidationCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; validation is requested explicitly.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that validates the current content as a URL.
///
/// Only meaningful for the `url` type; dispatching with another type selected
/// resets the cache to `Idle`.
#[derive(Default, Debug)]
pub struct ValidateUrlCommand;

impl Command for ValidateUrlCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<GenerateQrInput>();
        let config = deps.get_state_ref::<BusinessConfig>();

        let url_content = input.content.trim().to_owned();
        if input.qr_type != QrType::Url || url_content.is_empty() {
            updater.set(UrlValidationCompute {
                status: ValidationStatus::Idle,
            });
            return;
        }

        info!("ValidateUrlCommand: validating URL");
        updater.set(UrlValidationCompute {
            status: ValidationStatus::Pending,
        });

        let url = format!("{}/qr/validate-url", config.api_url());
        let body = match serde_json::to_vec(&ValidateUrlRequest { url: url_content }) {
            Ok(body) => body,
            Err(e) => {
                error!("ValidateUrlCommand: failed to serialize request: {e}");
                updater.set(UrlValidationCompute {
                    status: ValidationStatus::Error(format!("Internal error: {e}")),
                });
                return;
            }
        };

        let mut request = ehttp::Request::post(&url, body);
        request.headers.insert("Content-Type", "application/json");

        ehttp::fetch(request, move |result| match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<UrlValidation>(&response.bytes) {
                        Ok(validation) => {
                            updater.set(UrlValidationCompute {
                                status: ValidationStatus::Success(validation),
                            });
                        }
                        Err(e) => {
                            error!("ValidateUrlCommand: failed to parse response: {e}");
                            updater.set(UrlValidationCompute {
                                status: ValidationStatus::Error(
                                    "Failed to parse server response".to_owned(),
                                ),
                            });
                        }
                    }
                } else {
                    let message = format!("Server error (status {})", response.status);
                    error!("ValidateUrlCommand: {message}");
                    updater.set(UrlValidationCompute {
                        status: ValidationStatus::Error(message),
                    });
                }
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("ValidateUrlCommand: {message}");
                updater.set(UrlValidationCompute {
                    status: ValidationStatus::Error(message),
                });
            }
        });
    }
}
