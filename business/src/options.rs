//! Option lists served by the backend.
//!
//! The selectable QR types and error correction levels can be fetched from
//! `/qr/types` and `/qr/error-correction-levels`. The UI falls back to the
//! built-in [`crate::QrType`] / [`crate::ErrorCorrection`] lists until these
//! caches are filled.

use std::any::Any;

use crate::BusinessConfig;
use log::{error, info};
use quickqr_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};
use serde::Deserialize;

/// One selectable QR type, as served by `GET /qr/types`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QrTypeOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// One selectable error correction level, as served by
/// `GET /qr/error-correction-levels`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorCorrectionOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct QrTypesResponse {
    types: Vec<QrTypeOption>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorCorrectionLevelsResponse {
    levels: Vec<ErrorCorrectionOption>,
}

/// Progress of an option-list fetch.
#[derive(Debug, Clone, Default)]
pub enum OptionsStatus<T> {
    #[default]
    Idle,
    Pending,
    Success(Vec<T>),
    Error(String),
}

impl<T> OptionsStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn options(&self) -> Option<&[T]> {
        match self {
            Self::Success(options) => Some(options.as_slice()),
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

/// Compute-shaped cache for the QR type list, filled by
/// [`FetchQrTypesCommand`].
#[derive(Default, Debug)]
pub struct QrTypesCompute {
    pub status: OptionsStatus<QrTypeOption>,
}

impl Compute for QrTypesCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; fetched once at startup by a command.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Compute-shaped cache for the error correction level list, filled by
/// [`FetchErrorCorrectionLevelsCommand`].
#[derive(Default, Debug)]
pub struct ErrorCorrectionLevelsCompute {
    pub status: OptionsStatus<ErrorCorrectionOption>,
}

impl Compute for ErrorCorrectionLevelsCompute {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op; fetched once at startup by a command.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that fetches the selectable QR types.
#[derive(Default, Debug)]
pub struct FetchQrTypesCommand;

impl Command for FetchQrTypesCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let config = deps.get_state_ref::<BusinessConfig>();

        updater.set(QrTypesCompute {
            status: OptionsStatus::Pending,
        });

        let url = format!("{}/qr/types", config.api_url());
        ehttp::fetch(ehttp::Request::get(&url), move |result| match result {
            Ok(response) if response.status == 200 => {
                match serde_json::from_slice::<QrTypesResponse>(&response.bytes) {
                    Ok(parsed) => {
                        info!("FetchQrTypesCommand: loaded {} types", parsed.types.len());
                        updater.set(QrTypesCompute {
                            status: OptionsStatus::Success(parsed.types),
                        });
                    }
                    Err(e) => {
                        error!("FetchQrTypesCommand: failed to parse response: {e}");
                        updater.set(QrTypesCompute {
                            status: OptionsStatus::Error(
                                "Failed to parse server response".to_owned(),
                            ),
                        });
                    }
                }
            }
            Ok(response) => {
                let message = format!("Server error (status {})", response.status);
                error!("FetchQrTypesCommand: {message}");
                updater.set(QrTypesCompute {
                    status: OptionsStatus::Error(message),
                });
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("FetchQrTypesCommand: {message}");
                updater.set(QrTypesCompute {
                    status: OptionsStatus::Error(message),
                });
            }
        });
    }
}

/// Manual-only command that fetches the selectable error correction levels.
#[derive(Default, Debug)]
pub struct FetchErrorCorrectionLevelsCommand;

impl Command for FetchErrorCorrectionLevelsCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let config = deps.get_state_ref::<BusinessConfig>();

        updater.set(ErrorCorrectionLevelsCompute {
            status: OptionsStatus::Pending,
        });

        let url = format!("{}/qr/error-correction-levels", config.api_url());
        ehttp::fetch(ehttp::Request::get(&url), move |result| match result {
            Ok(response) if response.status == 200 => {
                match serde_json::from_slice::<ErrorCorrectionLevelsResponse>(&response.bytes) {
                    Ok(parsed) => {
                        info!(
                            "FetchErrorCorrectionLevelsCommand: loaded {} levels",
                            parsed.levels.len()
                        );
                        updater.set(ErrorCorrectionLevelsCompute {
                            status: OptionsStatus::Success(parsed.levels),
                        });
                    }
                    Err(e) => {
                        error!("FetchErrorCorrectionLevelsCommand: failed to parse response: {e}");
                        updater.set(ErrorCorrectionLevelsCompute {
                            status: OptionsStatus::Error(
                                "Failed to parse server response".to_owned(),
                            ),
                        });
                    }
                }
            }
            Ok(response) => {
                let message = format!("Server error (status {})", response.status);
                error!("FetchErrorCorrectionLevelsCommand: {message}");
                updater.set(ErrorCorrectionLevelsCompute {
                    status: OptionsStatus::Error(message),
                });
            }
            Err(err) => {
                let message = format!("Network error: {err}");
                error!("FetchErrorCorrectionLevelsCommand: {message}");
                updater.set(ErrorCorrectionLevelsCompute {
                    status: OptionsStatus::Error(message),
                });
            }
        });
    }
}
