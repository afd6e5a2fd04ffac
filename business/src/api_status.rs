//! Periodic health polls for the backend and its AI subsystem.
//!
//! Both computes depend on [`Time`] (ticked every frame) and re-check their
//! endpoint at most every five minutes.

use std::any::{Any, TypeId};

use chrono::{DateTime, Utc};
use log::{error, info};
use quickqr_states::{Compute, ComputeDeps, Dep, Time, Updater, assign_impl};

use crate::BusinessConfig;

/// Minutes between health checks.
const CHECK_INTERVAL_MINUTES: i64 = 5;

#[derive(Default, Debug)]
pub struct ApiStatus {
    last_update_time: Option<DateTime<Utc>>,
    // if exists error, the api is unavailable
    last_error: Option<String>,
}

pub enum ApiAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

impl ApiStatus {
    pub fn api_availability(&self) -> ApiAvailability<'_> {
        match (self.last_update_time, &self.last_error) {
            (Some(time), None) => ApiAvailability::Available(time),
            (Some(time), Some(err)) => ApiAvailability::Unavailable((time, err.as_str())),
            _ => ApiAvailability::Unknown,
        }
    }
}

fn should_fetch(last_update_time: Option<&DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_update_time {
        Some(last_update_time) => {
            let since_update = now.signed_duration_since(*last_update_time);
            since_update.num_minutes() >= CHECK_INTERVAL_MINUTES
        }
        None => true,
    }
}

impl Compute for ApiStatus {
    fn deps(&self) -> ComputeDeps {
        const IDS: [TypeId; 1] = [TypeId::of::<Time>()];
        (&IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let now = deps.get_state_ref::<Time>().as_ref().to_utc();
        if !should_fetch(self.last_update_time.as_ref(), now) {
            return;
        }

        let config = deps.get_state_ref::<BusinessConfig>();
        let request = ehttp::Request::get(format!("{}/health", config.api_url()));

        info!("Checking API health at {now:?}");
        ehttp::fetch(request, move |res| match res {
            Ok(response) => {
                if response.status == 200 {
                    info!("Backend available, checked at {now:?}");
                    updater.set(ApiStatus {
                        last_update_time: Some(now),
                        last_error: None,
                    });
                } else {
                    updater.set(ApiStatus {
                        last_update_time: Some(now),
                        last_error: Some(format!("status {}", response.status)),
                    });
                }
            }
            Err(err) => {
                error!("API health check failed: {err:?}");
                updater.set(ApiStatus {
                    last_update_time: Some(now),
                    last_error: Some(err.to_string()),
                });
            }
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Health of the AI suggestion subsystem, polled from `/ai/health`.
#[derive(Default, Debug)]
pub struct AiHealth {
    last_update_time: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

pub enum AiHealthAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

impl AiHealth {
    pub fn availability(&self) -> AiHealthAvailability<'_> {
        match (self.last_update_time, &self.last_error) {
            (Some(time), None) => AiHealthAvailability::Available(time),
            (Some(time), Some(err)) => AiHealthAvailability::Unavailable((time, err.as_str())),
            _ => AiHealthAvailability::Unknown,
        }
    }
}

impl Compute for AiHealth {
    fn deps(&self) -> ComputeDeps {
        const IDS: [TypeId; 1] = [TypeId::of::<Time>()];
        (&IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let now = deps.get_state_ref::<Time>().as_ref().to_utc();
        if !should_fetch(self.last_update_time.as_ref(), now) {
            return;
        }

        let config = deps.get_state_ref::<BusinessConfig>();
        let request = ehttp::Request::get(format!("{}/ai/health", config.api_url()));

        ehttp::fetch(request, move |res| match res {
            Ok(response) => {
                if response.status == 200 {
                    updater.set(AiHealth {
                        last_update_time: Some(now),
                        last_error: None,
                    });
                } else {
                    updater.set(AiHealth {
                        last_update_time: Some(now),
                        last_error: Some(format!("status {}", response.status)),
                    });
                }
            }
            Err(err) => {
                error!("AI health check failed: {err:?}");
                updater.set(AiHealth {
                    last_update_time: Some(now),
                    last_error: Some(err.to_string()),
                });
            }
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
