use quickqr_states::{State, state_assign_impl};
use std::any::Any;
use ustr::Ustr;

/// Backend endpoint configuration.
///
/// The base URL is selected at compile time from the `env_*` features; tests
/// replace it with a mock server URL via [`BusinessConfig::new`]. On wasm the
/// app is served next to the API, so the base stays relative.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Versioned API root, e.g. `https://quickqr.fly.dev/api/v1`.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api/v1")
        } else {
            Ustr::from(&format!("{}/api/v1", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://quickqr-test.fly.dev".to_owned()
            } else if cfg!(feature = "env_pr") {
                "https://quickqr-pr.fly.dev".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://quickqr-nightly.fly.dev".to_owned()
            } else {
                "https://quickqr.fly.dev".to_owned()
            },
        }
    }
}

impl State for BusinessConfig {
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
