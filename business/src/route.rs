use std::any::Any;

use quickqr_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};

/// Which page the app currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Generator,
    About,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Generator => "Generator",
            Self::About => "About",
        }
    }
}

impl State for Route {
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
