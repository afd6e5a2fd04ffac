use std::any::TypeId;
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view over the registered states and computes, handed to
/// [`Compute::compute`] and [`crate::Command::run`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// Borrow a registered state.
    ///
    /// Panics when `T` was never registered; that is a wiring bug, not a
    /// runtime condition.
    pub fn get_state_ref<T: State + 'static>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!("state not registered: {}", std::any::type_name::<T>())
            })
    }

    /// Borrow a registered compute, if present.
    pub fn get_compute_ref<T: Compute + 'static>(&self) -> Option<&'a T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }
}
