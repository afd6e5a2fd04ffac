use std::fmt::Debug;

use crate::{Dep, Updater};

/// A manual side effect, dispatched explicitly via `StateCtx::dispatch`.
///
/// Commands never run on their own. They read registered states and computes
/// through [`Dep`] and publish results through the [`Updater`]; network
/// completion callbacks move the `Updater` into the fetch closure.
pub trait Command: Debug {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
