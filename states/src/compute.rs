use std::any::{Any, TypeId};
use std::fmt::Debug;

use crate::{Dep, Updater};

/// Dependency declaration of a compute: `(state TypeIds, compute TypeIds)`.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived value.
///
/// `compute()` runs when one of the declared dependencies was marked dirty
/// (and once right after registration). A compute that only caches the result
/// of an explicit command keeps `compute()` a no-op and declares no
/// dependencies; the command fills it through the [`Updater`].
pub trait Compute: Debug {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes, mirrors
/// [`crate::state_assign_impl`].
pub fn assign_impl<T: 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => {
            log::error!(
                "assign_box: payload is not a {}",
                std::any::type_name::<T>()
            );
        }
    }
}
