use std::any::Any;
use std::fmt::Debug;

/// A plain registered value.
///
/// States are mutated directly through `StateCtx::update` /
/// `StateCtx::state_mut`, or replaced wholesale through the [`crate::Updater`]
/// channel (which lands in `assign_box`).
pub trait State: Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and replace in place.
///
/// A type mismatch is a bug in the sender, not the receiver, so it is logged
/// and the current value is kept.
pub fn state_assign_impl<T: 'static>(this: &mut T, new_self: Box<dyn Any + Send>) {
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
