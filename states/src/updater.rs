use std::any::{Any, TypeId};

/// Write handle for publishing new state/compute values.
///
/// Cloneable and `Send`, so it can be moved into HTTP completion callbacks.
/// Values land in the owning `StateCtx` on the next `sync_computes()`.
#[derive(Clone, Debug)]
pub struct Updater {
    sender: flume::Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(sender: flume::Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { sender }
    }

    /// Queue a replacement value for the registered state or compute of
    /// type `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .sender
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            // The ctx was dropped (app shutdown); nothing left to update.
            log::warn!(
                "updater: dropping {} update, context is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
