//! Reactive state runtime for the QuickQR application.
//!
//! The runtime is built from three kinds of registered values:
//!
//! - [`State`]: plain values mutated directly by the UI (inputs, routes, time).
//! - [`Compute`]: derived values keyed by the `TypeId`s they depend on.
//!   A compute re-runs when one of its dependencies was marked dirty.
//!   Computes that cache the result of an HTTP call implement a no-op
//!   `compute()` and are filled in through the [`Updater`] channel instead.
//! - [`Command`]: manual side effects (network calls) dispatched explicitly
//!   from the UI. Commands read states through [`Dep`] and publish results
//!   through the [`Updater`].
//!
//! Everything is owned by a single [`StateCtx`]; the frame loop calls
//! [`StateCtx::sync_computes`] to apply pending updates and
//! [`StateCtx::run_all_dirty`] to re-run invalidated computes.

mod command;
mod compute;
mod ctx;
mod dep;
mod graph;
mod state;
mod time;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::{State, state_assign_impl};
pub use time::Time;
pub use updater::Updater;
