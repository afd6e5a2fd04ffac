use std::any::{Any, TypeId};
use std::collections::{BTreeMap, BTreeSet};

use crate::{Command, Compute, Dep, Graph, State, TopologyError, Updater};

/// Owner of all registered states, computes and commands.
///
/// The frame loop drives it with `sync_computes()` (apply pending updater
/// values) before rendering and `run_all_dirty()` (re-run invalidated
/// computes) after rendering.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    /// Targets whose value changed since the last run pass. Wakes the
    /// computes that depend on them, never the target itself.
    dirty: BTreeSet<TypeId>,
    /// Computes that must run regardless of the dirty set (newly registered).
    pending_run: BTreeSet<TypeId>,
    sender: flume::Sender<(TypeId, Box<dyn Any + Send>)>,
    receiver: flume::Receiver<(TypeId, Box<dyn Any + Send>)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            dirty: BTreeSet::new(),
            pending_run: BTreeSet::new(),
            sender,
            receiver,
        }
    }

    /// Register a state. The state is marked dirty so dependent computes run
    /// on the next `run_all_dirty()`.
    pub fn add_state<T: State + 'static>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.dirty.insert(id);
    }

    /// Register a compute. It runs once on the next `run_all_dirty()`.
    pub fn record_compute<T: Compute + 'static>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.computes.insert(id, Box::new(compute));
        self.pending_run.insert(id);
    }

    /// Register a command for later `dispatch()`.
    pub fn record_command<T: Command + 'static>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Borrow a registered state. Panics when `T` was never registered.
    pub fn state<T: State + 'static>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!("state not registered: {}", std::any::type_name::<T>())
            })
    }

    /// Mutably borrow a registered state, marking it dirty.
    pub fn state_mut<T: State + 'static>(&mut self) -> &mut T {
        self.dirty.insert(TypeId::of::<T>());
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!("state not registered: {}", std::any::type_name::<T>())
            })
    }

    /// Mutate a registered state in place.
    pub fn update<T: State + 'static>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Read a registered compute, if present.
    pub fn cached<T: Compute + 'static>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Write handle for publishing values from callbacks.
    pub fn updater(&self) -> Updater {
        Updater::new(self.sender.clone())
    }

    /// Run a recorded command immediately.
    ///
    /// Panics when the command was never recorded; dispatching an unknown
    /// command is a wiring bug.
    pub fn dispatch<T: Command + 'static>(&self) {
        let command = self.commands.get(&TypeId::of::<T>()).unwrap_or_else(|| {
            panic!("command not recorded: {}", std::any::type_name::<T>())
        });
        command.run(Dep::new(&self.states, &self.computes), self.updater());
    }

    /// Apply all pending updater values to their registered targets.
    ///
    /// Each applied target is marked dirty so computes depending on it
    /// re-run on the next `run_all_dirty()`. The assigned target itself is
    /// not re-run: a compute that publishes its own cache would otherwise
    /// re-publish on every frame.
    pub fn sync_computes(&mut self) {
        while let Ok((id, value)) = self.receiver.try_recv() {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
                self.dirty.insert(id);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
                self.dirty.insert(id);
            } else {
                log::warn!("sync_computes: update for unregistered {id:?} dropped");
            }
        }
    }

    /// Re-run every compute whose dependency set intersects the dirty set,
    /// plus the pending ones (first run after registration), then clear
    /// both sets.
    pub fn run_all_dirty(&mut self) {
        if self.dirty.is_empty() && self.pending_run.is_empty() {
            return;
        }

        let runnable: Vec<TypeId> = self
            .computes
            .iter()
            .filter(|(id, compute)| {
                if self.pending_run.contains(*id) {
                    return true;
                }
                let (state_ids, compute_ids) = compute.deps();
                state_ids
                    .iter()
                    .chain(compute_ids.iter())
                    .any(|dep| self.dirty.contains(dep))
            })
            .map(|(id, _)| *id)
            .collect();

        self.dirty.clear();
        self.pending_run.clear();

        for id in runnable {
            // Take the compute out of the map so Dep can borrow the rest.
            let Some(compute) = self.computes.remove(&id) else {
                continue;
            };
            compute.compute(Dep::new(&self.states, &self.computes), self.updater());
            self.computes.insert(id, compute);
        }
    }

    /// Verify the recorded compute dependencies form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        let mut graph: Graph<TypeId> = Graph::new();

        for (id, compute) in &self.computes {
            let (state_ids, compute_ids) = compute.deps();
            for dep in state_ids.iter().chain(compute_ids.iter()) {
                graph.route_to(*dep, *id);
            }
        }

        graph.topology_sort()
    }
}
