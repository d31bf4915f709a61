//! Execution state store
//!
//! Owns the one mutable `ExecutionState` of a session together with the
//! handle of the pending auto-run tick. Every mutator leaves a consistent
//! snapshot behind and publishes it on a watch channel for the view.
//!
//! The store is shared as [`SharedStore`]; callers lock it once per logical
//! operation so a tick is read, advanced and applied without interleaving.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};
use crate::interpreter::{ExecutionState, Explanation, Line, Transition, Variable};

pub type SharedStore = Arc<Mutex<ExecutionStateStore>>;

/// Lock a shared store, recovering the guard if a holder panicked
pub fn lock(store: &SharedStore) -> MutexGuard<'_, ExecutionStateStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/* ===================== Timer Handle ===================== */

/// A scheduled auto-run tick that has not fired yet
#[derive(Debug)]
pub struct TimerHandle {
    generation: u64,
    token: CancellationToken,
}

impl TimerHandle {
    pub fn new(generation: u64, token: CancellationToken) -> Self {
        Self { generation, token }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn cancel(self) {
        self.token.cancel();
    }
}

/* ===================== Store ===================== */

#[derive(Debug)]
pub struct ExecutionStateStore {
    state: ExecutionState,
    pending: Option<TimerHandle>,
    generation: u64,
    updates: watch::Sender<ExecutionState>,
}

impl ExecutionStateStore {
    pub fn new() -> Self {
        let state = ExecutionState::initial();
        let (updates, _) = watch::channel(state.clone());
        Self {
            state,
            pending: None,
            generation: 0,
            updates,
        }
    }

    /// Create a store ready to be handed to a driver
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn snapshot(&self) -> ExecutionState {
        self.state.clone()
    }

    /// Receive every committed snapshot
    pub fn subscribe(&self) -> watch::Receiver<ExecutionState> {
        self.updates.subscribe()
    }

    /* ---------- Mutators ---------- */

    pub fn set_current_line(&mut self, line: Line) -> Result<()> {
        if line == Line::NotStarted && self.state.current_line != Line::NotStarted {
            return Err(Error::LineRewound);
        }
        self.state.current_line = line;
        self.publish();
        Ok(())
    }

    pub fn set_iteration(&mut self, iteration: u32) -> Result<()> {
        if iteration != 0 && self.not_started() {
            return Err(Error::NotStarted("iteration"));
        }
        if iteration < self.state.current_iteration {
            return Err(Error::IterationRegressed {
                current: self.state.current_iteration,
                requested: iteration,
            });
        }
        self.state.current_iteration = iteration;
        self.publish();
        Ok(())
    }

    pub fn set_variable(&mut self, var: Variable, value: i64) -> Result<()> {
        if var == Variable::I && value != 0 && self.not_started() {
            return Err(Error::NotStarted("i"));
        }
        self.state.variables.set(var, value);
        self.publish();
        Ok(())
    }

    pub fn set_running(&mut self, running: bool) {
        self.state.is_running = running;
        self.publish();
    }

    pub fn set_explanation(&mut self, explanation: Option<Explanation>) {
        self.state.explanation = explanation;
        self.publish();
    }

    /// Replace the pending tick, cancelling whichever one was there before
    pub fn set_pending_timer(&mut self, handle: Option<TimerHandle>) {
        if let Some(previous) = self.pending.take() {
            debug!(generation = previous.generation, "cancelling pending tick");
            previous.cancel();
        }
        self.pending = handle;
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.as_ref().map(TimerHandle::generation)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reserve a generation number for a tick about to be scheduled
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Called by a tick that just woke up
    ///
    /// Returns `true` and forgets the handle if the tick is still the pending
    /// one. A superseded tick gets `false` and must not touch the state.
    pub fn claim_pending_timer(&mut self, generation: u64) -> bool {
        match &self.pending {
            Some(handle) if handle.generation == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Commit the outcome of one interpreter step as a single update
    pub fn apply(&mut self, transition: &Transition) {
        let next = &transition.state;
        self.state.current_line = next.current_line;
        self.state.current_iteration = next.current_iteration;
        self.state.variables = next.variables;
        self.state.explanation = next.explanation;
        self.publish();
    }

    /// Cancel any pending tick and return to the initial snapshot
    pub fn reset(&mut self) {
        self.set_pending_timer(None);
        self.generation += 1;
        self.state = ExecutionState::initial();
        self.publish();
    }

    fn not_started(&self) -> bool {
        self.state.current_line == Line::NotStarted
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}

impl Default for ExecutionStateStore {
    fn default() -> Self {
        Self::new()
    }
}
