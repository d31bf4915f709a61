//! Auto-run driver
//!
//! Runs the interpreter against a [`SharedStore`] on a timer. Each tick locks
//! the store, re-reads the snapshot, advances one line, applies the result
//! and, if the program is not finished, schedules the next tick. Nothing is
//! carried from one tick to the next except what is in the store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::interpreter::{advance, Explanation, Step};
use crate::speed::Speed;
use crate::store::{lock, ExecutionStateStore, SharedStore, TimerHandle};

#[derive(Debug, Clone)]
pub struct AutoRunDriver {
    store: SharedStore,
    speed_ms: Arc<AtomicU64>,
}

impl AutoRunDriver {
    pub fn new(store: SharedStore, speed: Speed) -> Self {
        Self {
            store,
            speed_ms: Arc::new(AtomicU64::new(speed.millis())),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn speed(&self) -> Speed {
        Speed::new(self.speed_ms.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Change the delay used for the next scheduled tick
    pub fn set_speed(&self, speed: Speed) {
        self.speed_ms.store(speed.millis(), Ordering::Relaxed);
    }

    /* ===================== Commands ===================== */

    /// Begin auto-running from the current state
    ///
    /// Returns `Ok(false)` without doing anything if a run is already active.
    /// The first tick runs before this returns; later ticks run on the tokio
    /// runtime this is called from.
    pub fn start(&self) -> Result<bool> {
        tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;

        let mut store = lock(&self.store);
        if store.snapshot().is_running {
            debug!("start ignored: already running");
            return Ok(false);
        }

        let run_id = Uuid::new_v4();
        info!(%run_id, speed_ms = self.speed().millis(), "auto-run started");
        store.set_running(true);
        self.tick_locked(&mut store);
        Ok(true)
    }

    /// Advance exactly one line, unless a run is active
    pub fn step(&self) -> Option<Step> {
        let mut store = lock(&self.store);
        if store.snapshot().is_running {
            debug!("step ignored: auto-run in progress");
            return None;
        }

        let transition = advance(store.snapshot());
        store.apply(&transition);
        if !transition.step.continues() {
            finish(&mut store);
        }
        Some(transition.step)
    }

    /// Stop any run and return to the initial state
    pub fn reset(&self) {
        let mut store = lock(&self.store);
        store.reset();
        store.set_explanation(Some(Explanation::ClickToStart));
        debug!(generation = store.generation(), "reset");
    }

    /* ===================== Ticks ===================== */

    fn tick(&self, generation: u64) {
        let mut store = lock(&self.store);
        if !store.claim_pending_timer(generation) {
            warn!(generation, "dropping superseded tick");
            return;
        }
        self.tick_locked(&mut store);
    }

    fn tick_locked(&self, store: &mut ExecutionStateStore) {
        let transition = advance(store.snapshot());
        store.apply(&transition);

        match transition.step {
            Step::Continue => self.schedule(store),
            Step::Done => finish(store),
        }
    }

    fn schedule(&self, store: &mut ExecutionStateStore) {
        let generation = store.next_generation();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let delay = self.speed().as_duration();
        let driver = self.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => driver.tick(generation),
            }
        });

        store.set_pending_timer(Some(TimerHandle::new(generation, token)));
    }
}

fn finish(store: &mut ExecutionStateStore) {
    let sum = store.snapshot().variables.sum;
    store.set_running(false);
    store.set_explanation(Some(Explanation::Complete { sum }));
    store.set_pending_timer(None);
    info!(sum, "program finished");
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
