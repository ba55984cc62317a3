//! Reference-counted loading flag
//!
//! Every phase of a request chain holds a [`LoadingGuard`]. The flag turns on
//! as soon as the first guard is taken and turns off only after the last guard
//! is dropped and the settle delay passes without a new guard being taken.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use crate::core::store::Actions;

/// Loading flag state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Busy(usize),
    /// Count reached zero; waiting for the settle delay before going idle
    Settling,
}

/// What the caller has to do after a phase ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    StillBusy,
    ArmSettleTimer,
    Unbalanced,
}

impl LoadingState {
    /// Visible loading flag
    pub fn is_loading(&self) -> bool {
        !matches!(self, LoadingState::Idle)
    }

    /// A phase started. Returns true when the flag has to be published as on.
    pub fn start(&mut self) -> bool {
        match *self {
            LoadingState::Idle => {
                *self = LoadingState::Busy(1);
                true
            }
            LoadingState::Busy(count) => {
                *self = LoadingState::Busy(count + 1);
                false
            }
            LoadingState::Settling => {
                // The flag never went off; cancel the pending transition
                *self = LoadingState::Busy(1);
                false
            }
        }
    }

    /// A phase ended
    pub fn finish(&mut self) -> FinishOutcome {
        match *self {
            LoadingState::Busy(1) => {
                *self = LoadingState::Settling;
                FinishOutcome::ArmSettleTimer
            }
            LoadingState::Busy(count) => {
                *self = LoadingState::Busy(count - 1);
                FinishOutcome::StillBusy
            }
            LoadingState::Idle | LoadingState::Settling => FinishOutcome::Unbalanced,
        }
    }

    /// The settle delay elapsed. Returns true when the flag has to be published as off.
    pub fn settle(&mut self) -> bool {
        if *self == LoadingState::Settling {
            *self = LoadingState::Idle;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: LoadingState,
    // Bumped on every start so a pending settle timer can tell it is stale
    generation: u64,
}

/// Drives the store's `loading` field from phase start/end events
#[derive(Clone)]
pub struct LoadingTracker {
    inner: Arc<Mutex<Inner>>,
    actions: Actions,
    settle_delay: Duration,
}

impl LoadingTracker {
    pub fn new(actions: Actions, settle_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            actions,
            settle_delay,
        }
    }

    /// Mark the start of a phase. The phase ends when the guard is dropped.
    pub fn start(&self) -> LoadingGuard {
        self.increment();
        LoadingGuard {
            tracker: self.clone(),
        }
    }

    pub fn state(&self) -> LoadingState {
        self.lock().state
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Store dispatches happen under the lock so a late settle can never
    // overwrite a newer "on" with "off".
    fn increment(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        if inner.state.start() {
            log::debug!("LoadingTracker: busy");
            self.actions.set_loading(true);
        }
    }

    fn decrement(&self) {
        let generation = {
            let mut inner = self.lock();
            match inner.state.finish() {
                FinishOutcome::StillBusy => return,
                FinishOutcome::Unbalanced => {
                    log::warn!("LoadingTracker: phase ended without a matching start");
                    return;
                }
                FinishOutcome::ArmSettleTimer => inner.generation,
            }
        };

        if self.settle_delay.is_zero() {
            self.settle(generation);
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tracker = self.clone();
                let delay = self.settle_delay;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    tracker.settle(generation);
                });
            }
            Err(_) => {
                log::warn!("LoadingTracker: no runtime for settle timer, settling now");
                self.settle(generation);
            }
        }
    }

    fn settle(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation != generation {
            // A phase started during the settle window
            return;
        }
        if inner.state.settle() {
            log::debug!("LoadingTracker: idle");
            self.actions.set_loading(false);
        }
    }
}

/// Held for the duration of one phase
pub struct LoadingGuard {
    tracker: LoadingTracker,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.decrement();
    }
}
