//! Broadcast-once completion signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

/// A one-shot broadcast flag: transitions from pending to fired exactly
/// once and stays fired for the rest of its lifetime.
///
/// Snapshot readers call `is_fired`, a single atomic load, so any number
/// of threads can poll concurrently with the one writer. Readers that
/// prefer to block call `wait`.
pub struct CompletionSignal {
    // Fast-path mirror of `state`; written once, under the mutex.
    fired: AtomicBool,
    state: Mutex<bool>,
    cvar: Condvar,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
            state: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }

    /// Fire the signal and wake every blocked waiter.
    ///
    /// Firing an already-fired signal is a silent no-op, not an error.
    pub fn fire(&self) {
        let mut fired = self.state.lock().unwrap();
        if *fired {
            return;
        }
        *fired = true;
        self.fired.store(true, Ordering::Release);
        self.cvar.notify_all();
    }

    /// Non-blocking check. Once this returns true it returns true forever
    /// for this instance.
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Block until the signal fires. Returns immediately if it already has.
    pub fn wait(&self) {
        if self.is_fired() {
            return;
        }
        let mut fired = self.state.lock().unwrap();
        while !*fired {
            fired = self.cvar.wait(fired).unwrap();
        }
    }
}
