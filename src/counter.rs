//! Mutex-guarded bounded counter.

use std::sync::{Arc, Mutex};

use crate::signal::CompletionSignal;

struct CounterState {
    value: usize,
    signal: Arc<CompletionSignal>,
}

/// A shared counter that counts from 0 up to a fixed target and never
/// past it.
///
/// The value and the current session's completion signal live behind one
/// mutex, so the bound check, the mutation, and the decision to fire are
/// a single critical section. Over-shoot is therefore impossible no matter
/// how many threads call `increment` at once. The target is immutable
/// after construction and is read without the lock.
pub struct Counter {
    target: usize,
    state: Mutex<CounterState>,
}

impl Counter {
    /// Create a counter that counts up to `target`.
    ///
    /// A zero target means the counter is born reached: the session signal
    /// starts fired and `increment` never lands.
    pub fn new(target: usize) -> Self {
        Self {
            target,
            state: Mutex::new(CounterState {
                value: 0,
                signal: Self::fresh_signal(target),
            }),
        }
    }

    fn fresh_signal(target: usize) -> Arc<CompletionSignal> {
        let signal = CompletionSignal::new();
        if target == 0 {
            signal.fire();
        }
        Arc::new(signal)
    }

    /// Add 1 unless the target has been reached.
    ///
    /// The increment that lands exactly on the target fires the session
    /// signal; any call after that is a no-op. Never fails and never
    /// blocks beyond lock contention.
    pub fn increment(&self) {
        let mut state = self.state.lock().unwrap();
        if state.value < self.target {
            state.value += 1;
            log::trace!("counter value is now {}", state.value);
            if state.value == self.target {
                state.signal.fire();
            }
        }
    }

    /// Current value.
    pub fn value(&self) -> usize {
        self.state.lock().unwrap().value
    }

    /// The fixed target.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether the value has reached the target.
    pub fn is_reached(&self) -> bool {
        self.state.lock().unwrap().value >= self.target
    }

    /// The current session's signal.
    ///
    /// Callers polling across iterations must re-fetch through this method
    /// each time rather than caching the handle: `reset` replaces the
    /// signal, and a cached handle would keep reporting the previous
    /// session's state forever.
    pub fn signal(&self) -> Arc<CompletionSignal> {
        Arc::clone(&self.state.lock().unwrap().signal)
    }

    /// Zero the value and install a fresh signal, starting a new session
    /// on the same counter identity.
    ///
    /// Only call this once the previous session's workers have all exited;
    /// resetting under a live session is outside the contract. Stale
    /// handles to the replaced signal keep whatever state it had.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.value = 0;
        state.signal = Self::fresh_signal(self.target);
        log::debug!("counter reset, target {}", self.target);
    }

    /// Block until the current session's signal fires.
    ///
    /// The counter lock is only held long enough to fetch the signal, never
    /// across the wait.
    pub fn wait_reached(&self) {
        let signal = self.signal();
        signal.wait();
    }
}
