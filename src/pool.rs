//! Worker pool: N threads racing to increment a shared counter.

use std::sync::Arc;
use std::thread;

use crossbeam::channel;

use crate::counter::Counter;

/// How a worker came to exit its loop. Both paths are valid terminal
/// states; which one a given worker takes is decided by the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The worker observed the session signal fired.
    SignalFired,
    /// The worker observed `is_reached()` before its signal check caught up.
    TargetReached,
}

/// Per-worker report, available once the pool has been joined.
#[derive(Debug, Clone)]
pub struct WorkerSummary {
    pub id: usize,
    pub outcome: Outcome,
    /// `increment` calls this worker issued. `increment` reports nothing
    /// back, so this counts attempts, not landed increments.
    pub attempts: u64,
}

/// Run one counting session: spawn exactly `num_workers` threads, wait for
/// all of them to finish, and return their summaries ordered by worker id.
///
/// Each worker busy-polls: check the current signal, check `is_reached`,
/// otherwise increment and go again. The loop spins without backoff, a
/// deliberate CPU-burning simplification for a short-lived demo. Callers
/// that want to block instead of spin can use `Counter::wait_reached`.
///
/// `num_workers == 0` spawns nothing and returns an empty vec immediately.
pub fn run_session(counter: &Arc<Counter>, num_workers: usize) -> Vec<WorkerSummary> {
    let (tx, rx) = channel::unbounded();
    let mut handles = Vec::with_capacity(num_workers);

    for id in 0..num_workers {
        let counter = Arc::clone(counter);
        let tx = tx.clone();
        handles.push(thread::spawn(move || {
            let summary = worker_loop(id, &counter);
            log::debug!("worker {} done after {} attempts", id, summary.attempts);
            tx.send(summary).unwrap();
        }));
    }
    drop(tx);

    for handle in handles {
        handle.join().unwrap();
    }

    let mut summaries: Vec<WorkerSummary> = rx.iter().collect();
    summaries.sort_by_key(|s| s.id);
    summaries
}

fn worker_loop(id: usize, counter: &Counter) -> WorkerSummary {
    let mut attempts = 0u64;
    loop {
        // Re-fetched every iteration: a cached handle would go stale
        // across a reset boundary.
        if counter.signal().is_fired() {
            return WorkerSummary {
                id,
                outcome: Outcome::SignalFired,
                attempts,
            };
        }
        if counter.is_reached() {
            return WorkerSummary {
                id,
                outcome: Outcome::TargetReached,
                attempts,
            };
        }
        counter.increment();
        attempts += 1;
    }
}
