//! Bounded cooperative counting with broadcast cancellation.
//!
//! Worker threads race to increment a shared, mutex-guarded counter until
//! a fixed target is reached. The increment that lands on the target fires
//! a broadcast-once completion signal; every worker observes it and stops,
//! so the counter never overshoots.
//!
//! Run the demo with: cargo run -- [target] [workers]

pub mod counter;
pub mod pool;
pub mod signal;

pub use counter::Counter;
pub use pool::{run_session, Outcome, WorkerSummary};
pub use signal::CompletionSignal;
