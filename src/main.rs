//! Bounded shared counter demo: worker threads race to a target value.
//!
//! Run with: cargo run -- [target] [workers]

use std::env;
use std::process;
use std::sync::Arc;

use colored::Colorize;
use thiserror::Error;

use bounded_counter::{run_session, Counter, Outcome};

const DEFAULT_TARGET: usize = 10;
const DEFAULT_WORKERS: usize = 3;

#[derive(Debug, Error)]
enum ConfigError {
    #[error("target must be a positive integer, got '{0}'")]
    InvalidTarget(String),
    #[error("worker count must be a positive integer, got '{0}'")]
    InvalidWorkers(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Config {
    target: usize,
    workers: usize,
}

// The library accepts a zero target (trivially reached); the demo binary
// rejects it so a run always has something to count.
fn parse_config<I>(mut args: I) -> Result<Config, ConfigError>
where
    I: Iterator<Item = String>,
{
    let target = match args.next() {
        Some(raw) => parse_positive(&raw).ok_or(ConfigError::InvalidTarget(raw))?,
        None => DEFAULT_TARGET,
    };
    let workers = match args.next() {
        Some(raw) => parse_positive(&raw).ok_or(ConfigError::InvalidWorkers(raw))?,
        None => DEFAULT_WORKERS,
    };
    Ok(Config { target, workers })
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.parse().ok().filter(|&n| n > 0)
}

fn run_and_report(counter: &Arc<Counter>, workers: usize) {
    let summaries = run_session(counter, workers);

    for summary in &summaries {
        let how = match summary.outcome {
            Outcome::SignalFired => "completion signal",
            Outcome::TargetReached => "direct target check",
        };
        println!(
            "Worker {} done via {} after {} attempts",
            summary.id, how, summary.attempts
        );
    }

    println!(
        "Final counter value: {} (target {}, reached: {})",
        counter.value().to_string().green().bold(),
        counter.target(),
        counter.is_reached()
    );
}

fn main() {
    env_logger::init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(2);
        }
    };

    println!("{}", "Bounded counter with racing workers".bold());
    println!("{}", "===================================".bold());
    println!(
        "Starting with target {} and {} workers",
        config.target.to_string().cyan(),
        config.workers.to_string().cyan()
    );

    let counter = Arc::new(Counter::new(config.target));
    run_and_report(&counter, config.workers);

    // Same counter identity, fresh session: reset zeroes the value and
    // installs a new completion signal.
    println!("\n{}", "Resetting for a second session".bold());
    counter.reset();
    run_and_report(&counter, config.workers);

    println!("\n{}", "Process finished successfully!".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_args_uses_defaults() {
        let config = parse_config(args(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                target: DEFAULT_TARGET,
                workers: DEFAULT_WORKERS
            }
        );
    }

    #[test]
    fn explicit_args_are_parsed() {
        let config = parse_config(args(&["25", "4"])).unwrap();
        assert_eq!(
            config,
            Config {
                target: 25,
                workers: 4
            }
        );
    }

    #[test]
    fn target_only_keeps_default_workers() {
        let config = parse_config(args(&["8"])).unwrap();
        assert_eq!(config.target, 8);
        assert_eq!(config.workers, DEFAULT_WORKERS);
    }

    #[test]
    fn zero_target_is_rejected() {
        let err = parse_config(args(&["0"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget(_)));
    }

    #[test]
    fn garbage_target_is_rejected() {
        let err = parse_config(args(&["ten"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget(_)));
    }

    #[test]
    fn zero_workers_are_rejected() {
        let err = parse_config(args(&["10", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorkers(_)));
    }
}
