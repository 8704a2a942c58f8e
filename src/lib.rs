//! banditlab: a multi-armed bandit strategy simulation and comparison engine.
//!
//! Given a fixed set of arms with experimentally fixed expected rewards, the
//! library runs several action-selection strategies (epsilon-greedy, upper
//! confidence bound, softmax, Gaussian posterior sampling) over many
//! independent trials against a shared reward environment, and aggregates
//! their online-learning performance into directly comparable statistics.
//!
//! # Quick start
//!
//! ```
//! use banditlab::{Experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig {
//!     fixed_rewards: vec![1.0, 0.5, 0.0],
//!     n_steps: 100,
//!     n_runs: 20,
//!     ..ExperimentConfig::default()
//! };
//!
//! let experiment = Experiment::new(config).unwrap();
//! let results = experiment.compare(&["epsilon_greedy", "ucb"]).unwrap();
//!
//! let ucb = &results["ucb"];
//! assert_eq!(ucb.cumulative_rewards.len(), 100);
//! assert_eq!(ucb.arm_counts.len(), 3);
//! ```
//!
//! Results are reproducible bit-for-bit for a given configuration: every run
//! owns an RNG stream derived from the master seed, and runs are reduced in a
//! fixed order regardless of parallel execution.

mod environment;
mod error;
mod estimator;
mod experiment;
pub mod gridworld;
mod simulation;
pub mod strategies;

// Re-export main types
pub use environment::Environment;
pub use error::{Result, SimulationError};
pub use estimator::Estimator;
pub use experiment::{Experiment, ExperimentConfig, StrategyResult};
pub use simulation::{RunResult, run_one};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::strategies::{
        Choice, EpsilonGreedy, Policy, Softmax, Strategy, Thompson, Ucb,
    };
    pub use crate::{
        Environment, Estimator, Experiment, ExperimentConfig, Result, RunResult,
        SimulationError, StrategyResult, run_one,
    };
}
