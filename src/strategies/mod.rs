//! Action-selection strategies for the bandit simulation.
//!
//! Each strategy is a pure decision rule from the current time step and
//! estimator state to an arm index, evaluated once per step before the reward
//! is sampled. The four rules form a closed set behind the [`Strategy`] enum,
//! so an unknown identifier is rejected at parse time and never reaches the
//! run loop.
//!
//! The `exploratory` flag deliberately means different things per strategy,
//! matching the original experiment design: epsilon-greedy flags only its
//! random branch, softmax flags every step (it never deterministically
//! exploits), and UCB/Thompson never flag (their exploration is folded into
//! the selection score). Consumers should compare exploration-rate curves
//! within a strategy over time, not across strategies.

mod epsilon_greedy;
mod softmax;
mod thompson;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use softmax::Softmax;
pub use thompson::Thompson;
pub use ucb::Ucb;

use crate::estimator::Estimator;

/// Additive constant keeping UCB and Thompson scores finite on unpulled arms.
pub(crate) const STABILIZER: f64 = 1e-5;

/// One decision made by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Index of the arm to pull.
    pub arm: usize,
    /// Whether this step was a non-greedy choice under the strategy's own
    /// definition of exploration (see module docs).
    pub exploratory: bool,
}

/// Core trait for bandit action-selection rules.
///
/// Note: this trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety; stochastic and deterministic policies share
/// the same seam.
pub trait Policy {
    /// Selects an arm given the time step and current estimates.
    fn choose(&self, t: usize, estimator: &Estimator, rng: &mut dyn rand::RngCore) -> Choice;
}

/// A configured strategy, one variant per known selection rule.
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Greedy with probability-epsilon random exploration.
    EpsilonGreedy(EpsilonGreedy),
    /// Upper confidence bound with a deterministic warm-up sweep.
    Ucb(Ucb),
    /// Boltzmann action selection.
    Softmax(Softmax),
    /// Gaussian posterior sampling.
    Thompson(Thompson),
}

impl Strategy {
    /// The identifier this strategy is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::EpsilonGreedy(_) => "epsilon_greedy",
            Strategy::Ucb(_) => "ucb",
            Strategy::Softmax(_) => "softmax",
            Strategy::Thompson(_) => "thompson",
        }
    }
}

impl Policy for Strategy {
    fn choose(&self, t: usize, estimator: &Estimator, rng: &mut dyn rand::RngCore) -> Choice {
        match self {
            Strategy::EpsilonGreedy(p) => p.choose(t, estimator, rng),
            Strategy::Ucb(p) => p.choose(t, estimator, rng),
            Strategy::Softmax(p) => p.choose(t, estimator, rng),
            Strategy::Thompson(p) => p.choose(t, estimator, rng),
        }
    }
}

/// Index of the first-occurring maximum, ties broken toward the lowest index.
///
/// Matches array-argmax semantics: a later value replaces the incumbent only
/// when strictly greater.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
