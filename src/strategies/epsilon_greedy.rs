use rand::Rng;

use super::{Choice, Policy, argmax};
use crate::estimator::Estimator;

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise.
///
/// Only the random branch is flagged exploratory; the greedy branch picks the
/// arm with the highest running-mean estimate, ties toward the lowest index.
#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&epsilon),
            "epsilon must be between 0 and 1"
        );
        Self { epsilon }
    }

    /// Gets the epsilon value.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn choose(&self, _t: usize, estimator: &Estimator, rng: &mut dyn rand::RngCore) -> Choice {
        let r: f64 = rng.random_range(0.0..1.0);
        if r < self.epsilon {
            Choice {
                arm: rng.random_range(0..estimator.n_arms()),
                exploratory: true,
            }
        } else {
            Choice {
                arm: argmax(estimator.estimates()),
                exploratory: false,
            }
        }
    }
}
