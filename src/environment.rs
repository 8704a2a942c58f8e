//! Reward environment shared by every run of every strategy.

use rand_distr::{Distribution, Normal};

use crate::error::{Result, SimulationError};

/// Standard deviation of the Gaussian noise added to every reward sample.
const REWARD_NOISE_STD: f64 = 1.0;

/// A fixed set of arms with known-to-the-experiment expected rewards.
///
/// The true reward vector is immutable after construction and is shared by
/// all runs of all strategies, so cross-strategy comparisons are
/// apples-to-apples. Sampling has no side effect beyond advancing the RNG.
#[derive(Clone, Debug)]
pub struct Environment {
    true_rewards: Vec<f64>,
    noise: Normal<f64>,
}

impl Environment {
    /// Creates an environment from the true expected reward of each arm.
    pub fn new(true_rewards: Vec<f64>) -> Result<Self> {
        if true_rewards.is_empty() {
            return Err(SimulationError::NoArmsAvailable);
        }
        let noise = Normal::new(0.0, REWARD_NOISE_STD).map_err(|e| {
            SimulationError::InvalidParameter {
                message: format!("reward noise: {e}"),
            }
        })?;
        Ok(Self { true_rewards, noise })
    }

    /// Draws one noisy reward for the given arm: `N(true_rewards[arm], 1.0)`.
    ///
    /// Draws are independent across calls. `arm` must be a valid index.
    pub fn sample(&self, arm: usize, rng: &mut dyn rand::RngCore) -> f64 {
        self.true_rewards[arm] + self.noise.sample(rng)
    }

    /// Number of arms.
    pub fn n_arms(&self) -> usize {
        self.true_rewards.len()
    }

    /// The fixed true expected reward of each arm.
    pub fn true_rewards(&self) -> &[f64] {
        &self.true_rewards
    }
}
