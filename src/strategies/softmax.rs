use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::{Choice, Policy, argmax};
use crate::estimator::Estimator;

/// Softmax (Boltzmann) policy.
///
/// Turns the estimates into a probability distribution with weights
/// `exp(q[a] / temperature)` and samples the arm from it. Lower temperatures
/// sharpen the distribution toward the current best arm; higher temperatures
/// flatten it toward uniform. Every step is flagged exploratory since the
/// policy never deterministically exploits.
#[derive(Clone, Debug)]
pub struct Softmax {
    temperature: f64,
}

impl Softmax {
    /// Creates a new Softmax policy with the given temperature.
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        assert!(temperature > 0.0, "temperature must be positive");
        Self { temperature }
    }

    /// Gets the temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Normalized selection probabilities for the given estimates.
    ///
    /// Weights are shifted by the maximum scaled estimate before
    /// exponentiation; the shift cancels in the normalization, so the
    /// probabilities are unchanged while large estimates cannot overflow.
    pub fn probabilities(&self, estimates: &[f64]) -> Vec<f64> {
        let max = estimates[argmax(estimates)] / self.temperature;
        let weights: Vec<f64> = estimates
            .iter()
            .map(|&q| (q / self.temperature - max).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect()
    }
}

impl Policy for Softmax {
    fn choose(&self, _t: usize, estimator: &Estimator, rng: &mut dyn rand::RngCore) -> Choice {
        let probs = self.probabilities(estimator.estimates());
        let arm = match WeightedIndex::new(&probs) {
            Ok(dist) => dist.sample(rng),
            // Unreachable for finite estimates; fall back to the greedy arm.
            Err(_) => argmax(estimator.estimates()),
        };
        Choice {
            arm,
            exploratory: true,
        }
    }
}
