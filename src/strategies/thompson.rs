use rand_distr::{Distribution, Normal};

use super::{Choice, Policy, STABILIZER, argmax};
use crate::estimator::Estimator;

/// Gaussian posterior-sampling (Thompson-style) policy.
///
/// Models each arm's value as `Normal(q[a], 1 / sqrt(n[a] + 1e-5))`: wide for
/// rarely pulled arms, shrinking as pulls accumulate. One value is sampled
/// per arm and the largest sample wins, ties toward the lowest index.
///
/// Never flagged exploratory: exploration is implicit in the posterior width.
#[derive(Clone, Debug, Default)]
pub struct Thompson;

impl Thompson {
    /// Creates a new posterior-sampling policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Policy for Thompson {
    fn choose(&self, _t: usize, estimator: &Estimator, rng: &mut dyn rand::RngCore) -> Choice {
        let samples: Vec<f64> = estimator
            .estimates()
            .iter()
            .zip(estimator.pulls())
            .map(|(&q, &n)| {
                let std_dev = 1.0 / (f64::from(n) + STABILIZER).sqrt();
                match Normal::new(q, std_dev) {
                    Ok(dist) => dist.sample(rng),
                    // Unreachable for a positive finite std_dev; fall back
                    // to the point estimate.
                    Err(_) => q,
                }
            })
            .collect();

        Choice {
            arm: argmax(&samples),
            exploratory: false,
        }
    }
}
