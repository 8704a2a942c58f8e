//! Single-trial run driver.

use crate::environment::Environment;
use crate::estimator::Estimator;
use crate::strategies::Policy;

/// Everything recorded during one trial of one strategy.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Realized reward at each step.
    pub rewards: Vec<f64>,
    /// Whether each step was exploratory under the strategy's own definition.
    pub exploratory: Vec<bool>,
    /// Total pulls per arm; sums to the number of steps.
    pub pulls: Vec<u32>,
}

/// Executes one full trial: `n_steps` rounds of choose, sample, update.
///
/// The estimator starts fresh, so the result depends only on the policy, the
/// environment's true rewards, and the RNG stream. Within a run the loop is
/// strictly sequential: each choice depends on the estimator state left by
/// the previous step.
pub fn run_one(
    policy: &dyn Policy,
    environment: &Environment,
    n_steps: usize,
    rng: &mut dyn rand::RngCore,
) -> RunResult {
    let n_arms = environment.n_arms();
    let mut estimator = Estimator::new(n_arms);
    let mut rewards = Vec::with_capacity(n_steps);
    let mut exploratory = Vec::with_capacity(n_steps);

    for t in 0..n_steps {
        let choice = policy.choose(t, &estimator, rng);
        let reward = environment.sample(choice.arm, rng);
        estimator.update(choice.arm, reward);
        rewards.push(reward);
        exploratory.push(choice.exploratory);
    }

    RunResult {
        rewards,
        exploratory,
        pulls: estimator.pulls().to_vec(),
    }
}
