//! Multi-run experiment aggregation across strategies.

use indexmap::IndexMap;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::environment::Environment;
use crate::error::{Result, SimulationError};
use crate::simulation::{RunResult, run_one};
use crate::strategies::{EpsilonGreedy, Softmax, Strategy, Thompson, Ucb};

/// Configuration for one comparison: the shared environment, the trial
/// dimensions, the strategy hyperparameters, and the master seed.
///
/// An explicit record rather than process-wide state, so independent
/// comparisons (e.g. in tests) never interfere.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// True expected reward per arm, shared by every run of every strategy.
    pub fixed_rewards: Vec<f64>,
    /// Steps per trial.
    pub n_steps: usize,
    /// Independent trials per strategy.
    pub n_runs: usize,
    /// Exploration probability for epsilon-greedy.
    pub epsilon: f64,
    /// Boltzmann temperature for softmax.
    pub temperature: f64,
    /// Confidence constant for UCB.
    pub c: f64,
    /// Master seed; every run derives its own independent RNG stream from it.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    /// The canonical ten-arm testbed: rewards descending from 1.0 to -0.8.
    fn default() -> Self {
        Self {
            fixed_rewards: vec![1.0, 0.8, 0.6, 0.4, 0.2, 0.0, -0.2, -0.4, -0.6, -0.8],
            n_steps: 1000,
            n_runs: 200,
            epsilon: 0.1,
            temperature: 0.5,
            c: 2.0,
            seed: 42,
        }
    }
}

impl ExperimentConfig {
    fn validate(&self) -> Result<()> {
        if self.fixed_rewards.is_empty() {
            return Err(SimulationError::NoArmsAvailable);
        }
        if self.n_steps == 0 {
            return Err(SimulationError::InvalidParameter {
                message: "n_steps must be positive".to_string(),
            });
        }
        if self.n_runs == 0 {
            return Err(SimulationError::InvalidParameter {
                message: "n_runs must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(SimulationError::InvalidParameter {
                message: "epsilon must be between 0 and 1".to_string(),
            });
        }
        if self.temperature <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                message: "temperature must be positive".to_string(),
            });
        }
        if self.c <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                message: "c must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Resolves a strategy identifier into a configured policy.
    ///
    /// Unknown identifiers are a configuration error and fail fast; they are
    /// never silently defaulted.
    pub fn strategy(&self, name: &str) -> Result<Strategy> {
        match name {
            "epsilon_greedy" => Ok(Strategy::EpsilonGreedy(EpsilonGreedy::new(self.epsilon))),
            "ucb" => Ok(Strategy::Ucb(Ucb::new(self.c))),
            "softmax" => Ok(Strategy::Softmax(Softmax::new(self.temperature))),
            "thompson" => Ok(Strategy::Thompson(Thompson::new())),
            _ => Err(SimulationError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }
}

/// Aggregated performance of one strategy over all of its runs.
#[derive(Clone, Debug)]
pub struct StrategyResult {
    /// Mean cumulative reward at each step: index `t` is the average total
    /// reward accrued through step `t` across runs.
    pub cumulative_rewards: Vec<f64>,
    /// Empirical probability that step `t` was exploratory across runs.
    pub exploration_rate: Vec<f64>,
    /// Total pulls per arm, summed over all runs.
    pub arm_counts: Vec<u64>,
}

impl StrategyResult {
    /// Reduces per-run results into comparison statistics.
    ///
    /// Runs are folded in slice order, so as long as callers keep results
    /// indexed by run the reduction is bit-identical no matter in which order
    /// the runs were executed.
    pub fn from_runs(runs: &[RunResult], n_steps: usize, n_arms: usize) -> Self {
        let mut cumulative_rewards = vec![0.0; n_steps];
        let mut exploration_rate = vec![0.0; n_steps];
        let mut arm_counts = vec![0u64; n_arms];

        for run in runs {
            let mut running = 0.0;
            for t in 0..n_steps {
                running += run.rewards[t];
                cumulative_rewards[t] += running;
                if run.exploratory[t] {
                    exploration_rate[t] += 1.0;
                }
            }
            for (total, &pulls) in arm_counts.iter_mut().zip(&run.pulls) {
                *total += u64::from(pulls);
            }
        }

        let n_runs = runs.len() as f64;
        for v in &mut cumulative_rewards {
            *v /= n_runs;
        }
        for v in &mut exploration_rate {
            *v /= n_runs;
        }

        Self {
            cumulative_rewards,
            exploration_rate,
            arm_counts,
        }
    }
}

/// A configured comparison: holds the validated config and the shared
/// reward environment.
#[derive(Clone, Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    environment: Environment,
}

impl Experiment {
    /// Validates the configuration and builds the shared environment.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let environment = Environment::new(config.fixed_rewards.clone())?;
        Ok(Self {
            config,
            environment,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// The shared reward environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Runs every named strategy for `n_runs` independent trials and returns
    /// its aggregated statistics, keyed by identifier in the order given.
    ///
    /// All identifiers are resolved before any simulation starts; one unknown
    /// name aborts the whole comparison with no partial result. Runs execute
    /// in parallel, each on its own deterministically seeded RNG stream, and
    /// are reduced in run-index order so the output is reproducible
    /// bit-for-bit for a given config.
    pub fn compare(&self, strategies: &[&str]) -> Result<IndexMap<String, StrategyResult>> {
        let parsed: Vec<Strategy> = strategies
            .iter()
            .map(|name| self.config.strategy(name))
            .collect::<Result<_>>()?;

        let n_steps = self.config.n_steps;
        let n_arms = self.environment.n_arms();
        let mut results = IndexMap::with_capacity(parsed.len());

        for (strategy_index, strategy) in parsed.iter().enumerate() {
            let runs: Vec<RunResult> = (0..self.config.n_runs)
                .into_par_iter()
                .map(|run| {
                    let seed = run_seed(self.config.seed, strategy_index, run);
                    let mut rng = StdRng::seed_from_u64(seed);
                    run_one(strategy, &self.environment, n_steps, &mut rng)
                })
                .collect();

            debug!(
                "strategy {} finished {} runs of {} steps",
                strategy.name(),
                runs.len(),
                n_steps
            );
            results.insert(
                strategy.name().to_string(),
                StrategyResult::from_runs(&runs, n_steps, n_arms),
            );
        }

        Ok(results)
    }
}

/// Derives the seed for one run's private RNG stream (splitmix64-style
/// finalizer over the master seed, strategy index, and run index).
fn run_seed(master: u64, strategy_index: usize, run: usize) -> u64 {
    let mut z = master
        .wrapping_add((strategy_index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((run as u64 + 1).wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::abs_diff_eq;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            fixed_rewards: vec![1.0, 0.0, -1.0],
            n_steps: 50,
            n_runs: 8,
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(Experiment::new(small_config()).is_ok());

        let mut config = small_config();
        config.fixed_rewards.clear();
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::NoArmsAvailable)
        ));

        let mut config = small_config();
        config.n_steps = 0;
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let mut config = small_config();
        config.n_runs = 0;
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let mut config = small_config();
        config.epsilon = 1.2;
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let mut config = small_config();
        config.temperature = 0.0;
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let mut config = small_config();
        config.c = -1.0;
        assert!(matches!(
            Experiment::new(config),
            Err(SimulationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unknown_strategy_aborts_whole_comparison() {
        let experiment = Experiment::new(small_config()).unwrap();
        let result = experiment.compare(&["epsilon_greedy", "bayes_ucb"]);
        match result {
            Err(SimulationError::UnknownStrategy { name }) => assert_eq!(name, "bayes_ucb"),
            other => panic!("expected UnknownStrategy, got {other:?}"),
        }
    }

    #[test]
    fn test_result_dimensions_and_order() {
        let experiment = Experiment::new(small_config()).unwrap();
        let results = experiment
            .compare(&["ucb", "softmax", "epsilon_greedy"])
            .unwrap();

        let keys: Vec<_> = results.keys().cloned().collect();
        assert_eq!(keys, vec!["ucb", "softmax", "epsilon_greedy"]);

        for result in results.values() {
            assert_eq!(result.cumulative_rewards.len(), 50);
            assert_eq!(result.exploration_rate.len(), 50);
            assert_eq!(result.arm_counts.len(), 3);
            // n_runs * n_steps pulls in total.
            assert_eq!(result.arm_counts.iter().sum::<u64>(), 8 * 50);
        }
    }

    #[test]
    fn test_exploration_flag_semantics_per_strategy() {
        let experiment = Experiment::new(small_config()).unwrap();
        let results = experiment
            .compare(&["softmax", "ucb", "thompson"])
            .unwrap();

        // Softmax flags every step; UCB and Thompson never flag.
        assert!(results["softmax"].exploration_rate.iter().all(|&r| r == 1.0));
        assert!(results["ucb"].exploration_rate.iter().all(|&r| r == 0.0));
        assert!(results["thompson"].exploration_rate.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_compare_is_reproducible_bit_for_bit() {
        let experiment = Experiment::new(small_config()).unwrap();
        let names = ["epsilon_greedy", "ucb", "softmax", "thompson"];
        let a = experiment.compare(&names).unwrap();
        let b = experiment.compare(&names).unwrap();

        for name in names {
            assert_eq!(a[name].cumulative_rewards, b[name].cumulative_rewards);
            assert_eq!(a[name].exploration_rate, b[name].exploration_rate);
            assert_eq!(a[name].arm_counts, b[name].arm_counts);
        }
    }

    #[test]
    fn test_cumulative_curve_matches_manual_reduction() {
        use crate::simulation::RunResult;

        let runs = vec![
            RunResult {
                rewards: vec![1.0, -1.0, 2.0],
                exploratory: vec![true, false, true],
                pulls: vec![2, 1],
            },
            RunResult {
                rewards: vec![0.0, 3.0, 1.0],
                exploratory: vec![false, false, true],
                pulls: vec![1, 2],
            },
        ];

        let result = StrategyResult::from_runs(&runs, 3, 2);
        // Cumsums: [1, 0, 2] and [0, 3, 4]; elementwise mean.
        assert!(abs_diff_eq!(result.cumulative_rewards[0], 0.5));
        assert!(abs_diff_eq!(result.cumulative_rewards[1], 1.5));
        assert!(abs_diff_eq!(result.cumulative_rewards[2], 3.0));
        assert_eq!(result.exploration_rate, vec![0.5, 0.0, 1.0]);
        assert_eq!(result.arm_counts, vec![3, 3]);
    }

    #[test]
    fn test_run_seeds_are_distinct_streams() {
        let mut seeds = std::collections::HashSet::new();
        for strategy_index in 0..4 {
            for run in 0..100 {
                seeds.insert(run_seed(42, strategy_index, run));
            }
        }
        assert_eq!(seeds.len(), 400);
    }
}
