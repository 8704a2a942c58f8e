use super::{Choice, Policy, STABILIZER, argmax};
use crate::estimator::Estimator;

/// Upper confidence bound policy.
///
/// For the first `n_arms` steps the policy force-selects arm `t`, a
/// deterministic warm-up sweep guaranteeing every arm is tried once before
/// the bound is consulted. Afterwards it picks
/// `argmax_a q[a] + c * sqrt(ln(t+1) / (n[a] + 1e-5))`; the additive
/// stabilizer keeps the score finite for arms that were never pulled.
///
/// Never flagged exploratory: the uncertainty bonus itself balances
/// exploration against exploitation.
#[derive(Clone, Debug)]
pub struct Ucb {
    c: f64,
}

impl Ucb {
    /// Creates a new UCB policy with the given confidence constant.
    ///
    /// Higher values of `c` widen the confidence bonus and encourage more
    /// exploration.
    #[must_use]
    pub fn new(c: f64) -> Self {
        assert!(c > 0.0, "c must be positive");
        Self { c }
    }

    /// Gets the confidence constant.
    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Policy for Ucb {
    fn choose(&self, t: usize, estimator: &Estimator, _rng: &mut dyn rand::RngCore) -> Choice {
        let n_arms = estimator.n_arms();
        if t < n_arms {
            return Choice {
                arm: t,
                exploratory: false,
            };
        }

        let bonus_scale = ((t as f64 + 1.0).ln()).sqrt() * self.c;
        let scores: Vec<f64> = estimator
            .estimates()
            .iter()
            .zip(estimator.pulls())
            .map(|(&q, &n)| q + bonus_scale / (f64::from(n) + STABILIZER).sqrt())
            .collect();

        Choice {
            arm: argmax(&scores),
            exploratory: false,
        }
    }
}
