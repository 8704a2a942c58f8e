//! Per-run online estimate of each arm's value.

/// Running-mean reward estimates and pull counts for one run.
///
/// Uses the sample-average update rule: after every pull,
/// `q[arm] += (reward - q[arm]) / n[arm]` with the count incremented first.
/// `q[arm]` therefore always equals the arithmetic mean of all rewards
/// observed for that arm since the run began, with O(1) memory and O(1)
/// work per step.
#[derive(Clone, Debug)]
pub struct Estimator {
    q: Vec<f64>,
    n: Vec<u32>,
}

impl Estimator {
    /// Creates a fresh estimator with all estimates and counts at zero.
    #[must_use]
    pub fn new(n_arms: usize) -> Self {
        Self {
            q: vec![0.0; n_arms],
            n: vec![0; n_arms],
        }
    }

    /// Records one observed reward for `arm`.
    pub fn update(&mut self, arm: usize, reward: f64) {
        self.n[arm] += 1;
        self.q[arm] += (reward - self.q[arm]) / f64::from(self.n[arm]);
    }

    /// Current running-mean estimate for each arm.
    pub fn estimates(&self) -> &[f64] {
        &self.q
    }

    /// Number of pulls recorded for each arm.
    pub fn pulls(&self) -> &[u32] {
        &self.n
    }

    /// Number of arms.
    pub fn n_arms(&self) -> usize {
        self.q.len()
    }
}
