//! Companion value-iteration solver for a small grid with obstacles.
//!
//! Independent of the bandit core: a fixed-point computation of the optimal
//! value function and policy for shortest-path navigation on a square grid,
//! with a -1 step reward, discount 0.9, and a 1e-3 convergence threshold.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::error::{Result, SimulationError};

const GAMMA: f64 = 0.9;
const THRESHOLD: f64 = 1e-3;
const STEP_REWARD: f64 = -1.0;

/// Grid coordinate as (row, column).
pub type Cell = (usize, usize);

/// One of the four moves available in every non-terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in fixed evaluation order; ties between equally good moves
    /// resolve to the earliest entry.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Action::Up => "↑",
            Action::Down => "↓",
            Action::Left => "←",
            Action::Right => "→",
        };
        write!(f, "{symbol}")
    }
}

/// Converged value function and greedy policy.
///
/// Obstacle and goal cells keep value 0 and no action, as do cells walled off
/// from every neighbor.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Optimal state value per cell.
    pub values: Vec<Vec<f64>>,
    /// Optimal move per cell, `None` for terminal/obstacle/unreachable cells.
    pub policy: Vec<Vec<Option<Action>>>,
}

/// A square grid navigation problem.
#[derive(Clone, Debug)]
pub struct Gridworld {
    size: usize,
    start: Cell,
    end: Cell,
    obstacles: HashSet<Cell>,
}

impl Gridworld {
    /// Configures a grid of `size` x `size` cells.
    ///
    /// Start, end, and all obstacles must lie inside the grid, and neither
    /// endpoint may sit on an obstacle.
    pub fn new(size: usize, start: Cell, end: Cell, obstacles: HashSet<Cell>) -> Result<Self> {
        if size < 2 {
            return Err(SimulationError::InvalidParameter {
                message: format!("grid size {size} too small"),
            });
        }
        for (label, cell) in [("start", start), ("end", end)] {
            if cell.0 >= size || cell.1 >= size {
                return Err(SimulationError::InvalidParameter {
                    message: format!("{label} cell {cell:?} outside {size}x{size} grid"),
                });
            }
        }
        if let Some(cell) = obstacles.iter().find(|c| c.0 >= size || c.1 >= size) {
            return Err(SimulationError::InvalidParameter {
                message: format!("obstacle {cell:?} outside {size}x{size} grid"),
            });
        }
        if obstacles.contains(&start) || obstacles.contains(&end) {
            return Err(SimulationError::InvalidParameter {
                message: "start and end cells cannot be obstacles".to_string(),
            });
        }
        Ok(Self {
            size,
            start,
            end,
            obstacles,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Goal cell.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Destination of `action` from `cell`, or `None` if it leaves the grid
    /// or lands on an obstacle.
    fn step(&self, cell: Cell, action: Action) -> Option<Cell> {
        let (di, dj) = action.delta();
        let ni = cell.0.checked_add_signed(di)?;
        let nj = cell.1.checked_add_signed(dj)?;
        if ni >= self.size || nj >= self.size || self.obstacles.contains(&(ni, nj)) {
            return None;
        }
        Some((ni, nj))
    }

    /// Runs value iteration to convergence.
    pub fn solve(&self) -> Solution {
        let mut values = vec![vec![0.0; self.size]; self.size];
        let mut policy = vec![vec![None; self.size]; self.size];
        let mut sweeps = 0usize;

        loop {
            let mut new_values = values.clone();
            let mut delta = 0.0f64;
            sweeps += 1;

            for i in 0..self.size {
                for j in 0..self.size {
                    let cell = (i, j);
                    if cell == self.end || self.obstacles.contains(&cell) {
                        continue;
                    }

                    let mut best: Option<(f64, Action)> = None;
                    for action in Action::ALL {
                        if let Some((ni, nj)) = self.step(cell, action) {
                            let v = STEP_REWARD + GAMMA * values[ni][nj];
                            if best.is_none_or(|(bv, _)| v > bv) {
                                best = Some((v, action));
                            }
                        }
                    }

                    // Cells with no legal move keep their value instead of
                    // diverging to -inf.
                    if let Some((v, action)) = best {
                        new_values[i][j] = v;
                        policy[i][j] = Some(action);
                        delta = delta.max((v - values[i][j]).abs());
                    }
                }
            }

            values = new_values;
            if delta < THRESHOLD {
                break;
            }
        }

        debug!("value iteration converged after {sweeps} sweeps");
        Solution { values, policy }
    }
}
