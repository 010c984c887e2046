//! Tabular Q-learning agent

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::{Array3, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use grid_rl_core::{
    ActionSpace, DiscreteAction, DiscreteSpace, Move, Position, RLError, Result, Reward,
};

use crate::utils::{argmax, max_value};

/// Hyperparameters for the Q-learning agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    /// Step size of the TD update (alpha)
    pub learning_rate: f64,
    /// Discount factor (gamma)
    pub gamma: f64,
    /// Initial exploration rate
    pub epsilon: f64,
    /// Floor for the exploration rate
    pub epsilon_min: f64,
    /// Multiplicative decay applied once per episode
    pub epsilon_decay: f64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            gamma: 0.9,
            epsilon: 1.0,
            epsilon_min: 0.1,
            epsilon_decay: 0.995,
        }
    }
}

impl QLearningConfig {
    /// Check that every hyperparameter is in range
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (
                "learning_rate",
                self.learning_rate,
                self.learning_rate > 0.0 && self.learning_rate <= 1.0,
            ),
            ("gamma", self.gamma, (0.0..=1.0).contains(&self.gamma)),
            ("epsilon", self.epsilon, (0.0..=1.0).contains(&self.epsilon)),
            ("epsilon_min", self.epsilon_min, (0.0..=1.0).contains(&self.epsilon_min)),
            (
                "epsilon_decay",
                self.epsilon_decay,
                self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0,
            ),
        ];

        match checks.iter().find(|(_, _, ok)| !ok) {
            Some((name, value, _)) => {
                Err(RLError::InvalidConfig(format!("{name} out of range: {value}")))
            }
            None => Ok(()),
        }
    }
}

/// Q-learning agent over a `rows × cols` grid with the four moves as actions.
///
/// The Q-table is indexed by `(row, col, action)` and starts at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QLearningAgent {
    config: QLearningConfig,
    epsilon: f64,
    q_table: Array3<f64>,
}

impl QLearningAgent {
    /// Create an agent for an `n_rows × n_cols` grid
    pub fn new(n_rows: usize, n_cols: usize, config: QLearningConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            epsilon: config.epsilon,
            config,
            q_table: Array3::zeros((n_rows, n_cols, Move::COUNT)),
        })
    }

    /// Hyperparameters
    #[must_use]
    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Current exploration rate
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Override the exploration rate, clamped to `[0, 1]`. Setting 0 makes
    /// `choose_action` purely greedy.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.clamp(0.0, 1.0);
    }

    /// Number of actions per state
    #[must_use]
    pub fn n_actions(&self) -> usize {
        self.q_table.dim().2
    }

    /// The whole Q-table
    #[must_use]
    pub fn q_table(&self) -> &Array3<f64> {
        &self.q_table
    }

    /// All action values at `state`
    #[must_use]
    pub fn q_values(&self, state: Position) -> ArrayView1<'_, f64> {
        self.q_table.slice(ndarray::s![state.row, state.col, ..])
    }

    /// Value of `action` at `state`
    #[must_use]
    pub fn q_value(&self, state: Position, action: DiscreteAction) -> f64 {
        self.q_table[[state.row, state.col, action.0]]
    }

    /// Best action at `state`. Ties resolve to the lowest action index.
    #[must_use]
    pub fn greedy_action(&self, state: Position) -> DiscreteAction {
        DiscreteAction(argmax(self.q_values(state)))
    }

    /// Epsilon-greedy selection: a uniformly random action with probability
    /// epsilon, the greedy action otherwise
    pub fn choose_action<R: Rng + ?Sized>(&self, state: Position, rng: &mut R) -> DiscreteAction {
        if rng.gen::<f64>() < self.epsilon {
            DiscreteSpace::new(self.n_actions()).sample(rng)
        } else {
            self.greedy_action(state)
        }
    }

    /// One-step Q-learning update for the transition
    /// `state --action--> next_state` with `reward`.
    ///
    /// Action codes outside the move set are ignored, the same way the
    /// environment treats them as a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `state` or `next_state` lies outside the table's grid.
    pub fn learn(
        &mut self,
        state: Position,
        action: DiscreteAction,
        reward: Reward,
        next_state: Position,
    ) {
        if action.0 >= self.n_actions() {
            tracing::trace!(action = action.0, "ignoring update for unknown action");
            return;
        }

        let best_next = max_value(self.q_values(next_state));
        let target = reward.0 + self.config.gamma * best_next;

        let q = &mut self.q_table[[state.row, state.col, action.0]];
        *q += self.config.learning_rate * (target - *q);
    }

    /// Decay epsilon once, never below `epsilon_min`
    pub fn decay_epsilon(&mut self) {
        if self.epsilon > self.config.epsilon_min {
            self.epsilon = (self.epsilon * self.config.epsilon_decay).max(self.config.epsilon_min);
        }
    }

    /// Fail unless the table fits an `n_rows × n_cols` grid
    pub fn ensure_shape(&self, n_rows: usize, n_cols: usize) -> Result<()> {
        let actual = self.q_table.dim();
        let expected = (n_rows, n_cols, Move::COUNT);
        if actual == expected {
            Ok(())
        } else {
            Err(RLError::DimensionMismatch { expected, actual })
        }
    }

    /// Save the agent as JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), "saved Q-learning agent");
        Ok(())
    }

    /// Load an agent saved with [`QLearningAgent::save`]
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let agent: Self = serde_json::from_reader(reader)?;
        agent.config.validate()?;
        if agent.n_actions() != Move::COUNT {
            let (rows, cols, actions) = agent.q_table.dim();
            return Err(RLError::DimensionMismatch {
                expected: (rows, cols, Move::COUNT),
                actual: (rows, cols, actions),
            });
        }
        tracing::info!(path = %path.display(), "loaded Q-learning agent");
        Ok(agent)
    }
}
