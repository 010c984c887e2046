//! Tabular Q-learning for grid worlds
//!
//! This crate provides:
//! - `QLearningAgent`: a dense Q-table with epsilon-greedy action selection
//! - `train`: the episodic training loop against a `GridWorldEnv`
//! - `rollout`: greedy replay of a trained agent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod q_learning;
pub mod rollout;
pub mod trainer;
pub mod utils;

// Re-export agents
pub use q_learning::{QLearningAgent, QLearningConfig};
pub use rollout::{rollout, Rollout};
pub use trainer::{
    train, train_with_rng, EpisodeStats, TrainingConfig, TrainingOutcome, TrainingReport,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{rollout, train, QLearningAgent, QLearningConfig, TrainingConfig};
    pub use grid_rl_core::prelude::*;
}
