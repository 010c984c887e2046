//! Core reinforcement learning traits and types for grid-world agents
//!
//! This crate provides the shared vocabulary used by the environment and
//! agent crates: discrete actions and moves, grid positions, rewards, the
//! `Environment` trait with its step and episode records, trajectories and
//! the common error type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod environment;
pub mod error;
pub mod reward;
pub mod state;
pub mod trajectory;

// Re-export core traits and types
pub use action::{ActionSpace, DiscreteAction, DiscreteSpace, Move};
pub use environment::{Environment, Episode, Step, TrackedEnvironment};
pub use error::{GridError, RLError, Result};
pub use reward::Reward;
pub use state::Position;
pub use trajectory::{Trajectory, Transition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActionSpace, DiscreteAction, DiscreteSpace, Environment, Move, Position, Result,
        Reward, Step,
    };
}
