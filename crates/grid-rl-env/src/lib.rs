//! Grid-world reinforcement learning environment
//!
//! This crate provides:
//! - `Grid`: a validated, immutable map of open cells, walls, a start and a goal
//! - `GridWorldEnv`: the deterministic simulator over a `Grid`
//! - Text rendering of a grid with the agent drawn on it
//! - Environment wrappers such as `TimeLimit`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod grid;
pub mod gridworld;
pub mod render;
pub mod wrappers;

// Re-export environments
pub use grid::{Cell, Grid};
pub use gridworld::{GridWorldEnv, GOAL_REWARD, STEP_REWARD};
pub use render::render_with_agent;
pub use wrappers::TimeLimit;

// Re-export core types
pub use grid_rl_core::{
    DiscreteAction, Environment, GridError, Move, Position, Reward, Step,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Cell, Grid, GridWorldEnv, TimeLimit};
    pub use grid_rl_core::prelude::*;
}
