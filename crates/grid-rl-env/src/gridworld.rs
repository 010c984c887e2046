//! Deterministic grid-world simulator

use grid_rl_core::{DiscreteAction, Environment, Move, Position, Reward, Step};

use crate::{render_with_agent, Grid};

/// Reward for entering the goal cell
pub const GOAL_REWARD: f64 = 100.0;

/// Reward for every other step, including rejected moves
pub const STEP_REWARD: f64 = -1.0;

/// Grid-world environment.
///
/// The agent starts on the grid's start cell and moves one cell per step.
/// Moves off the grid or into a wall leave it in place. Entering the goal
/// ends the episode.
#[derive(Debug, Clone)]
pub struct GridWorldEnv {
    grid: Grid,
    agent_pos: Position,
}

impl GridWorldEnv {
    /// Create a new environment with the agent on the start cell
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let agent_pos = grid.start();
        Self { grid, agent_pos }
    }

    /// The underlying grid
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current agent position
    #[must_use]
    pub fn position(&self) -> Position {
        self.agent_pos
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.grid.n_rows()
    }

    /// Number of columns
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.grid.n_cols()
    }

    /// Where `action` would take the agent from `from`. Unknown action codes,
    /// off-grid moves and moves into walls all stay put.
    #[must_use]
    pub fn transition(&self, from: Position, action: DiscreteAction) -> Position {
        let Some(mv) = Move::from_action(action) else {
            return from;
        };

        match from.neighbor(mv, self.grid.n_rows(), self.grid.n_cols()) {
            Some(next) if !self.grid.is_wall(next) => next,
            _ => from,
        }
    }

    /// Render the grid with the agent drawn as `A`
    #[must_use]
    pub fn render(&self) -> String {
        render_with_agent(&self.grid, self.agent_pos)
    }
}

impl Environment for GridWorldEnv {
    type Observation = Position;
    type Action = DiscreteAction;

    fn num_actions(&self) -> usize {
        Move::COUNT
    }

    fn reset(&mut self) -> Position {
        self.agent_pos = self.grid.start();
        self.agent_pos
    }

    fn step(&mut self, action: DiscreteAction) -> Step<Position> {
        self.agent_pos = self.transition(self.agent_pos, action);

        let done = self.agent_pos == self.grid.goal();
        let reward = if done { GOAL_REWARD } else { STEP_REWARD };

        Step {
            observation: self.agent_pos,
            reward: Reward(reward),
            done,
            truncated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(text: &str) -> GridWorldEnv {
        GridWorldEnv::new(Grid::parse(text).unwrap())
    }

    #[test]
    fn test_reset_returns_start() {
        let mut env = env("0 0 0\n0 S 0\n0 0 G");
        assert_eq!(env.reset(), Position::new(1, 1));

        env.step(Move::Right.into());
        assert_eq!(env.position(), Position::new(1, 2));
        assert_eq!(env.reset(), Position::new(1, 1));
        assert_eq!(env.position(), Position::new(1, 1));
    }

    #[test]
    fn test_open_move() {
        let mut env = env("S 0\n0 G");
        env.reset();
        let step = env.step(Move::Right.into());
        assert_eq!(step.observation, Position::new(0, 1));
        assert_eq!(step.reward, Reward(STEP_REWARD));
        assert!(!step.done);
        assert!(!step.truncated);
    }

    #[test]
    fn test_off_grid_and_walls_block() {
        let mut env = env("S 1\n0 G");
        env.reset();

        for action in [Move::Up, Move::Left, Move::Right] {
            let step = env.step(action.into());
            assert_eq!(step.observation, Position::new(0, 0), "{action} should be blocked");
            assert_eq!(step.reward, Reward(-1.0));
            assert!(!step.done);
        }
    }

    #[test]
    fn test_unknown_action_stays() {
        let mut env = env("S 0\n0 G");
        env.reset();
        let step = env.step(DiscreteAction(7));
        assert_eq!(step.observation, Position::new(0, 0));
        assert_eq!(step.reward, Reward(-1.0));
        assert!(!step.done);
    }

    #[test]
    fn test_reaching_goal() {
        let mut env = env("S 0\n0 G");
        env.reset();
        env.step(Move::Down.into());
        let step = env.step(Move::Right.into());
        assert_eq!(step.observation, Position::new(1, 1));
        assert_eq!(step.reward, Reward(GOAL_REWARD));
        assert!(step.done);
    }

    #[test]
    fn test_render_current_state() {
        let mut env = env("S 0\n1 G");
        env.reset();
        env.step(Move::Right.into());
        assert_eq!(env.render(), "S A\n1 G");
    }
}
