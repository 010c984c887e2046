//! Environment wrappers

use grid_rl_core::{Environment, Step};

/// Time limit wrapper.
///
/// Counts steps since the last reset and marks the step that exhausts the
/// budget as `truncated`, unless it already reached a terminal state.
pub struct TimeLimit<E> {
    /// Inner environment
    pub env: E,
    /// Maximum steps
    pub max_steps: usize,
    /// Current step count
    pub steps: usize,
}

impl<E> TimeLimit<E> {
    /// Create a new time limit wrapper
    pub fn new(env: E, max_steps: usize) -> Self {
        Self {
            env,
            max_steps,
            steps: 0,
        }
    }

    /// Steps left before truncation
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_steps.saturating_sub(self.steps)
    }

    /// Unwrap the inner environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E> Environment for TimeLimit<E>
where
    E: Environment,
{
    type Observation = E::Observation;
    type Action = E::Action;

    fn num_actions(&self) -> usize {
        self.env.num_actions()
    }

    fn reset(&mut self) -> Self::Observation {
        self.steps = 0;
        self.env.reset()
    }

    fn step(&mut self, action: Self::Action) -> Step<Self::Observation> {
        let mut step = self.env.step(action);
        self.steps += 1;

        if self.steps >= self.max_steps && !step.done {
            step.truncated = true;
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, GridWorldEnv};
    use grid_rl_core::{DiscreteAction, Move};

    #[test]
    fn test_truncates_after_budget() {
        let grid = Grid::parse("S 0 0 G").unwrap();
        let mut env = TimeLimit::new(GridWorldEnv::new(grid), 3);
        env.reset();

        let stay = DiscreteAction(Move::Left as usize);
        assert!(!env.step(stay).truncated);
        assert!(!env.step(stay).truncated);
        assert_eq!(env.remaining(), 1);
        let last = env.step(stay);
        assert!(last.truncated);
        assert!(!last.done);

        env.reset();
        assert_eq!(env.remaining(), 3);
    }

    #[test]
    fn test_terminal_step_is_not_truncated() {
        let grid = Grid::parse("S G").unwrap();
        let mut env = TimeLimit::new(GridWorldEnv::new(grid), 1);
        env.reset();

        let step = env.step(Move::Right.into());
        assert!(step.done);
        assert!(!step.truncated);
    }
}
