//! Greedy replay of a trained agent

use grid_rl_core::{DiscreteAction, Environment, Position, Trajectory, Transition};
use grid_rl_env::GridWorldEnv;

use crate::QLearningAgent;

/// Result of replaying the greedy policy once
#[derive(Debug, Clone)]
pub struct Rollout {
    /// Where the replay began
    pub start: Position,
    /// Transitions taken, in order
    pub trajectory: Trajectory<Position, DiscreteAction>,
    /// Whether the replay ended on the goal
    pub reached_goal: bool,
}

impl Rollout {
    /// Every position visited, starting with `start`
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        std::iter::once(self.start)
            .chain(self.trajectory.transitions.iter().map(|t| t.next_observation))
            .collect()
    }

    /// Number of moves made
    #[must_use]
    pub fn steps(&self) -> usize {
        self.trajectory.len()
    }
}

/// Reset `env` and follow the agent's greedy action until the goal is reached
/// or `max_steps` moves have been made
pub fn rollout(env: &mut GridWorldEnv, agent: &QLearningAgent, max_steps: usize) -> Rollout {
    let goal = env.grid().goal();
    let start = env.reset();
    let mut state = start;
    let mut trajectory = Trajectory::new(uuid::Uuid::new_v4().to_string());

    for _ in 0..max_steps {
        if state == goal {
            break;
        }

        let action = agent.greedy_action(state);
        let step = env.step(action);
        trajectory.push(Transition {
            observation: state,
            action,
            reward: step.reward,
            next_observation: step.observation,
            done: step.done,
        });
        state = step.observation;
    }

    let reached_goal = state == goal;
    if reached_goal {
        tracing::debug!(steps = trajectory.len(), "greedy rollout reached the goal");
    } else {
        tracing::warn!(max_steps, %state, "greedy rollout did not reach the goal");
    }

    Rollout {
        start,
        trajectory,
        reached_goal,
    }
}
