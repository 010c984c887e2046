//! Trajectory and transition storage

use serde::{Deserialize, Serialize};

use crate::Reward;

/// Single transition in a trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<O, A> {
    /// Observation before the action
    pub observation: O,
    /// Action taken
    pub action: A,
    /// Reward received
    pub reward: Reward,
    /// Observation after the action
    pub next_observation: O,
    /// Whether the episode ended
    pub done: bool,
}

/// Complete trajectory of an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<O, A> {
    /// Sequence of transitions
    pub transitions: Vec<Transition<O, A>>,
    /// Total reward
    pub total_reward: f64,
    /// Episode ID
    pub episode_id: String,
}

impl<O, A> Trajectory<O, A> {
    /// Create a new empty trajectory
    #[must_use]
    pub fn new(episode_id: String) -> Self {
        Self {
            transitions: Vec::new(),
            total_reward: 0.0,
            episode_id,
        }
    }

    /// Add a transition to the trajectory
    pub fn push(&mut self, transition: Transition<O, A>) {
        self.total_reward += transition.reward.0;
        self.transitions.push(transition);
    }

    /// Get the length of the trajectory
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if trajectory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Whether the last transition ended the episode
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.transitions.last().is_some_and(|t| t.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: u8, to: u8, reward: f64, done: bool) -> Transition<u8, u8> {
        Transition {
            observation: from,
            action: 0,
            reward: Reward(reward),
            next_observation: to,
            done,
        }
    }

    #[test]
    fn test_push_accumulates_reward() {
        let mut trajectory = Trajectory::new("ep".to_string());
        assert!(trajectory.is_empty());
        assert!(!trajectory.is_complete());

        trajectory.push(transition(0, 1, -1.0, false));
        trajectory.push(transition(1, 2, 100.0, true));

        assert_eq!(trajectory.len(), 2);
        assert!((trajectory.total_reward - 99.0).abs() < 1e-12);
        assert!(trajectory.is_complete());
        assert_eq!(trajectory.transitions[1].next_observation, 2);
    }
}
