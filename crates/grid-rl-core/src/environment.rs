//! Environment traits and types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Reward;

/// Result of a single environment step
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    /// Observation after the step
    pub observation: O,
    /// Reward signal
    pub reward: Reward,
    /// Whether the episode reached a terminal state
    pub done: bool,
    /// Whether the episode was cut short by a step budget
    pub truncated: bool,
}

impl<O> Step<O> {
    /// Whether the episode is over for either reason
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.done || self.truncated
    }
}

/// Episode information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Episode ID
    pub id: String,
    /// Total reward
    pub total_reward: f64,
    /// Number of steps
    pub steps: usize,
    /// Whether the episode ended in a terminal state
    pub done: bool,
    /// Whether episode was truncated
    pub truncated: bool,
    /// Start time
    pub start_time: DateTime<Utc>,
    /// End time
    pub end_time: Option<DateTime<Utc>>,
}

/// Core environment trait.
///
/// Environments are synchronous: `reset` and `step` only touch in-memory
/// state and never fail.
pub trait Environment {
    /// Observation type
    type Observation: Clone;
    /// Action type
    type Action: Copy;

    /// Number of discrete actions the environment understands
    fn num_actions(&self) -> usize;

    /// Reset the environment and return the initial observation
    fn reset(&mut self) -> Self::Observation;

    /// Take a step in the environment
    fn step(&mut self, action: Self::Action) -> Step<Self::Observation>;
}

impl<E> Environment for &mut E
where
    E: Environment + ?Sized,
{
    type Observation = E::Observation;
    type Action = E::Action;

    fn num_actions(&self) -> usize {
        (**self).num_actions()
    }

    fn reset(&mut self) -> Self::Observation {
        (**self).reset()
    }

    fn step(&mut self, action: Self::Action) -> Step<Self::Observation> {
        (**self).step(action)
    }
}

/// Wrapper for environments that tracks episodes
pub struct TrackedEnvironment<E> {
    /// Inner environment
    pub env: E,
    /// Current episode
    pub episode: Option<Episode>,
    /// Step counter
    pub step_count: usize,
}

impl<E> TrackedEnvironment<E> {
    /// Create a new tracked environment
    pub fn new(env: E) -> Self {
        Self {
            env,
            episode: None,
            step_count: 0,
        }
    }

    /// Current episode info
    #[must_use]
    pub fn episode_info(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// Unwrap the inner environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E> Environment for TrackedEnvironment<E>
where
    E: Environment,
{
    type Observation = E::Observation;
    type Action = E::Action;

    fn num_actions(&self) -> usize {
        self.env.num_actions()
    }

    fn reset(&mut self) -> Self::Observation {
        // Close out the previous episode if it never ended
        if let Some(ref mut episode) = self.episode {
            if episode.end_time.is_none() {
                episode.end_time = Some(Utc::now());
            }
        }

        let episode = Episode {
            id: uuid::Uuid::new_v4().to_string(),
            total_reward: 0.0,
            steps: 0,
            done: false,
            truncated: false,
            start_time: Utc::now(),
            end_time: None,
        };
        tracing::trace!(episode_id = %episode.id, "episode started");
        self.episode = Some(episode);
        self.step_count = 0;

        self.env.reset()
    }

    fn step(&mut self, action: Self::Action) -> Step<Self::Observation> {
        let step = self.env.step(action);

        self.step_count += 1;
        if let Some(ref mut episode) = self.episode {
            episode.total_reward += step.reward.0;
            episode.steps = self.step_count;

            if step.is_last() {
                episode.done = step.done;
                episode.truncated = step.truncated;
                episode.end_time = Some(Utc::now());
            }
        }

        step
    }
}
