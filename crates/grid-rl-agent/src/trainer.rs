//! Episodic training loop

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use grid_rl_core::{Environment, RLError, Result, TrackedEnvironment};
use grid_rl_env::{GridWorldEnv, TimeLimit};

use crate::{QLearningAgent, QLearningConfig};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,
    /// Step budget per training episode
    pub max_steps: usize,
    /// Step budget for the greedy replay after training
    pub rollout_steps: usize,
    /// Log progress every this many episodes (0 disables)
    pub log_interval: usize,
    /// Seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Agent hyperparameters
    pub agent: QLearningConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            max_steps: 200,
            rollout_steps: 100,
            log_interval: 100,
            seed: None,
            agent: QLearningConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Check settings and agent hyperparameters
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(RLError::InvalidConfig("max_steps must be at least 1".to_string()));
        }
        self.agent.validate()
    }
}

/// Statistics for one training episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Zero-based episode index
    pub episode: usize,
    /// Sum of rewards
    pub total_reward: f64,
    /// Steps taken
    pub steps: usize,
    /// Whether the goal was reached within the step budget
    pub reached_goal: bool,
    /// Exploration rate after the end-of-episode decay
    pub epsilon: f64,
}

/// Per-episode history of a training run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingReport {
    /// One entry per episode, in order
    pub episodes: Vec<EpisodeStats>,
}

impl TrainingReport {
    /// Fraction of episodes that reached the goal
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let reached = self.episodes.iter().filter(|e| e.reached_goal).count();
        reached as f64 / self.episodes.len() as f64
    }

    /// Highest episode reward, if any episode ran
    #[must_use]
    pub fn best_reward(&self) -> Option<f64> {
        self.episodes.iter().map(|e| e.total_reward).reduce(f64::max)
    }

    /// Mean reward over the last `window` episodes
    #[must_use]
    pub fn recent_average(&self, window: usize) -> f64 {
        let tail = &self.episodes[self.episodes.len().saturating_sub(window)..];
        if tail.is_empty() {
            0.0
        } else {
            tail.iter().map(|e| e.total_reward).sum::<f64>() / tail.len() as f64
        }
    }
}

/// A trained agent and how it got there
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// The trained agent
    pub agent: QLearningAgent,
    /// Episode history
    pub report: TrainingReport,
}

/// Train a fresh agent on `env`, seeding the RNG from `config.seed`
pub fn train(env: &mut GridWorldEnv, config: &TrainingConfig) -> Result<TrainingOutcome> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    train_with_rng(env, config, &mut rng)
}

/// Train a fresh agent on `env` drawing exploration noise from `rng`.
///
/// Every episode resets the environment, runs at most `max_steps`
/// choose/step/learn iterations, stops early on reaching the goal, and
/// decays epsilon once at the end.
pub fn train_with_rng<R: Rng + ?Sized>(
    env: &mut GridWorldEnv,
    config: &TrainingConfig,
    rng: &mut R,
) -> Result<TrainingOutcome> {
    config.validate()?;

    let mut agent = QLearningAgent::new(env.n_rows(), env.n_cols(), config.agent.clone())?;
    let mut report = TrainingReport {
        episodes: Vec::with_capacity(config.episodes),
    };

    tracing::info!(
        rows = env.n_rows(),
        cols = env.n_cols(),
        episodes = config.episodes,
        max_steps = config.max_steps,
        "starting Q-learning training"
    );

    let mut tracked = TrackedEnvironment::new(TimeLimit::new(&mut *env, config.max_steps));

    for episode in 0..config.episodes {
        let mut state = tracked.reset();

        loop {
            let action = agent.choose_action(state, rng);
            let step = tracked.step(action);
            agent.learn(state, action, step.reward, step.observation);
            state = step.observation;

            if step.is_last() {
                break;
            }
        }

        agent.decay_epsilon();

        let (total_reward, steps, reached_goal) = tracked
            .episode_info()
            .map_or((0.0, 0, false), |e| (e.total_reward, e.steps, e.done));

        report.episodes.push(EpisodeStats {
            episode,
            total_reward,
            steps,
            reached_goal,
            epsilon: agent.epsilon(),
        });

        if config.log_interval > 0 && (episode + 1) % config.log_interval == 0 {
            tracing::info!(
                episode = episode + 1,
                reward = total_reward,
                avg_reward = report.recent_average(config.log_interval),
                steps,
                epsilon = agent.epsilon(),
                "training progress"
            );
        }
    }

    tracing::info!(
        episodes = report.episodes.len(),
        success_rate = report.success_rate(),
        best_reward = report.best_reward().unwrap_or(0.0),
        "training complete"
    );

    Ok(TrainingOutcome { agent, report })
}
