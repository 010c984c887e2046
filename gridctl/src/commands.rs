// Command implementations for gridctl

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use grid_rl_agent::{rollout, train as train_agent, QLearningAgent, TrainingConfig};
use grid_rl_env::{render_with_agent, Grid, GridWorldEnv};

/// Command-line values that take precedence over the config file
#[derive(Debug, Default)]
pub struct TrainOverrides {
    pub episodes: Option<usize>,
    pub max_steps: Option<usize>,
    pub seed: Option<u64>,
    pub rollout_steps: Option<usize>,
}

impl TrainOverrides {
    fn apply(self, config: &mut TrainingConfig) {
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(rollout_steps) = self.rollout_steps {
            config.rollout_steps = rollout_steps;
        }
    }
}

pub async fn train(
    grid_path: &Path,
    config_path: Option<&Path>,
    overrides: TrainOverrides,
    frame_delay_ms: u64,
    save_policy: Option<&Path>,
) -> Result<()> {
    let grid = read_grid(grid_path)?;
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => TrainingConfig::default(),
    };
    overrides.apply(&mut config);
    tracing::debug!(?config, "resolved training config");

    println!("🤖 Training Q-learning agent");
    println!("   Grid: {}x{}", grid.n_rows(), grid.n_cols());
    println!("   Episodes: {}", config.episodes);
    println!("   Max steps per episode: {}", config.max_steps);

    let mut env = GridWorldEnv::new(grid);
    let outcome = train_agent(&mut env, &config).context("Training failed")?;

    println!("\n✅ Training complete");
    println!("   Success rate: {:.1}%", outcome.report.success_rate() * 100.0);
    if let Some(best) = outcome.report.best_reward() {
        println!("   Best reward: {best:.1}");
    }

    if let Some(path) = save_policy {
        outcome
            .agent
            .save(path)
            .with_context(|| format!("Failed to save policy to {}", path.display()))?;
        println!("   Policy saved to {}", path.display());
    }

    println!();
    play(&mut env, &outcome.agent, config.rollout_steps, frame_delay_ms).await;
    Ok(())
}

pub async fn replay(
    grid_path: &Path,
    policy_path: &Path,
    rollout_steps: usize,
    frame_delay_ms: u64,
) -> Result<()> {
    let grid = read_grid(grid_path)?;
    let agent = QLearningAgent::load(policy_path)
        .with_context(|| format!("Failed to load policy from {}", policy_path.display()))?;
    agent
        .ensure_shape(grid.n_rows(), grid.n_cols())
        .context("Policy does not fit this grid")?;

    let mut env = GridWorldEnv::new(grid);
    play(&mut env, &agent, rollout_steps, frame_delay_ms).await;
    Ok(())
}

pub fn validate(grid_path: &Path) -> Result<()> {
    let grid = read_grid(grid_path)?;

    println!("✅ Grid is valid");
    println!("   Size: {}x{}", grid.n_rows(), grid.n_cols());
    println!("   Start: {}", grid.start());
    println!("   Goal: {}", grid.goal());
    Ok(())
}

/// Replay the greedy policy and print one frame per visited cell
async fn play(
    env: &mut GridWorldEnv,
    agent: &QLearningAgent,
    rollout_steps: usize,
    frame_delay_ms: u64,
) {
    let result = rollout(env, agent, rollout_steps);

    for (step, pos) in result.positions().into_iter().enumerate() {
        println!("Step {step}:");
        println!("{}\n", render_with_agent(env.grid(), pos));
        if frame_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(frame_delay_ms)).await;
        }
    }

    if result.reached_goal {
        println!("🎉 Goal reached in {} steps", result.steps());
    } else {
        println!("❌ Goal not reached within {rollout_steps} steps");
    }
}

fn read_grid(path: &Path) -> Result<Grid> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read grid from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file {}", path.display()))?
    };

    Grid::parse(&text).with_context(|| format!("Invalid grid in {}", path.display()))
}

fn load_config(path: &Path) -> Result<TrainingConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}
