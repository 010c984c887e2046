//! Example: Q-learning agent solving a small maze

use grid_rl_agent::{rollout, train, TrainingConfig};
use grid_rl_env::{render_with_agent, Grid, GridWorldEnv};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let grid = Grid::parse(
        "S 0 0 1
         0 1 0 0
         0 0 0 G",
    )?;
    let mut env = GridWorldEnv::new(grid);

    let config = TrainingConfig {
        episodes: 1000,
        seed: Some(42),
        ..TrainingConfig::default()
    };
    let outcome = train(&mut env, &config)?;

    let last_hundred = outcome.report.recent_average(100);
    println!("Average reward over the last 100 episodes: {last_hundred:.2}");

    let replay = rollout(&mut env, &outcome.agent, config.rollout_steps);
    for (step, pos) in replay.positions().into_iter().enumerate() {
        println!("Step {step}:\n{}\n", render_with_agent(env.grid(), pos));
    }
    println!(
        "{} after {} steps",
        if replay.reached_goal { "Goal reached" } else { "Gave up" },
        replay.steps()
    );

    Ok(())
}
