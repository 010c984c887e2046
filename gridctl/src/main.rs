// gridctl: train grid-world Q-learning agents and replay their policies

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gridctl")]
#[command(about = "Grid-world Q-learning CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an agent on a grid and replay its greedy policy
    Train {
        /// Grid file, or `-` for stdin
        grid: PathBuf,

        /// JSON training config; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of training episodes
        #[arg(short, long)]
        episodes: Option<usize>,

        /// Step budget per training episode
        #[arg(long)]
        max_steps: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Step budget for the greedy replay
        #[arg(long)]
        rollout_steps: Option<usize>,

        /// Pause between replay frames, in milliseconds
        #[arg(long, default_value = "0")]
        frame_delay_ms: u64,

        /// Write the trained policy to this file
        #[arg(long)]
        save_policy: Option<PathBuf>,
    },

    /// Replay a saved policy on a grid
    Replay {
        /// Grid file, or `-` for stdin
        grid: PathBuf,

        /// Policy file written by `train --save-policy`
        #[arg(short, long)]
        policy: PathBuf,

        /// Step budget for the greedy replay
        #[arg(long, default_value = "100")]
        rollout_steps: usize,

        /// Pause between replay frames, in milliseconds
        #[arg(long, default_value = "0")]
        frame_delay_ms: u64,
    },

    /// Check that a grid is well formed
    Validate {
        /// Grid file, or `-` for stdin
        grid: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            grid,
            config,
            episodes,
            max_steps,
            seed,
            rollout_steps,
            frame_delay_ms,
            save_policy,
        } => {
            let overrides = commands::TrainOverrides {
                episodes,
                max_steps,
                seed,
                rollout_steps,
            };
            commands::train(
                &grid,
                config.as_deref(),
                overrides,
                frame_delay_ms,
                save_policy.as_deref(),
            )
            .await?;
        }

        Commands::Replay {
            grid,
            policy,
            rollout_steps,
            frame_delay_ms,
        } => {
            commands::replay(&grid, &policy, rollout_steps, frame_delay_ms).await?;
        }

        Commands::Validate { grid } => {
            commands::validate(&grid)?;
        }
    }

    Ok(())
}
