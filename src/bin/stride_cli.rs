// ABOUTME: Stride CLI - train the scheduler and print daily recommendations
// ABOUTME: Thin driver around the core; all I/O and rendering lives here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Stride command-line driver.
//!
//! Usage:
//! ```bash
//! # Train an agent and report episode rewards
//! stride-cli train --episodes 5000
//!
//! # Train, then print a greedy recommendation for a fresh athlete as JSON
//! stride-cli recommend --episodes 2000
//!
//! # Train, then preview the first ten days of the learned plan
//! stride-cli simulate --days 10
//!
//! # Compare seeds in parallel
//! stride-cli train --episodes 1000 --seeds 0,1,2,3
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stride::trainer::{sweep_seeds, train, TrainingOutcome};
use stride_core::SchedulerConfig;
use stride_intelligence::TrainingAction;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride marathon-training scheduler",
    long_about = "Trains a Dyna-Q scheduling agent against the fitness/fatigue simulation and prints daily training recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Number of training episodes
    #[arg(long, global = true)]
    episodes: Option<usize>,

    /// Episode length in days before race day
    #[arg(long, global = true)]
    days_to_race: Option<u32>,

    /// Maximum heart rate used to derive zone bounds
    #[arg(long, global = true)]
    max_hr: Option<u16>,

    /// Planning updates per real learning step
    #[arg(long, global = true)]
    planning_steps: Option<usize>,

    /// RNG seed for reproducible runs
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Train an agent and report reward statistics
    Train {
        /// Comma-separated seeds to sweep in parallel instead of one run
        #[arg(long, value_delimiter = ',')]
        seeds: Option<Vec<u64>>,
    },
    /// Train, then print a greedy recommendation for a fresh athlete as JSON
    Recommend,
    /// Train, then preview the learned plan day by day
    Simulate {
        /// Number of days to preview
        #[arg(long, default_value_t = 10)]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = SchedulerConfig {
        seed: cli.seed,
        ..SchedulerConfig::default()
    };
    if let Some(episodes) = cli.episodes {
        config.episodes = episodes;
    }
    if let Some(days) = cli.days_to_race {
        config.days_to_race = days;
    }
    if let Some(max_hr) = cli.max_hr {
        config.max_hr = max_hr;
    }
    if let Some(planning_steps) = cli.planning_steps {
        config.planning_steps = planning_steps;
    }

    match cli.command {
        Command::Train { seeds } => run_train(&config, seeds.as_deref()),
        Command::Recommend => run_recommend(&config),
        Command::Simulate { days } => run_simulate(&config, days),
    }
}

fn run_train(config: &SchedulerConfig, seeds: Option<&[u64]>) -> Result<()> {
    match seeds {
        Some(seeds) if seeds.len() > 1 => {
            let outcomes = sweep_seeds(config, seeds).context("training sweep failed")?;
            for (seed, outcome) in seeds.iter().zip(&outcomes) {
                report_outcome(*seed, outcome);
            }
        }
        _ => {
            let outcome = train(config).context("training failed")?;
            report_outcome(config.seed, &outcome);
        }
    }
    Ok(())
}

fn report_outcome(seed: u64, outcome: &TrainingOutcome) {
    let episodes = outcome.episode_rewards.len();
    let mean: f64 = outcome.episode_rewards.iter().sum::<f64>() / episodes.max(1) as f64;
    let last = outcome.episode_rewards.last().copied().unwrap_or(0.0);
    info!(
        seed,
        episodes,
        mean_reward = mean,
        final_reward = last,
        "training complete"
    );
}

fn run_recommend(config: &SchedulerConfig) -> Result<()> {
    let outcome = train(config).context("training failed")?;
    let mut agent = outcome.agent;
    agent.set_epsilon(0.0);

    let state = config.initial_state();
    let recommendation = agent.recommend(&state);
    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}

fn run_simulate(config: &SchedulerConfig, days: u32) -> Result<()> {
    let outcome = train(config).context("training failed")?;
    let mut agent = outcome.agent;
    let mut environment = outcome.environment;
    agent.set_epsilon(0.0);

    let mut state = environment.reset();
    for day in 1..=days {
        let recommendation = agent.recommend(&state);
        println!(
            "day {day}: {} - {} min, {}, target {}-{} bpm (fitness {:.2}, fatigue {:.2}, performance {:.2})",
            recommendation.description,
            recommendation.duration_min,
            recommendation.zone_label,
            recommendation.target_hr.0,
            recommendation.target_hr.1,
            state.fitness,
            state.fatigue,
            state.performance,
        );

        // Execute the very action that was just printed; a second policy
        // draw could diverge on a state the table has never seen.
        let action = TrainingAction::new(
            recommendation.session,
            recommendation.duration_min,
            recommendation.intensity,
            recommendation.zone,
        )?;
        let (next_state, reward, done) = environment.step(&action);
        info!(day, reward, "simulated day");
        state = next_state;
        if done {
            break;
        }
    }
    Ok(())
}
