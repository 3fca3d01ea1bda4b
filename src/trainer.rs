// ABOUTME: Episode training loop with linear exploration decay
// ABOUTME: Sequential per-run loop plus rayon-parallel seed sweeps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Episode trainer.
//!
//! Runs the select/step/learn loop to completion for a configured number of
//! episodes, driving the agent's exploration rate down linearly across the
//! run. Each training run is strictly sequential; the sweep variant
//! parallelizes across runs only, with every worker owning an independent
//! environment and agent pair.

use rayon::prelude::*;
use tracing::info;

use stride_core::config::SchedulerConfig;
use stride_core::errors::CoachResult;
use stride_intelligence::{DynaQAgent, MarathonEnvironment};

/// Episodes between progress log lines.
const LOG_EVERY_EPISODES: usize = 100;

/// Result of a full training run.
pub struct TrainingOutcome {
    /// The trained agent, ready to produce recommendations.
    pub agent: DynaQAgent,
    /// The environment, left at its end-of-run state.
    pub environment: MarathonEnvironment,
    /// Total reward per episode, in order.
    pub episode_rewards: Vec<f64>,
}

/// Train an agent from scratch under the given configuration.
///
/// # Errors
/// Returns a configuration error if any field is outside its documented
/// range.
pub fn train(config: &SchedulerConfig) -> CoachResult<TrainingOutcome> {
    let mut environment = MarathonEnvironment::new(config.clone())?;
    let mut agent = DynaQAgent::new(config)?;
    let mut episode_rewards = Vec::with_capacity(config.episodes);

    for episode in 0..config.episodes {
        agent.set_epsilon(config.epsilon_for_episode(episode));

        let mut state = environment.reset();
        let mut total_reward = 0.0;
        loop {
            let action = agent.select_action(&state);
            let (next_state, reward, done) = environment.step(&action);
            agent.learn(&state, &action, reward, &next_state);
            total_reward += reward;
            state = next_state;
            if done {
                break;
            }
        }

        if episode % LOG_EVERY_EPISODES == 0 {
            info!(
                episode,
                total_reward,
                epsilon = agent.epsilon(),
                "training progress"
            );
        }
        episode_rewards.push(total_reward);
    }

    Ok(TrainingOutcome {
        agent,
        environment,
        episode_rewards,
    })
}

/// Train independent agents across a list of seeds in parallel.
///
/// Each worker owns its own environment and agent; the value tables are
/// never shared across threads. Results come back in seed order.
///
/// # Errors
/// Returns the first configuration error encountered, if any.
pub fn sweep_seeds(config: &SchedulerConfig, seeds: &[u64]) -> CoachResult<Vec<TrainingOutcome>> {
    seeds
        .par_iter()
        .map(|&seed| {
            let run_config = SchedulerConfig {
                seed,
                ..config.clone()
            };
            train(&run_config)
        })
        .collect()
}
