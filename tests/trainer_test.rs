// ABOUTME: Integration tests for the episode trainer and parallel seed sweeps
// ABOUTME: Small fast runs; verifies episode accounting and reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use stride::trainer::{sweep_seeds, train};
use stride_core::SchedulerConfig;

fn fast_config() -> SchedulerConfig {
    SchedulerConfig {
        episodes: 5,
        days_to_race: 14,
        seed: 7,
        ..SchedulerConfig::default()
    }
}

#[test]
fn training_runs_every_configured_episode_to_completion() {
    let config = fast_config();
    let outcome = train(&config).unwrap();

    assert_eq!(outcome.episode_rewards.len(), config.episodes);
    // Each episode takes exactly days_to_race real steps.
    assert_eq!(
        outcome.agent.training_history().len(),
        config.episodes * config.days_to_race as usize
    );
    // The environment finished its last episode at race day.
    assert_eq!(outcome.environment.state().days_to_race, 0);
}

#[test]
fn identical_seeds_reproduce_identical_reward_traces() {
    let config = fast_config();
    let first = train(&config).unwrap();
    let second = train(&config).unwrap();
    assert_eq!(first.episode_rewards, second.episode_rewards);
}

#[test]
fn sweep_returns_one_outcome_per_seed_in_order() {
    let config = fast_config();
    let seeds = [1_u64, 2, 3];
    let outcomes = sweep_seeds(&config, &seeds).unwrap();
    assert_eq!(outcomes.len(), seeds.len());

    // A sweep worker with the same seed matches a standalone run.
    let standalone = train(&SchedulerConfig {
        seed: 2,
        ..config.clone()
    })
    .unwrap();
    assert_eq!(outcomes[1].episode_rewards, standalone.episode_rewards);
}

#[test]
fn invalid_configuration_fails_before_any_episode() {
    let config = SchedulerConfig {
        episodes: 0,
        ..fast_config()
    };
    assert!(train(&config).is_err());
}

#[test]
fn trained_agent_produces_a_recommendation_for_a_fresh_athlete() {
    let config = fast_config();
    let mut outcome = train(&config).unwrap();
    outcome.agent.set_epsilon(0.0);

    let state = config.initial_state();
    let recommendation = outcome.agent.recommend(&state);
    assert!(recommendation.duration_min <= 120);
    assert!((1..=5).contains(&recommendation.zone));
    let (low, high) = recommendation.target_hr;
    assert!(low < high && high <= config.max_hr);
}
