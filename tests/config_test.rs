// ABOUTME: Integration tests for scheduler configuration and state discretization
// ABOUTME: Validation ranges, epsilon schedule, serde round-trips, and key contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use stride_core::models::SessionType;
use stride_core::{CoachError, SchedulerConfig};

#[test]
fn default_configuration_is_valid() {
    let config = SchedulerConfig::default();
    config.validate().unwrap();
    assert_eq!(config.planning_steps, 10);
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.discount_factor, 0.95);
    assert_eq!(config.epsilon_initial, 0.9);
    assert_eq!(config.epsilon_final, 0.1);
    assert_eq!(config.days_to_race, 120);
    assert_eq!(config.max_hr, 185);
}

#[test]
fn out_of_range_fields_are_rejected_with_field_names() {
    let cases: Vec<(SchedulerConfig, &str)> = vec![
        (
            SchedulerConfig {
                learning_rate: 1.5,
                ..SchedulerConfig::default()
            },
            "learning_rate",
        ),
        (
            SchedulerConfig {
                discount_factor: 1.0,
                ..SchedulerConfig::default()
            },
            "discount_factor",
        ),
        (
            SchedulerConfig {
                epsilon_initial: 1.2,
                ..SchedulerConfig::default()
            },
            "epsilon_initial",
        ),
        (
            SchedulerConfig {
                epsilon_initial: 0.1,
                epsilon_final: 0.9,
                ..SchedulerConfig::default()
            },
            "epsilon_final",
        ),
        (
            SchedulerConfig {
                episodes: 0,
                ..SchedulerConfig::default()
            },
            "episodes",
        ),
        (
            SchedulerConfig {
                days_to_race: 0,
                ..SchedulerConfig::default()
            },
            "days_to_race",
        ),
        (
            SchedulerConfig {
                max_hr: 0,
                ..SchedulerConfig::default()
            },
            "max_hr",
        ),
    ];

    for (config, expected_field) in cases {
        match config.validate().unwrap_err() {
            CoachError::InvalidConfig { field, .. } => assert_eq!(field, expected_field),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn epsilon_schedule_decays_linearly_between_endpoints() {
    let config = SchedulerConfig {
        episodes: 101,
        ..SchedulerConfig::default()
    };
    assert!((config.epsilon_for_episode(0) - 0.9).abs() < 1e-12);
    assert!((config.epsilon_for_episode(100) - 0.1).abs() < 1e-12);
    assert!((config.epsilon_for_episode(50) - 0.5).abs() < 1e-12);

    let mut previous = f64::INFINITY;
    for episode in 0..101 {
        let epsilon = config.epsilon_for_episode(episode);
        assert!(epsilon <= previous);
        assert!((0.1..=0.9).contains(&epsilon));
        previous = epsilon;
    }
}

#[test]
fn single_episode_run_stays_fully_exploratory() {
    let config = SchedulerConfig {
        episodes: 1,
        ..SchedulerConfig::default()
    };
    // Episode 0 is both the first and the last; the schedule keeps the
    // initial rate rather than collapsing straight to the floor.
    assert!((config.epsilon_for_episode(0) - 0.9).abs() < 1e-12);
}

#[test]
fn configuration_round_trips_through_json() {
    let config = SchedulerConfig {
        episodes: 777,
        seed: 9,
        vma_kmh: 16.5,
        ..SchedulerConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn initial_state_reflects_the_athlete_profile() {
    let config = SchedulerConfig {
        max_hr: 190,
        resting_hr: 52,
        vma_kmh: 17.0,
        days_to_race: 84,
        ..SchedulerConfig::default()
    };
    let state = config.initial_state();
    assert_eq!(state.fitness, 0.0);
    assert_eq!(state.fatigue, 0.0);
    assert_eq!(state.days_to_race, 84);
    assert_eq!(state.resting_hr, 52);
    assert_eq!(state.vma_kmh, 17.0);
    assert!(state.recent_sessions.is_empty());
    assert!(state.active_injuries.is_empty());
    assert_eq!(state.zones.z5.1, 190);
}

#[test]
fn state_key_uses_documented_granularities() {
    let mut state = SchedulerConfig::default().initial_state();
    state.fitness = 1.23;
    state.fatigue = 0.458;
    state.performance = (state.fitness - state.fatigue) / 2.0;
    state.weekly_volume_km = 42.0;
    state.temperature_c = 12.0;
    state.days_to_race = 300;

    let key = state.discretize();
    assert_eq!(key.fitness_decile, 12);
    assert_eq!(key.fatigue_decile, 5);
    assert_eq!(key.performance_decile, 4);
    assert_eq!(key.vma_half, 30);
    assert_eq!(key.volume_decade, 4);
    assert_eq!(key.injury_risk_decile, 0);
    assert_eq!(key.days_to_race, 120, "countdown must clamp at 120 in the key");
    assert_eq!(key.temperature_band, 2);
}

#[test]
fn states_differing_only_below_granularity_share_a_key() {
    let mut first = SchedulerConfig::default().initial_state();
    let mut second = first.clone();
    first.fitness = 1.01;
    second.fitness = 1.04;
    assert_eq!(first.discretize(), second.discretize());

    second.fitness = 1.10;
    assert_ne!(first.discretize(), second.discretize());
}

#[test]
fn session_types_serialize_snake_case() {
    let json = serde_json::to_string(&SessionType::LongRun).unwrap();
    assert_eq!(json, "\"long_run\"");
    let back: SessionType = serde_json::from_str("\"cross_cycling\"").unwrap();
    assert_eq!(back, SessionType::CrossCycling);
}
