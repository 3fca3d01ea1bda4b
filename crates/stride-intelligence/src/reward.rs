// ABOUTME: Reward shaping for the training scheduler
// ABOUTME: Additive fixed-weight terms balancing progression, recovery, and variety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Reward shaping.
//!
//! A deterministic scalar combining progression, long-run spacing, session
//! sequencing, variety, zone/duration discipline, and an overtraining guard.
//! Terms are additive with fixed weights and no cross-term normalization, so
//! later terms can dominate; the result is unbounded.

use std::collections::HashMap;

use stride_core::constants::reward::{
    GOOD_SEQUENCE_BONUS, LONG_RUN_EARLY_BONUS, LONG_RUN_EARLY_HORIZON_DAYS,
    LONG_RUN_REPEAT_PENALTY, MONOTONY_MAX_REPEATS, MONOTONY_PENALTY, OVERTRAINING_PENALTY,
    OVERTRAINING_RATIO, PERFORMANCE_GAIN_WEIGHT, SANCTIONED_DURATION_BONUS, SANCTIONED_ZONE_BONUS,
};
use stride_core::models::{AthleteState, SessionType};

use crate::actions::TrainingAction;

/// Three-session sequences the reward function treats as beneficial.
///
/// Ordered oldest-to-newest; the final entry is the session just scheduled.
const GOOD_SEQUENCES: [[SessionType; 3]; 3] = [
    [SessionType::Endurance, SessionType::Interval, SessionType::Rest],
    [SessionType::LongRun, SessionType::Rest, SessionType::Interval],
    [SessionType::Interval, SessionType::Rest, SessionType::Endurance],
];

/// Compute the shaped reward for one transition.
///
/// `prev` is the state before the step; `next` is the state after the load
/// was applied and the session recorded, but before the race-day countdown
/// decrements. The long-run spacing term inspects `prev`'s trailing window
/// so the session being scored never counts as its own repeat.
#[must_use]
pub fn shaped_reward(prev: &AthleteState, next: &AthleteState, action: &TrainingAction) -> f64 {
    let mut reward = 0.0;

    // Marginal performance gain attributable to this session: the updated
    // performance against what the pre-step accumulators alone would give.
    let naive_performance = (prev.fitness - prev.fatigue) / 2.0;
    reward += PERFORMANCE_GAIN_WEIGHT * (next.performance - naive_performance);

    // Long-run spacing: at most one per trailing week, front-loaded while the
    // race is still far away.
    if action.session == SessionType::LongRun {
        let long_run_this_week = prev.recent_sessions.contains(&SessionType::LongRun);
        if long_run_this_week {
            reward += LONG_RUN_REPEAT_PENALTY;
        } else if next.days_to_race > LONG_RUN_EARLY_HORIZON_DAYS {
            reward += LONG_RUN_EARLY_BONUS;
        }
    }

    // Beneficial three-session sequences, newest entry being this session.
    if next.recent_sessions.len() >= 3 {
        let tail: Vec<SessionType> = next
            .recent_sessions
            .iter()
            .skip(next.recent_sessions.len() - 3)
            .copied()
            .collect();
        if GOOD_SEQUENCES.iter().any(|seq| seq[..] == tail[..]) {
            reward += GOOD_SEQUENCE_BONUS;
        }
    }

    // Monotony: one penalty per distinct over-used type in the trailing week.
    if next.recent_sessions.len() >= 7 {
        let mut counts: HashMap<SessionType, usize> = HashMap::new();
        for session in &next.recent_sessions {
            *counts.entry(*session).or_insert(0) += 1;
        }
        for count in counts.values() {
            if *count > MONOTONY_MAX_REPEATS {
                reward += MONOTONY_PENALTY;
            }
        }
    }

    // Zone and duration discipline.
    if action.session.sanctioned_zones().contains(&action.zone) {
        reward += SANCTIONED_ZONE_BONUS;
    }
    if action
        .session
        .sanctioned_durations()
        .contains(&action.duration_min)
    {
        reward += SANCTIONED_DURATION_BONUS;
    }

    // Hard overtraining guard.
    if next.fatigue > OVERTRAINING_RATIO * next.fitness {
        reward += OVERTRAINING_PENALTY;
    }

    reward
}
