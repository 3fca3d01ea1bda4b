// ABOUTME: Reward-shaping weights for the training scheduler
// ABOUTME: Fixed additive weights; terms are never normalized against each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Reward-shaping weights.
//!
//! All terms are additive with fixed weights and no clipping; a step reward is
//! an unbounded real, typically within roughly `[-15, +20]` under the modeled
//! ranges.

/// Multiplier on the marginal performance gain attributable to a session.
pub const PERFORMANCE_GAIN_WEIGHT: f64 = 10.0;

/// Penalty for scheduling a long run when the trailing week already holds one.
pub const LONG_RUN_REPEAT_PENALTY: f64 = -5.0;

/// Bonus for front-loading long runs while the race is still far away.
pub const LONG_RUN_EARLY_BONUS: f64 = 4.0;

/// Days-to-race threshold beyond which early long runs earn a bonus.
pub const LONG_RUN_EARLY_HORIZON_DAYS: u32 = 60;

/// Bonus when the last three sessions match a beneficial sequence.
pub const GOOD_SEQUENCE_BONUS: f64 = 2.0;

/// Penalty per distinct session type appearing more than twice in the
/// trailing week.
pub const MONOTONY_PENALTY: f64 = -1.0;

/// Occurrence count above which a session type counts as over-used.
pub const MONOTONY_MAX_REPEATS: usize = 2;

/// Bonus when the chosen heart-rate zone is sanctioned for the session type.
pub const SANCTIONED_ZONE_BONUS: f64 = 2.0;

/// Bonus when the chosen duration is sanctioned for the session type.
pub const SANCTIONED_DURATION_BONUS: f64 = 1.0;

/// Hard overtraining penalty when fatigue exceeds 1.5x fitness.
pub const OVERTRAINING_PENALTY: f64 = -5.0;

/// Fatigue-to-fitness ratio above which the overtraining penalty applies.
pub const OVERTRAINING_RATIO: f64 = 1.5;
