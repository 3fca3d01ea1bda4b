// ABOUTME: Impulse-response model time constants and heart-rate zone bands
// ABOUTME: Two-component Bannister fitness/fatigue parameters and load normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Physiological constants for the two-component impulse-response model.
//!
//! Fitness and fatigue are leaky integrators driven by the same daily
//! training-load impulse; fatigue decays faster than fitness, producing the
//! classic overcompensation dynamic.

/// Fatigue time constant in days (fast-decaying accumulator).
pub const TAU_FATIGUE_DAYS: f64 = 15.0;

/// Fitness time constant in days (slow-decaying accumulator).
pub const TAU_FITNESS_DAYS: f64 = 45.0;

/// Longest legal session in minutes, used to normalize training load.
pub const MAX_SESSION_MINUTES: f64 = 120.0;

/// Highest heart-rate zone, used to normalize training load.
pub const MAX_ZONE_WEIGHT: f64 = 5.0;

/// Largest per-type load factor entering the normalization divisor.
///
/// Kept at 1.2 even though the long-run factor is 1.3: no 120-minute zone-5
/// long run exists in the legal action space, so reachable loads stay in
/// `[0, 1]`.
pub const MAX_TYPE_LOAD_FACTOR: f64 = 1.2;

/// Heart-rate zone bands as fractions of maximum heart rate.
///
/// Each entry is the `(low, high)` fraction for zones 1 through 5; bounds are
/// truncated toward zero when applied to an integer max heart rate.
pub const HR_ZONE_FRACTIONS: [(f64, f64); 5] = [
    (0.5, 0.6),
    (0.6, 0.7),
    (0.7, 0.8),
    (0.8, 0.9),
    (0.9, 1.0),
];
