// ABOUTME: Learning-loop and episode defaults for the scheduler
// ABOUTME: Documented numeric defaults surfaced through SchedulerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Scheduling and learning-loop defaults.

/// Default number of simulated planning updates per real learning step.
pub const DEFAULT_PLANNING_STEPS: usize = 10;

/// Default temporal-difference learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Default discount factor for future reward.
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.95;

/// Exploration rate at the start of a training run.
pub const DEFAULT_EPSILON_INITIAL: f64 = 0.9;

/// Exploration rate at the end of a training run (linear decay).
pub const DEFAULT_EPSILON_FINAL: f64 = 0.1;

/// Default number of training episodes.
pub const DEFAULT_EPISODES: usize = 5000;

/// Default episode length: days from the start of preparation to race day.
pub const DEFAULT_DAYS_TO_RACE: u32 = 120;

/// Default maximum heart rate used to derive zone bounds.
pub const DEFAULT_MAX_HR: u16 = 185;

/// Default resting heart rate.
pub const DEFAULT_RESTING_HR: u16 = 60;

/// Default maximal aerobic speed in km/h.
pub const DEFAULT_VMA_KMH: f64 = 15.0;

/// Default ambient temperature in degrees Celsius.
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
