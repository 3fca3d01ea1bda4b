// ABOUTME: Stride - model-based RL scheduler for marathon preparation
// ABOUTME: Facade crate re-exporting core types and owning the episode trainer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride
//!
//! Model-based reinforcement-learning scheduler that, given an athlete's
//! physiological state, recommends a daily training session (type, duration,
//! intensity, target heart-rate zone) to maximize long-term marathon
//! preparation.
//!
//! The workspace splits into:
//!
//! - [`stride_core`]: athlete state, session types, heart-rate zones,
//!   configuration, and errors
//! - [`stride_intelligence`]: the action space, the fitness/fatigue
//!   transition model, reward shaping, and the Dyna-Q agent
//! - this crate: the episode [`trainer`] and the `stride-cli` binary
//!
//! ## Quick start
//!
//! ```no_run
//! use stride::trainer::train;
//! use stride_core::SchedulerConfig;
//!
//! # fn main() -> Result<(), stride_core::CoachError> {
//! let config = SchedulerConfig {
//!     episodes: 500,
//!     ..SchedulerConfig::default()
//! };
//! let outcome = train(&config)?;
//! let mut agent = outcome.agent;
//! let state = config.initial_state();
//! let recommendation = agent.recommend(&state);
//! println!("{}: {} min", recommendation.description, recommendation.duration_min);
//! # Ok(())
//! # }
//! ```

/// Episode training loop and hyperparameter sweeps
pub mod trainer;

pub use stride_core::{
    AthleteState, CoachError, CoachResult, SchedulerConfig, SessionType, StateKey, TrainingZones,
    WeatherCondition,
};
pub use stride_intelligence::{
    ActionSpace, DynaQAgent, MarathonEnvironment, Recommendation, TrainingAction,
};
