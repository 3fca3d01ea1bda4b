// ABOUTME: Core types and constants for the Stride training scheduler
// ABOUTME: Foundation crate with athlete state, session types, zones, config, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! marathon-training scheduler. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `CoachError` and `CoachResult`
//! - **constants**: Physiological and scheduling constants organized by domain
//! - **models**: Core data models (`AthleteState`, `SessionType`, `TrainingZones`, ...)
//! - **config**: Scheduler configuration with documented numeric defaults

/// Unified error handling for the scheduler
pub mod errors;

/// Physiological and scheduling constants organized by domain
pub mod constants;

/// Core data models (athlete state, session types, heart-rate zones, weather)
pub mod models;

/// Scheduler configuration (hyperparameters, episode shape, athlete profile)
pub mod config;

pub use config::SchedulerConfig;
pub use errors::{CoachError, CoachResult};
pub use models::{
    AthleteState, SessionType, StateKey, TrainingZones, WeatherCondition, RECENT_SESSION_WINDOW,
};
