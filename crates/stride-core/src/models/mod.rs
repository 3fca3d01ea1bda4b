// ABOUTME: Core data models for the Stride scheduler
// ABOUTME: Athlete state, session types, heart-rate zones, and weather context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Core data models.

/// Session type enumeration with per-type constraint tables
pub mod session;

/// Athlete physiological state and its discretization key
pub mod state;

/// Heart-rate training zones derived from maximum heart rate
pub mod zones;

/// Weather context for the training environment
pub mod weather;

pub use session::SessionType;
pub use state::{AthleteState, StateKey, RECENT_SESSION_WINDOW};
pub use zones::TrainingZones;
pub use weather::WeatherCondition;
