// ABOUTME: Unified error types for the Stride training scheduler
// ABOUTME: Narrow taxonomy since the core is a closed numeric simulation without I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! # Error Types
//!
//! The scheduler core performs no network or file I/O, so the error surface is
//! intentionally narrow: configuration validation and action construction are
//! the only fallible entry points. Unseen state/action keys are never errors
//! (tabular lookups default to zero), and an empty transition model makes
//! planning a no-op rather than a failure.

use crate::models::SessionType;

/// Result alias used across the Stride workspace.
pub type CoachResult<T> = Result<T, CoachError>;

/// Errors produced by the scheduler core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoachError {
    /// A configuration field is outside its documented range.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value, rendered for the message
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A session was constructed with a duration or zone outside its
    /// type's sanctioned sets.
    #[error("invalid session: {duration_min} min in zone {zone} is not legal for {session}")]
    InvalidSession {
        /// The session type being constructed
        session: SessionType,
        /// Requested duration in minutes
        duration_min: u32,
        /// Requested heart-rate zone (1-5)
        zone: u8,
    },
}

impl CoachError {
    /// Create an `InvalidConfig` error.
    #[must_use]
    pub fn invalid_config(
        field: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidConfig {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
