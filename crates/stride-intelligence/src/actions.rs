// ABOUTME: Trainable action space for the scheduler
// ABOUTME: Immutable session actions, discretization keys, and constrained generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Action space.
//!
//! The legal action space is precomputed once: the rest action plus every
//! `(type, duration, intensity, zone)` combination that satisfies the
//! per-type validity tables on [`SessionType`]. The agent only ever emits
//! actions from this fixed set, so runtime-invalid sessions cannot occur.

use serde::{Deserialize, Serialize};

use stride_core::errors::{CoachError, CoachResult};
use stride_core::models::SessionType;

/// Candidate durations (minutes) enumerated when generating the space.
const CANDIDATE_DURATIONS: [u32; 5] = [30, 45, 60, 90, 120];

/// Candidate intensity levels enumerated when generating the space.
const CANDIDATE_INTENSITIES: [f64; 4] = [0.6, 0.7, 0.8, 0.9];

/// A single schedulable training session. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingAction {
    /// Session type.
    pub session: SessionType,
    /// Duration in minutes; zero only for the rest action.
    pub duration_min: u32,
    /// Subjective intensity in `[0, 1]`.
    pub intensity: f64,
    /// Target heart-rate zone in `1..=5`.
    pub zone: u8,
}

impl TrainingAction {
    /// Construct an action, enforcing the session type's duration and zone
    /// constraint tables.
    ///
    /// # Errors
    /// Returns [`CoachError::InvalidSession`] if the combination is not legal
    /// for the type.
    pub fn new(
        session: SessionType,
        duration_min: u32,
        intensity: f64,
        zone: u8,
    ) -> CoachResult<Self> {
        if !session.legal_durations().contains(&duration_min)
            || !session.legal_zones().contains(&zone)
        {
            return Err(CoachError::InvalidSession {
                session,
                duration_min,
                zone,
            });
        }
        Ok(Self {
            session,
            duration_min,
            intensity,
            zone,
        })
    }

    /// The unique rest action: zero minutes in zone 1.
    #[must_use]
    pub const fn rest() -> Self {
        Self {
            session: SessionType::Rest,
            duration_min: 0,
            intensity: 0.0,
            zone: 1,
        }
    }

    /// Discretize into a fixed-granularity key for tabular lookup.
    #[must_use]
    pub fn discretize(&self) -> ActionKey {
        ActionKey {
            session: self.session.tag(),
            duration_quarter_hours: self.duration_min / 15,
            intensity_level: (self.intensity * 5.0).round() as u8,
            zone: self.zone,
        }
    }
}

/// Fixed-granularity discrete key for a [`TrainingAction`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActionKey {
    /// Stable session-type tag.
    pub session: u8,
    /// `duration / 15` (15-minute buckets).
    pub duration_quarter_hours: u32,
    /// `round(intensity * 5)`.
    pub intensity_level: u8,
    /// Heart-rate zone.
    pub zone: u8,
}

/// The precomputed, fixed set of legal actions.
///
/// Enumeration order is deterministic and doubles as the tie-breaking order
/// for greedy action selection.
#[derive(Debug, Clone)]
pub struct ActionSpace {
    actions: Vec<TrainingAction>,
}

impl ActionSpace {
    /// Generate the full legal action space.
    ///
    /// The rest action comes first; every other `(type, duration, intensity,
    /// zone)` combination is kept only if it passes the per-type validity
    /// tables.
    #[must_use]
    pub fn generate() -> Self {
        let mut actions = vec![TrainingAction::rest()];
        for session in SessionType::ALL {
            if session.is_rest() {
                continue;
            }
            for &duration_min in &CANDIDATE_DURATIONS {
                for &intensity in &CANDIDATE_INTENSITIES {
                    for zone in 1..=5u8 {
                        if let Ok(action) =
                            TrainingAction::new(session, duration_min, intensity, zone)
                        {
                            actions.push(action);
                        }
                    }
                }
            }
        }
        Self { actions }
    }

    /// All actions in fixed enumeration order.
    #[must_use]
    pub fn actions(&self) -> &[TrainingAction] {
        &self.actions
    }

    /// Number of legal actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the space is empty (cannot happen with the fixed tables, but
    /// selection code still falls back to rest defensively).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self::generate()
    }
}
