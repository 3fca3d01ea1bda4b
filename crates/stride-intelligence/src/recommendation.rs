// ABOUTME: Recommendation records handed to presentation collaborators
// ABOUTME: Human descriptions, target heart-rate range, and raw Q-value confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::{Deserialize, Serialize};

use stride_core::models::SessionType;

/// A daily training recommendation.
///
/// Serializable so a dashboard or CLI can render it directly; the core
/// defines no wire format beyond this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Recommended session type.
    pub session: SessionType,
    /// Coaching description of the session.
    pub description: String,
    /// Duration in minutes.
    pub duration_min: u32,
    /// Subjective intensity in `[0, 1]`.
    pub intensity: f64,
    /// Heart-rate zone number in `1..=5`.
    pub zone: u8,
    /// Human-readable zone label.
    pub zone_label: String,
    /// Target heart-rate range `(low, high)` in bpm for the chosen zone.
    pub target_hr: (u16, u16),
    /// Raw action value `Q[state, action]`.
    ///
    /// Unbounded and not a probability; callers must not assume `[0, 1]`.
    pub confidence: f64,
}

/// Human-readable label for a heart-rate zone number.
#[must_use]
pub fn zone_label(zone: u8) -> &'static str {
    match zone {
        0 | 1 => "Zone 1 (active recovery)",
        2 => "Zone 2 (fundamental endurance)",
        3 => "Zone 3 (aerobic threshold)",
        4 => "Zone 4 (anaerobic threshold)",
        _ => "Zone 5 (VO2max)",
    }
}
