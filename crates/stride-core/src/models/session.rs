// ABOUTME: Session type enumeration for marathon-training workouts
// ABOUTME: Per-type constraint tables expressed as exhaustive matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::{Deserialize, Serialize};

/// Enumeration of schedulable session types.
///
/// This is a closed set: every per-type table below is an exhaustive `match`,
/// so adding a variant without updating every table is a compile error rather
/// than a latent runtime defect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Full rest day
    Rest,
    /// Steady aerobic endurance run
    Endurance,
    /// Anaerobic threshold (tempo) run
    Threshold,
    /// High-intensity interval session
    Interval,
    /// Hill repeats
    Hills,
    /// Fartlek speed play
    Fartlek,
    /// Weekly long run
    LongRun,
    /// Cross-training on the bike
    CrossCycling,
    /// Cross-training in the pool
    CrossSwimming,
    /// Strength and conditioning work
    Strength,
}

impl SessionType {
    /// All session types, in the fixed enumeration order used for action
    /// generation and deterministic tie-breaking.
    pub const ALL: [Self; 10] = [
        Self::Rest,
        Self::Endurance,
        Self::Threshold,
        Self::Interval,
        Self::Hills,
        Self::Fartlek,
        Self::LongRun,
        Self::CrossCycling,
        Self::CrossSwimming,
        Self::Strength,
    ];

    /// Stable integer tag used in discretization keys.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Rest => 0,
            Self::Endurance => 1,
            Self::Threshold => 2,
            Self::Interval => 3,
            Self::Hills => 4,
            Self::Fartlek => 5,
            Self::LongRun => 6,
            Self::CrossCycling => 7,
            Self::CrossSwimming => 8,
            Self::Strength => 9,
        }
    }

    /// Whether this type is the unique rest session.
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Get the human-readable name for this session type.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rest => "rest day",
            Self::Endurance => "endurance run",
            Self::Threshold => "threshold run",
            Self::Interval => "interval session",
            Self::Hills => "hill repeats",
            Self::Fartlek => "fartlek",
            Self::LongRun => "long run",
            Self::CrossCycling => "bike cross-training",
            Self::CrossSwimming => "swim cross-training",
            Self::Strength => "strength work",
        }
    }

    /// Coaching description shown alongside a recommendation.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Rest => "Rest day for recovery",
            Self::Endurance => "Steady endurance training at a moderate pace",
            Self::Threshold => "Training at the anaerobic threshold",
            Self::Interval => "High-intensity interval session",
            Self::Hills => "Hill repeat training",
            Self::Fartlek => "Fartlek - unstructured speed play",
            Self::LongRun => "Weekly long run",
            Self::CrossCycling => "Cross-training on the bike",
            Self::CrossSwimming => "Cross-training in the pool",
            Self::Strength => "Strength and conditioning",
        }
    }

    /// Relative strain factor applied on top of duration and zone when
    /// computing training load.
    #[must_use]
    pub const fn load_factor(self) -> f64 {
        match self {
            Self::Rest | Self::Threshold | Self::Fartlek => 1.0,
            Self::Interval | Self::Hills => 1.1,
            Self::LongRun => 1.3,
            Self::Endurance => 1.2,
            Self::CrossCycling => 0.8,
            Self::CrossSwimming => 0.7,
            Self::Strength => 0.6,
        }
    }

    /// Durations (minutes) legal for this type when generating the action
    /// space.
    #[must_use]
    pub const fn legal_durations(self) -> &'static [u32] {
        match self {
            Self::Rest => &[0],
            Self::Endurance => &[45, 60, 90],
            Self::Threshold | Self::Interval | Self::Hills | Self::Fartlek => &[30, 45],
            Self::LongRun => &[90, 120],
            Self::CrossCycling => &[30, 45, 60],
            Self::CrossSwimming | Self::Strength => &[30, 45],
        }
    }

    /// Heart-rate zones legal for this type when generating the action space.
    #[must_use]
    pub const fn legal_zones(self) -> &'static [u8] {
        match self {
            Self::Rest => &[1],
            Self::Endurance | Self::CrossCycling | Self::CrossSwimming => &[2, 3],
            Self::Threshold => &[4],
            Self::Interval | Self::Hills => &[4, 5],
            Self::Fartlek => &[3, 4],
            Self::LongRun => &[2],
            Self::Strength => &[1, 2],
        }
    }

    /// Durations (minutes) the reward function treats as sanctioned.
    ///
    /// Slightly narrower than [`Self::legal_durations`] for endurance runs:
    /// 90-minute endurance is schedulable but earns no duration bonus.
    #[must_use]
    pub const fn sanctioned_durations(self) -> &'static [u32] {
        match self {
            Self::Rest => &[0],
            Self::Endurance => &[45, 60],
            Self::Threshold | Self::Interval | Self::Hills | Self::Fartlek => &[30, 45],
            Self::LongRun => &[90, 120],
            Self::CrossCycling => &[30, 45, 60],
            Self::CrossSwimming | Self::Strength => &[30, 45],
        }
    }

    /// Heart-rate zones the reward function treats as sanctioned.
    ///
    /// Wider than [`Self::legal_zones`] for cross-training: zone 1 recovery
    /// spins and swims earn the zone bonus even though the action space only
    /// schedules them in zones 2-3.
    #[must_use]
    pub const fn sanctioned_zones(self) -> &'static [u8] {
        match self {
            Self::Rest => &[1],
            Self::Endurance => &[2, 3],
            Self::Threshold => &[4],
            Self::Interval | Self::Hills => &[4, 5],
            Self::Fartlek => &[3, 4],
            Self::LongRun => &[2],
            Self::CrossCycling | Self::CrossSwimming => &[1, 2, 3],
            Self::Strength => &[1, 2],
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
