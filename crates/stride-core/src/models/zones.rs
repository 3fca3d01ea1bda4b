// ABOUTME: Heart-rate training zones derived from maximum heart rate
// ABOUTME: Five fixed percentage bands, truncating toward zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::{Deserialize, Serialize};

use crate::constants::physiology::HR_ZONE_FRACTIONS;

/// Personalized heart-rate training zones.
///
/// Derived once from a configured maximum heart rate using fixed percentage
/// bands (50-60%, 60-70%, 70-80%, 80-90%, 90-100%), truncating toward zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingZones {
    /// Zone 1 - active recovery
    pub z1: (u16, u16),
    /// Zone 2 - fundamental endurance
    pub z2: (u16, u16),
    /// Zone 3 - aerobic threshold
    pub z3: (u16, u16),
    /// Zone 4 - anaerobic threshold
    pub z4: (u16, u16),
    /// Zone 5 - VO2max
    pub z5: (u16, u16),
}

impl TrainingZones {
    /// Derive all five zones from a maximum heart rate.
    #[must_use]
    pub fn from_max_hr(max_hr: u16) -> Self {
        let band = |idx: usize| {
            let (lo, hi) = HR_ZONE_FRACTIONS[idx];
            (
                (f64::from(max_hr) * lo) as u16,
                (f64::from(max_hr) * hi) as u16,
            )
        };
        Self {
            z1: band(0),
            z2: band(1),
            z3: band(2),
            z4: band(3),
            z5: band(4),
        }
    }

    /// Look up the `(low, high)` bounds for a zone number in `1..=5`.
    ///
    /// Out-of-range zone numbers clamp to the nearest band rather than
    /// panicking; callers only produce zones from the fixed action space.
    #[must_use]
    pub const fn bounds(&self, zone: u8) -> (u16, u16) {
        match zone {
            0 | 1 => self.z1,
            2 => self.z2,
            3 => self.z3,
            4 => self.z4,
            _ => self.z5,
        }
    }
}
