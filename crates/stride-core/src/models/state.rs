// ABOUTME: Athlete physiological state for the training simulation
// ABOUTME: Two-component impulse-response accumulators plus discretization key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::physiology::{TAU_FATIGUE_DAYS, TAU_FITNESS_DAYS};
use crate::models::session::SessionType;
use crate::models::weather::WeatherCondition;
use crate::models::zones::TrainingZones;

/// Number of trailing sessions retained for variety/recovery heuristics.
pub const RECENT_SESSION_WINDOW: usize = 7;

/// An athlete's training-derived physiological condition.
///
/// Fitness and fatigue are exponentially-smoothed accumulators driven by the
/// daily training-load impulse (Bannister two-component model); `performance`
/// and `form` are derived indicators recomputed on every update and never set
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteState {
    /// Long-term adaptation accumulator (slow decay, tau = 45 days).
    pub fitness: f64,
    /// Short-term strain accumulator (fast decay, tau = 15 days).
    pub fatigue: f64,
    /// Derived indicator: `(fitness - fatigue) / 2`.
    pub performance: f64,
    /// Derived indicator: `fitness - 2 * fatigue`.
    pub form: f64,
    /// Maximal aerobic speed in km/h.
    pub vma_kmh: f64,
    /// Resting heart rate in bpm.
    pub resting_hr: u16,
    /// Rolling weekly training volume in km.
    pub weekly_volume_km: f64,
    /// Trailing window of the last sessions, oldest evicted beyond
    /// [`RECENT_SESSION_WINDOW`].
    pub recent_sessions: VecDeque<SessionType>,
    /// Days remaining before race day; saturating at zero.
    pub days_to_race: u32,
    /// Injury-risk score placeholder for future risk modeling.
    pub injury_risk: f64,
    /// Active injury descriptions; placeholder, currently always empty.
    pub active_injuries: Vec<String>,
    /// Ambient weather condition.
    pub weather: WeatherCondition,
    /// Ambient temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Personalized heart-rate zones, derived once from max heart rate.
    pub zones: TrainingZones,
}

impl AthleteState {
    /// Create a fresh, untrained state at the start of a preparation block.
    #[must_use]
    pub fn new(max_hr: u16, resting_hr: u16, vma_kmh: f64, days_to_race: u32) -> Self {
        Self {
            fitness: 0.0,
            fatigue: 0.0,
            performance: 0.0,
            form: 0.0,
            vma_kmh,
            resting_hr,
            weekly_volume_km: 0.0,
            recent_sessions: VecDeque::with_capacity(RECENT_SESSION_WINDOW),
            days_to_race,
            injury_risk: 0.0,
            active_injuries: Vec::new(),
            weather: WeatherCondition::Ideal,
            temperature_c: 20.0,
            zones: TrainingZones::from_max_hr(max_hr),
        }
    }

    /// Apply a day's normalized training load to the impulse-response model.
    ///
    /// `fatigue' = load + e^(-1/15) * fatigue` and
    /// `fitness' = load + e^(-1/45) * fitness`; the derived `performance` and
    /// `form` indicators are recomputed from the new accumulators. With
    /// `load >= 0` both accumulators stay non-negative.
    pub fn apply_load(&mut self, load: f64) {
        self.fatigue = load + (-1.0 / TAU_FATIGUE_DAYS).exp() * self.fatigue;
        self.fitness = load + (-1.0 / TAU_FITNESS_DAYS).exp() * self.fitness;
        self.performance = (self.fitness - self.fatigue) / 2.0;
        self.form = self.fitness - 2.0 * self.fatigue;
    }

    /// Record a completed session in the trailing window, evicting the oldest
    /// entry once the window exceeds [`RECENT_SESSION_WINDOW`].
    pub fn record_session(&mut self, session: SessionType) {
        self.recent_sessions.push_back(session);
        while self.recent_sessions.len() > RECENT_SESSION_WINDOW {
            self.recent_sessions.pop_front();
        }
    }

    /// Advance the race countdown by one day, saturating at zero.
    ///
    /// Returns `true` once race day is reached.
    pub fn advance_day(&mut self) -> bool {
        self.days_to_race = self.days_to_race.saturating_sub(1);
        self.days_to_race == 0
    }

    /// Discretize the continuous state into a fixed-arity integer key for
    /// tabular lookup.
    #[must_use]
    pub fn discretize(&self) -> StateKey {
        StateKey {
            fitness_decile: (self.fitness * 10.0).round() as i32,
            fatigue_decile: (self.fatigue * 10.0).round() as i32,
            performance_decile: (self.performance * 10.0).round() as i32,
            vma_half: (self.vma_kmh * 2.0).round() as i32,
            volume_decade: (self.weekly_volume_km / 10.0).round() as i32,
            injury_risk_decile: (self.injury_risk * 10.0).round() as i32,
            days_to_race: self.days_to_race.min(120),
            temperature_band: (self.temperature_c / 5.0).round() as i32,
        }
    }
}

/// Fixed-granularity discrete key for an [`AthleteState`].
///
/// A pure function of the state, stable across rewrites: rounding
/// granularities are part of the key contract, not an implementation detail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// `round(fitness * 10)`
    pub fitness_decile: i32,
    /// `round(fatigue * 10)`
    pub fatigue_decile: i32,
    /// `round(performance * 10)`
    pub performance_decile: i32,
    /// `round(vma * 2)`
    pub vma_half: i32,
    /// `round(weekly_volume / 10)`
    pub volume_decade: i32,
    /// `round(injury_risk * 10)`
    pub injury_risk_decile: i32,
    /// `min(120, days_to_race)`
    pub days_to_race: u32,
    /// `round(temperature / 5)`
    pub temperature_band: i32,
}
