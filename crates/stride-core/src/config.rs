// ABOUTME: Scheduler configuration with documented numeric defaults
// ABOUTME: Validated at construction; produces the initial athlete state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Scheduler configuration.
//!
//! Every tunable the integrator owns lives here: Dyna-Q hyperparameters, the
//! exploration-rate schedule endpoints, episode shape, and the athlete
//! profile used to seed each episode's initial state. All fields are plain
//! numbers with documented defaults so a driver can round-trip the
//! configuration through JSON.

use serde::{Deserialize, Serialize};

use crate::constants::scheduling::{
    DEFAULT_DAYS_TO_RACE, DEFAULT_DISCOUNT_FACTOR, DEFAULT_EPISODES, DEFAULT_EPSILON_FINAL,
    DEFAULT_EPSILON_INITIAL, DEFAULT_LEARNING_RATE, DEFAULT_MAX_HR, DEFAULT_PLANNING_STEPS,
    DEFAULT_RESTING_HR, DEFAULT_TEMPERATURE_C, DEFAULT_VMA_KMH,
};
use crate::errors::{CoachError, CoachResult};
use crate::models::AthleteState;

/// Configuration for the training scheduler and its learning loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulerConfig {
    /// Simulated planning updates per real learning step (default 10).
    pub planning_steps: usize,
    /// Temporal-difference learning rate alpha in `(0, 1]` (default 0.1).
    pub learning_rate: f64,
    /// Discount factor gamma in `[0, 1)` (default 0.95).
    pub discount_factor: f64,
    /// Exploration rate at the start of the run (default 0.9).
    pub epsilon_initial: f64,
    /// Exploration rate at the end of the run (default 0.1).
    pub epsilon_final: f64,
    /// Number of training episodes (default 5000).
    pub episodes: usize,
    /// Episode length: days from preparation start to race day (default 120).
    pub days_to_race: u32,
    /// Maximum heart rate in bpm, used to derive zone bounds (default 185).
    pub max_hr: u16,
    /// Resting heart rate in bpm (default 60).
    pub resting_hr: u16,
    /// Maximal aerobic speed in km/h (default 15.0).
    pub vma_kmh: f64,
    /// Ambient temperature in degrees Celsius (default 20.0).
    pub temperature_c: f64,
    /// RNG seed for reproducible exploration and planning.
    pub seed: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            planning_steps: DEFAULT_PLANNING_STEPS,
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT_FACTOR,
            epsilon_initial: DEFAULT_EPSILON_INITIAL,
            epsilon_final: DEFAULT_EPSILON_FINAL,
            episodes: DEFAULT_EPISODES,
            days_to_race: DEFAULT_DAYS_TO_RACE,
            max_hr: DEFAULT_MAX_HR,
            resting_hr: DEFAULT_RESTING_HR,
            vma_kmh: DEFAULT_VMA_KMH,
            temperature_c: DEFAULT_TEMPERATURE_C,
            seed: 0,
        }
    }
}

impl SchedulerConfig {
    /// Validate all fields against their documented ranges.
    ///
    /// # Errors
    /// Returns [`CoachError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> CoachResult<()> {
        if self.learning_rate <= 0.0 || self.learning_rate > 1.0 {
            return Err(CoachError::invalid_config(
                "learning_rate",
                self.learning_rate,
                "must be in (0, 1]",
            ));
        }
        if !(0.0..1.0).contains(&self.discount_factor) {
            return Err(CoachError::invalid_config(
                "discount_factor",
                self.discount_factor,
                "must be in [0, 1)",
            ));
        }
        for (field, value) in [
            ("epsilon_initial", self.epsilon_initial),
            ("epsilon_final", self.epsilon_final),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoachError::invalid_config(
                    field,
                    value,
                    "must be in [0, 1]",
                ));
            }
        }
        if self.epsilon_final > self.epsilon_initial {
            return Err(CoachError::invalid_config(
                "epsilon_final",
                self.epsilon_final,
                "must not exceed epsilon_initial",
            ));
        }
        if self.episodes == 0 {
            return Err(CoachError::invalid_config(
                "episodes",
                self.episodes,
                "must be positive",
            ));
        }
        if self.days_to_race == 0 {
            return Err(CoachError::invalid_config(
                "days_to_race",
                self.days_to_race,
                "must be positive",
            ));
        }
        if self.max_hr == 0 {
            return Err(CoachError::invalid_config(
                "max_hr",
                self.max_hr,
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Build the fresh athlete state that starts each episode.
    #[must_use]
    pub fn initial_state(&self) -> AthleteState {
        let mut state =
            AthleteState::new(self.max_hr, self.resting_hr, self.vma_kmh, self.days_to_race);
        state.temperature_c = self.temperature_c;
        state
    }

    /// Exploration rate for a given episode under the linear decay schedule.
    ///
    /// Decays from `epsilon_initial` at episode 0 to `epsilon_final` at the
    /// last episode. A single-episode run stays fully exploratory at
    /// `epsilon_initial`. The schedule is a caller concern: the agent itself
    /// never mutates its own epsilon.
    #[must_use]
    pub fn epsilon_for_episode(&self, episode: usize) -> f64 {
        if self.episodes <= 1 {
            return self.epsilon_initial;
        }
        let span = self.epsilon_initial - self.epsilon_final;
        let progress = episode as f64 / (self.episodes - 1) as f64;
        (self.epsilon_initial - span * progress).max(self.epsilon_final)
    }
}
