// ABOUTME: Episode environment advancing athlete state through training sessions
// ABOUTME: Normalized training load, impulse-response update, reward, and countdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Marathon-preparation environment.
//!
//! Owns the mutable [`AthleteState`], advances it one day per [`step`], and
//! terminates the episode when the race-day countdown reaches zero. Performs
//! no I/O: inputs are actions, outputs are states, rewards, and the done
//! flag.
//!
//! [`step`]: MarathonEnvironment::step

use tracing::debug;

use stride_core::config::SchedulerConfig;
use stride_core::constants::physiology::{
    MAX_SESSION_MINUTES, MAX_TYPE_LOAD_FACTOR, MAX_ZONE_WEIGHT,
};
use stride_core::errors::CoachResult;
use stride_core::models::AthleteState;

use crate::actions::TrainingAction;
use crate::reward::shaped_reward;

/// Deterministic transition model for marathon preparation.
pub struct MarathonEnvironment {
    config: SchedulerConfig,
    state: AthleteState,
    history: Vec<(AthleteState, TrainingAction)>,
}

impl MarathonEnvironment {
    /// Create an environment from a validated configuration.
    ///
    /// # Errors
    /// Returns a configuration error if any field is outside its documented
    /// range.
    pub fn new(config: SchedulerConfig) -> CoachResult<Self> {
        config.validate()?;
        let state = config.initial_state();
        Ok(Self {
            config,
            state,
            history: Vec::new(),
        })
    }

    /// Reset to a fresh initial state for a new episode, clearing history.
    pub fn reset(&mut self) -> AthleteState {
        self.state = self.config.initial_state();
        self.history.clear();
        self.state.clone()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &AthleteState {
        &self.state
    }

    /// Episode history of `(state-before-step, action)` pairs, for offline
    /// analysis. Not consumed internally.
    #[must_use]
    pub fn history(&self) -> &[(AthleteState, TrainingAction)] {
        &self.history
    }

    /// Advance one day: apply the session, compute the shaped reward, and
    /// decrement the race countdown.
    ///
    /// Returns `(next_state, reward, done)`; `done` is `true` once race day
    /// is reached, after which the caller is expected to [`reset`].
    ///
    /// [`reset`]: MarathonEnvironment::reset
    pub fn step(&mut self, action: &TrainingAction) -> (AthleteState, f64, bool) {
        self.history.push((self.state.clone(), action.clone()));

        let prev = self.state.clone();
        let mut next = self.state.clone();

        // Session recording precedes the physiological update so the reward's
        // sequence heuristics see the session just scheduled.
        next.record_session(action.session);

        let load = Self::training_load(action);
        next.apply_load(load);

        let reward = shaped_reward(&prev, &next, action);

        let done = next.advance_day();
        if done {
            debug!(
                fitness = next.fitness,
                fatigue = next.fatigue,
                performance = next.performance,
                "race day reached, episode complete"
            );
        }

        self.state = next.clone();
        (next, reward, done)
    }

    /// Normalized training load in `[0, 1]` for a session.
    ///
    /// Zero for rest; otherwise `(duration/60) * exp(zone) * type_factor`,
    /// normalized by the theoretical maximum session (120 minutes in zone 5
    /// at the largest factor entering the divisor).
    #[must_use]
    pub fn training_load(action: &TrainingAction) -> f64 {
        if action.session.is_rest() {
            return 0.0;
        }
        let raw = (f64::from(action.duration_min) / 60.0)
            * f64::from(action.zone).exp()
            * action.session.load_factor();
        let max_possible =
            (MAX_SESSION_MINUTES / 60.0) * MAX_ZONE_WEIGHT.exp() * MAX_TYPE_LOAD_FACTOR;
        raw / max_possible
    }
}
