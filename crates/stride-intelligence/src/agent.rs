// ABOUTME: Tabular Dyna-Q agent over discretized athlete states and actions
// ABOUTME: Epsilon-greedy policy, direct TD updates, and model-based planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Dyna-Q agent.
//!
//! Owns a sparse tabular action-value function keyed by
//! `(StateKey, ActionKey)` with an implicit default of zero for unseen pairs,
//! and a deterministic experience model mapping each observed pair to its
//! last-observed `(reward, next_state_key)` outcome. Between real steps the
//! agent replays a fixed number of uniformly sampled past transitions through
//! the model ("planning") to squeeze extra value updates out of each day of
//! real experience.
//!
//! The tables are exclusively owned by one agent instance and survive for the
//! whole training run; they are cleared only by constructing a new agent.

use std::collections::{HashMap, HashSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use stride_core::config::SchedulerConfig;
use stride_core::errors::CoachResult;
use stride_core::models::{AthleteState, StateKey};

use crate::actions::{ActionKey, ActionSpace, TrainingAction};
use crate::recommendation::{zone_label, Recommendation};

/// One observed transition, retained for offline analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRecord {
    /// Discretized state the action was taken from.
    pub state: StateKey,
    /// Discretized action taken.
    pub action: ActionKey,
    /// Reward observed.
    pub reward: f64,
    /// Discretized state the transition led to.
    pub next_state: StateKey,
}

/// Tabular Dyna-Q agent for the marathon-training scheduler.
pub struct DynaQAgent {
    q: HashMap<(StateKey, ActionKey), f64>,
    model: HashMap<(StateKey, ActionKey), (f64, StateKey)>,
    /// Model keys in first-insertion order, for deterministic seeded sampling.
    model_keys: Vec<(StateKey, ActionKey)>,
    seen_states: HashSet<StateKey>,
    actions: ActionSpace,
    learning_rate: f64,
    discount_factor: f64,
    epsilon: f64,
    planning_steps: usize,
    rng: ChaCha8Rng,
    training_history: Vec<TransitionRecord>,
    rewards_history: Vec<f64>,
}

impl DynaQAgent {
    /// Create an agent from a validated configuration, generating the fixed
    /// action space.
    ///
    /// # Errors
    /// Returns a configuration error if any field is outside its documented
    /// range.
    pub fn new(config: &SchedulerConfig) -> CoachResult<Self> {
        config.validate()?;
        let actions = ActionSpace::generate();
        debug!(actions = actions.len(), "generated legal action space");
        Ok(Self {
            q: HashMap::new(),
            model: HashMap::new(),
            model_keys: Vec::new(),
            seen_states: HashSet::new(),
            actions,
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            epsilon: config.epsilon_initial,
            planning_steps: config.planning_steps,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            training_history: Vec::new(),
            rewards_history: Vec::new(),
        })
    }

    /// Current exploration rate.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Set the exploration rate; decay schedules are a caller concern.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.clamp(0.0, 1.0);
    }

    /// The fixed legal action space.
    #[must_use]
    pub fn action_space(&self) -> &ActionSpace {
        &self.actions
    }

    /// Observed transitions, in order. Not consumed internally.
    #[must_use]
    pub fn training_history(&self) -> &[TransitionRecord] {
        &self.training_history
    }

    /// Per-step rewards, in order. Not consumed internally.
    #[must_use]
    pub fn rewards_history(&self) -> &[f64] {
        &self.rewards_history
    }

    /// Action value for a state/action pair; zero for unseen pairs.
    #[must_use]
    pub fn q_value(&self, state: &StateKey, action: &ActionKey) -> f64 {
        self.q.get(&(*state, *action)).copied().unwrap_or(0.0)
    }

    /// Select an action with the epsilon-greedy policy.
    ///
    /// With probability epsilon, or when the discretized state has never been
    /// seen, a uniformly random legal action (avoids biased defaults before
    /// any learning). Otherwise the legal action with the highest Q value,
    /// ties broken by first-encountered order in the fixed enumeration. An
    /// empty action space falls back to the rest action rather than crashing.
    pub fn select_action(&mut self, state: &AthleteState) -> TrainingAction {
        if self.actions.is_empty() {
            return TrainingAction::rest();
        }

        let state_key = state.discretize();
        let explore = self.rng.gen::<f64>() < self.epsilon;
        if explore || !self.seen_states.contains(&state_key) {
            let idx = self.rng.gen_range(0..self.actions.len());
            return self.actions.actions()[idx].clone();
        }

        let mut best = &self.actions.actions()[0];
        let mut best_value = self.q_value(&state_key, &best.discretize());
        for action in &self.actions.actions()[1..] {
            let value = self.q_value(&state_key, &action.discretize());
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best.clone()
    }

    /// Fold a real transition into the value function and the model, then
    /// run the configured number of planning updates.
    pub fn learn(
        &mut self,
        state: &AthleteState,
        action: &TrainingAction,
        reward: f64,
        next_state: &AthleteState,
    ) {
        let state_key = state.discretize();
        let action_key = action.discretize();
        let next_state_key = next_state.discretize();

        self.td_update(state_key, action_key, reward, next_state_key);

        // Deterministic model: the most recent outcome overwrites any prior
        // entry for the same pair.
        if self
            .model
            .insert((state_key, action_key), (reward, next_state_key))
            .is_none()
        {
            self.model_keys.push((state_key, action_key));
        }

        self.plan();

        self.training_history.push(TransitionRecord {
            state: state_key,
            action: action_key,
            reward,
            next_state: next_state_key,
        });
        self.rewards_history.push(reward);
    }

    /// Run the configured number of simulated value updates, each replaying a
    /// uniformly sampled previously-observed transition through the model.
    ///
    /// Planning never mutates the model, only the value function; an empty
    /// model is a no-op.
    pub fn plan(&mut self) {
        if self.model_keys.is_empty() {
            return;
        }
        for _ in 0..self.planning_steps {
            let idx = self.rng.gen_range(0..self.model_keys.len());
            let (state_key, action_key) = self.model_keys[idx];
            // Key vector and map are inserted together; the entry must exist.
            let Some(&(reward, next_state_key)) = self.model.get(&(state_key, action_key)) else {
                continue;
            };
            self.td_update(state_key, action_key, reward, next_state_key);
        }
    }

    /// Generate a detailed daily recommendation for the given state.
    pub fn recommend(&mut self, state: &AthleteState) -> Recommendation {
        let action = self.select_action(state);
        let confidence = self.q_value(&state.discretize(), &action.discretize());
        Recommendation {
            session: action.session,
            description: action.session.description().to_owned(),
            duration_min: action.duration_min,
            intensity: action.intensity,
            zone: action.zone,
            zone_label: zone_label(action.zone).to_owned(),
            target_hr: state.zones.bounds(action.zone),
            confidence,
        }
    }

    /// One temporal-difference update, with the max ranging over the full
    /// fixed action space (unseen entries default to zero).
    fn td_update(
        &mut self,
        state_key: StateKey,
        action_key: ActionKey,
        reward: f64,
        next_state_key: StateKey,
    ) {
        let best_next = self.best_value(&next_state_key);
        let td_target = reward + self.discount_factor * best_next;
        let current = self.q_value(&state_key, &action_key);
        self.q
            .insert((state_key, action_key), current + self.learning_rate * (td_target - current));
        self.seen_states.insert(state_key);
    }

    /// Highest action value available from a state across the full action
    /// space.
    fn best_value(&self, state_key: &StateKey) -> f64 {
        self.actions
            .actions()
            .iter()
            .map(|action| self.q_value(state_key, &action.discretize()))
            .fold(None, |best: Option<f64>, value| {
                Some(best.map_or(value, |b| b.max(value)))
            })
            .unwrap_or(0.0)
    }
}
