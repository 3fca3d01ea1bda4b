// ABOUTME: Training intelligence for the Stride scheduler
// ABOUTME: Action space, physiological simulation, reward shaping, and the Dyna-Q agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Model-based reinforcement-learning scheduler for marathon preparation.
//! Couples a deterministic physiological simulation (two-component
//! fitness/fatigue impulse-response model) with a tabular Dyna-Q agent that
//! learns a value function over discretized states and actions, using a
//! learned transition model for extra "imagined" updates between real steps.
//!
//! ## Control flow
//!
//! The agent selects an action for the current state via its epsilon-greedy
//! policy; the environment consumes `(state, action)` and returns
//! `(next_state, reward, done)`; the agent's learn step folds the real
//! transition into both the value function and the internal model, then runs
//! a fixed number of simulated planning updates sampled from the model. The
//! loop repeats until the race-day countdown terminates, at which point the
//! environment resets to a fresh initial state.
//!
//! The loop is strictly sequential and single-threaded; to explore
//! hyperparameters in parallel, give each worker its own independent
//! [`DynaQAgent`] and [`MarathonEnvironment`] pair.

/// Enumerated, constrained action space of trainable sessions
pub mod actions;

/// Physiological transition model and episode environment
pub mod environment;

/// Reward shaping for the scheduler
pub mod reward;

/// Tabular Dyna-Q agent
pub mod agent;

/// Recommendation records for presentation collaborators
pub mod recommendation;

pub use actions::{ActionKey, ActionSpace, TrainingAction};
pub use agent::{DynaQAgent, TransitionRecord};
pub use environment::MarathonEnvironment;
pub use recommendation::Recommendation;
