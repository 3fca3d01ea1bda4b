// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for physiology, reward shaping, and scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Constants module
//!
//! Constants are grouped into logical domains rather than living in a single
//! large file: impulse-response physiology, reward-shaping weights, and
//! scheduling defaults.

/// Impulse-response model and heart-rate physiology constants
pub mod physiology;

/// Reward-shaping weights and window sizes
pub mod reward;

/// Scheduler and learning-loop defaults
pub mod scheduling;
