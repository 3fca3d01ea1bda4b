// ABOUTME: Weather context for the training environment
// ABOUTME: Exogenous condition enum, currently inert in the transition function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::{Deserialize, Serialize};

/// Ambient weather condition for a training day.
///
/// Exogenous context carried on the athlete state. The transition function
/// does not yet react to it, but temperature participates in the state
/// discretization key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Ideal running conditions
    #[default]
    Ideal,
    /// Hot weather
    Hot,
    /// Cold weather
    Cold,
    /// Rain
    Rainy,
    /// Strong wind
    Windy,
}
