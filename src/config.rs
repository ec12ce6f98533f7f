// ABOUTME: Tunable scoring configuration with defaults, validation, and env overrides
// ABOUTME: StrengthScoringConfig, CardioScoringConfig, ClosenessConfig, ScoringConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Scoring configuration.
//!
//! Curve shapes (saturation constants, dead zones, target-volume model) are
//! tunable per deployment; the defaults reproduce the reference scoring
//! behavior exactly. Closed lookup tables — goal weights, activity-level
//! weights, frequency multipliers — are *not* configuration: they live as
//! exhaustive `match` expressions so that adding an enum variant is a
//! compile-time-checked, single-point change.

use crate::constants::{cardio, closeness, strength};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Strength curve configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StrengthScoringConfig {
    /// Saturation constant for the set-count curve
    pub sets_saturation_k: f64,
    /// Saturation constant applied to the volume/target ratio
    pub volume_saturation_k: f64,
    /// Rep divisor of the Epley-style estimated-load relation
    pub epley_rep_divisor: f64,
    /// Sets in the target volume model
    pub target_sets: f64,
    /// Reps per set in the target volume model
    pub target_reps: f64,
    /// Intensity fraction in the target volume model
    pub target_intensity: f64,
    /// Flat target volume used when no estimated max exists
    pub fallback_target_volume: f64,
}

impl Default for StrengthScoringConfig {
    fn default() -> Self {
        Self {
            sets_saturation_k: strength::SETS_SATURATION_K,
            volume_saturation_k: strength::VOLUME_SATURATION_K,
            epley_rep_divisor: strength::EPLEY_REP_DIVISOR,
            target_sets: strength::TARGET_SETS,
            target_reps: strength::TARGET_REPS,
            target_intensity: strength::TARGET_INTENSITY,
            fallback_target_volume: strength::FALLBACK_TARGET_VOLUME,
        }
    }
}

/// Cardio curve configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CardioScoringConfig {
    /// Saturation constant for total cardio minutes
    pub time_saturation_k: f64,
    /// Distinct cardio exercise count granting full variety credit
    pub variety_target_exercises: f64,
}

impl Default for CardioScoringConfig {
    fn default() -> Self {
        Self {
            time_saturation_k: cardio::TIME_SATURATION_K,
            variety_target_exercises: cardio::VARIETY_TARGET_EXERCISES,
        }
    }
}

/// Closeness curve configuration for nutrition scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClosenessConfig {
    /// Relative deviation below which a value scores full marks
    pub dead_zone: f64,
    /// Relative deviation at which the score floors
    pub zero_at: f64,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            dead_zone: closeness::DEAD_ZONE,
            zero_at: closeness::ZERO_AT,
        }
    }
}

/// Complete scoring configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ScoringConfig {
    /// Strength curve configuration
    pub strength: StrengthScoringConfig,
    /// Cardio curve configuration
    pub cardio: CardioScoringConfig,
    /// Closeness curve configuration
    pub closeness: ClosenessConfig,
}

impl ScoringConfig {
    /// Build a configuration from defaults plus `FITSCORE_*` environment
    /// overrides
    ///
    /// Recognized variables:
    /// - `FITSCORE_STRENGTH_SETS_SATURATION_K`
    /// - `FITSCORE_STRENGTH_VOLUME_SATURATION_K`
    /// - `FITSCORE_CARDIO_TIME_SATURATION_K`
    /// - `FITSCORE_CLOSENESS_DEAD_ZONE`
    /// - `FITSCORE_CLOSENESS_ZERO_AT`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` when an override is set but not
    /// parseable as a float, or when the resulting configuration fails
    /// validation.
    pub fn from_env() -> EngineResult<Self> {
        let mut config = Self::default();

        if let Some(value) = env_f64("FITSCORE_STRENGTH_SETS_SATURATION_K")? {
            config.strength.sets_saturation_k = value;
        }
        if let Some(value) = env_f64("FITSCORE_STRENGTH_VOLUME_SATURATION_K")? {
            config.strength.volume_saturation_k = value;
        }
        if let Some(value) = env_f64("FITSCORE_CARDIO_TIME_SATURATION_K")? {
            config.cardio.time_saturation_k = value;
        }
        if let Some(value) = env_f64("FITSCORE_CLOSENESS_DEAD_ZONE")? {
            config.closeness.dead_zone = value;
        }
        if let Some(value) = env_f64("FITSCORE_CLOSENESS_ZERO_AT")? {
            config.closeness.zero_at = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate curve invariants
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` naming the offending key when a
    /// saturation constant is not positive, the target volume model is
    /// degenerate, or the closeness dead zone does not sit strictly below
    /// the zero point.
    pub fn validate(&self) -> EngineResult<()> {
        if self.strength.sets_saturation_k <= 0.0 {
            return Err(EngineError::invalid_config(
                "strength.sets_saturation_k",
                "must be positive",
            ));
        }
        if self.strength.volume_saturation_k <= 0.0 {
            return Err(EngineError::invalid_config(
                "strength.volume_saturation_k",
                "must be positive",
            ));
        }
        if self.strength.epley_rep_divisor <= 0.0 {
            return Err(EngineError::invalid_config(
                "strength.epley_rep_divisor",
                "must be positive",
            ));
        }
        if self.strength.target_sets * self.strength.target_reps * self.strength.target_intensity
            <= 0.0
        {
            return Err(EngineError::invalid_config(
                "strength.target_volume",
                "target volume model must be positive",
            ));
        }
        if self.strength.fallback_target_volume <= 0.0 {
            return Err(EngineError::invalid_config(
                "strength.fallback_target_volume",
                "must be positive",
            ));
        }
        if self.cardio.time_saturation_k <= 0.0 {
            return Err(EngineError::invalid_config(
                "cardio.time_saturation_k",
                "must be positive",
            ));
        }
        if self.cardio.variety_target_exercises <= 0.0 {
            return Err(EngineError::invalid_config(
                "cardio.variety_target_exercises",
                "must be positive",
            ));
        }
        if self.closeness.dead_zone < 0.0 || self.closeness.dead_zone >= self.closeness.zero_at {
            return Err(EngineError::invalid_config(
                "closeness.dead_zone",
                "must be non-negative and strictly below zero_at",
            ));
        }
        Ok(())
    }
}

/// Read an optional float override from the environment
fn env_f64(key: &'static str) -> EngineResult<Option<f64>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| EngineError::invalid_config(key, format!("not a number: {e}"))),
        Err(_) => Ok(None),
    }
}
