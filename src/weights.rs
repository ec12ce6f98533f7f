// ABOUTME: Profile-driven score weighting and daily score composition
// ABOUTME: Activity-level base weight table, cut adjustment, and the daily blend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Score weighting and daily composition.
//!
//! The nutrition/training split is driven by the user's activity level: the
//! more active the profile, the more the training score carries. A cutting
//! goal shifts a further 0.05 toward nutrition, capped so training never
//! drops below 0.30. The pair always sums to 1.0.

use crate::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition weight cap when the cut adjustment applies
const CUT_NUTRITION_CAP: f64 = 0.70;

/// Training weight floor when the cut adjustment applies
const CUT_TRAINING_FLOOR: f64 = 0.30;

/// Nutrition weight shift applied to a cutting goal
const CUT_SHIFT: f64 = 0.05;

/// Weight pair blending nutrition and training into a total score
///
/// Invariant: `nutrition + training == 1.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    /// Share of the total carried by the nutrition score
    pub nutrition: f64,
    /// Share of the total carried by the training score
    pub training: f64,
}

/// Resolve the weight pair for an activity level and goal
#[must_use]
pub fn resolve_weights(activity_level: ActivityLevel, goal: Goal) -> ScoreWeights {
    let (nutrition, training) = match activity_level {
        ActivityLevel::Sedentary => (0.65, 0.35),
        ActivityLevel::Light => (0.60, 0.40),
        ActivityLevel::Moderate => (0.55, 0.45),
        ActivityLevel::Active => (0.50, 0.50),
        ActivityLevel::VeryActive => (0.45, 0.55),
    };

    match goal {
        Goal::Cut => ScoreWeights {
            nutrition: (nutrition + CUT_SHIFT).min(CUT_NUTRITION_CAP),
            training: (training - CUT_SHIFT).max(CUT_TRAINING_FLOOR),
        },
        Goal::Bulk | Goal::Maintain => ScoreWeights {
            nutrition,
            training,
        },
    }
}

/// Blend a day's training and nutrition scores into the total daily score
#[must_use]
pub fn compose_daily(training_score: f64, nutrition_score: f64, weights: ScoreWeights) -> f64 {
    (nutrition_score * weights.nutrition + training_score * weights.training).round()
}
