// ABOUTME: Nutrition score calculation from daily totals versus targets
// ABOUTME: Asymmetric goal-conditioned closeness curve, per-nutrient scores, macro composite, total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Nutrition score calculation.
//!
//! Each nutrient is scored by how close the day's total lands to its target.
//! The closeness curve has a 5% dead zone (deviations under it are free), a
//! 60% floor (deviations at or past it zero out), and an asymmetric
//! goal-conditioned weight: overshooting calories hurts more while cutting,
//! undershooting hurts more while bulking, and a protein shortfall is always
//! penalized hardest.
//!
//! Pure and synchronous; identical inputs produce bit-identical outputs.

use crate::config::{ClosenessConfig, ScoringConfig};
use crate::constants::{closeness, nutrition_weights};
use crate::math::clamp01;
use crate::models::{Goal, NutritionTargets, NutritionTotals, ScoreBand};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Asymmetric penalty weights for one nutrient under one goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosenessWeights {
    /// Penalty multiplier when the logged value is below target
    pub under: f64,
    /// Penalty multiplier when the logged value is at or above target
    pub over: f64,
}

/// Per-nutrient and composite nutrition scores for one day, each 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionScores {
    /// Calorie closeness score
    pub calories: u8,
    /// Protein closeness score
    pub protein: u8,
    /// Fat closeness score
    pub fat: u8,
    /// Carbohydrate closeness score
    pub carbs: u8,
    /// Weighted macro composite (protein-dominated)
    pub macros: u8,
    /// Overall nutrition score
    pub total: u8,
}

impl NutritionScores {
    /// Presentation band for the overall score
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(f64::from(self.total))
    }
}

/// Calculator for daily nutrition scores
#[derive(Debug, Clone, Default)]
pub struct NutritionScoreCalculator {
    config: ScoringConfig,
}

impl NutritionScoreCalculator {
    /// Create a calculator with the default scoring configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom scoring configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute all nutrition scores for one day's totals versus targets
    #[must_use]
    pub fn compute(
        &self,
        totals: &NutritionTotals,
        targets: &NutritionTargets,
        goal: Goal,
    ) -> NutritionScores {
        let calories = self.closeness(
            totals.calories,
            targets.calories,
            calorie_weights(goal),
            closeness::CALORIE_POW,
        );
        let protein = self.closeness(
            totals.protein_g,
            targets.protein_g,
            protein_weights(goal),
            closeness::MACRO_POW,
        );
        let fat = self.closeness(
            totals.fat_g,
            targets.fat_g,
            fat_weights(goal),
            closeness::MACRO_POW,
        );
        let carbs = self.closeness(
            totals.carbs_g,
            targets.carbs_g,
            carb_weights(goal),
            closeness::MACRO_POW,
        );

        let macros = (nutrition_weights::MACRO_PROTEIN * f64::from(protein)
            + nutrition_weights::MACRO_CARBS * f64::from(carbs)
            + nutrition_weights::MACRO_FAT * f64::from(fat))
        .round() as u8;
        let total = (nutrition_weights::TOTAL_CALORIES * f64::from(calories)
            + nutrition_weights::TOTAL_MACROS * f64::from(macros))
        .round() as u8;

        debug!(calories, protein, fat, carbs, macros, total, ?goal, "nutrition breakdown");

        NutritionScores {
            calories,
            protein,
            fat,
            carbs,
            macros,
            total,
        }
    }

    fn closeness(&self, current: f64, target: f64, weights: ClosenessWeights, pow: f64) -> u8 {
        closeness_score(current, target, weights, pow, &self.config.closeness)
    }
}

/// Closeness of a logged value to its target, 0-100.
///
/// Relative deviation is normalized between the dead zone and the zero
/// point, shaped by `pow` (slightly above 1, so the penalty accelerates
/// toward the floor), and scaled by the goal-conditioned asymmetric weight
/// for the side of the target the value landed on.
pub(crate) fn closeness_score(
    current: f64,
    target: f64,
    weights: ClosenessWeights,
    pow: f64,
    config: &ClosenessConfig,
) -> u8 {
    let deviation = (current - target).abs() / target.max(1.0);
    let normalized = clamp01((deviation - config.dead_zone) / (config.zero_at - config.dead_zone));
    let weight = if current < target {
        weights.under
    } else {
        weights.over
    };
    let penalty = clamp01(normalized.powf(pow) * weight);
    (100.0 * (1.0 - penalty)).round() as u8
}

/// Calorie penalty weights by goal.
///
/// Overshooting calories is penalized harder while cutting; undershooting is
/// penalized harder while bulking.
#[must_use]
pub fn calorie_weights(goal: Goal) -> ClosenessWeights {
    match goal {
        Goal::Maintain => ClosenessWeights {
            under: 1.0,
            over: 1.0,
        },
        Goal::Cut => ClosenessWeights {
            under: 0.8,
            over: 1.25,
        },
        Goal::Bulk => ClosenessWeights {
            under: 1.25,
            over: 0.9,
        },
    }
}

/// Protein penalty weights by goal; a shortfall always dominates.
#[must_use]
pub fn protein_weights(goal: Goal) -> ClosenessWeights {
    match goal {
        Goal::Maintain => ClosenessWeights {
            under: 1.4,
            over: 0.9,
        },
        Goal::Cut => ClosenessWeights {
            under: 1.7,
            over: 0.8,
        },
        Goal::Bulk => ClosenessWeights {
            under: 1.6,
            over: 0.9,
        },
    }
}

/// Carbohydrate penalty weights by goal.
#[must_use]
pub fn carb_weights(goal: Goal) -> ClosenessWeights {
    match goal {
        Goal::Maintain => ClosenessWeights {
            under: 0.9,
            over: 1.0,
        },
        Goal::Cut => ClosenessWeights {
            under: 0.7,
            over: 1.2,
        },
        Goal::Bulk => ClosenessWeights {
            under: 1.1,
            over: 0.8,
        },
    }
}

/// Fat penalty weights by goal.
#[must_use]
pub fn fat_weights(goal: Goal) -> ClosenessWeights {
    match goal {
        Goal::Maintain => ClosenessWeights {
            under: 0.9,
            over: 1.1,
        },
        Goal::Cut => ClosenessWeights {
            under: 0.8,
            over: 1.3,
        },
        Goal::Bulk => ClosenessWeights {
            under: 0.9,
            over: 0.9,
        },
    }
}
