// ABOUTME: Scoring constants for strength, cardio, nutrition, and aggregation curves
// ABOUTME: Single source for every weight, saturation constant, and threshold table value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Scoring constants organized by domain.
//!
//! These are the fixed points of every curve the engine computes. Tunable
//! curve shapes are re-exposed through [`crate::config`]; closed lookup
//! tables (goal weights, frequency multipliers) live as exhaustive `match`
//! expressions next to their consumers.

/// Strength score composition and curve constants
pub mod strength {
    /// Weight of the set-count sub-score within the 100-point strength score
    pub const SETS_WEIGHT: f64 = 40.0;

    /// Weight of the equivalent-volume sub-score
    pub const VOLUME_WEIGHT: f64 = 50.0;

    /// Weight of the exercise-variety sub-score
    pub const VARIETY_WEIGHT: f64 = 10.0;

    /// Saturation constant for the set-count curve; 12 sets reach ~63% of max
    pub const SETS_SATURATION_K: f64 = 12.0;

    /// Saturation constant applied to the volume/target ratio
    pub const VOLUME_SATURATION_K: f64 = 1.2;

    /// Rep divisor of the Epley-style estimated-load relation
    /// `load = max / (1 + reps/30)`
    /// Reference: Epley, B. (1985). Poundage chart. Boyd Epley Workout.
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;

    /// Target volume model: 10 sets of 8 reps at 70% of estimated max
    pub const TARGET_SETS: f64 = 10.0;
    /// Reps per set in the target volume model
    pub const TARGET_REPS: f64 = 8.0;
    /// Intensity (fraction of estimated max) in the target volume model
    pub const TARGET_INTENSITY: f64 = 0.7;

    /// Flat target volume when no estimated max exists anywhere in the day
    pub const FALLBACK_TARGET_VOLUME: f64 = 80.0;

    /// Base load per set when neither the set nor the day carries an estimated max
    pub const FALLBACK_BASE_MAX: f64 = 1.0;

    /// Distinct-exercise count where the variety ramp reaches its maximum
    pub const VARIETY_RAMP_TARGET: u32 = 4;
    /// Upper end of the full-credit variety plateau
    pub const VARIETY_PLATEAU_MAX: u32 = 6;
    /// Per-exercise decay beyond the plateau
    pub const VARIETY_DECAY_STEP: f64 = 0.5;
    /// Variety score floor once decay sets in
    pub const VARIETY_FLOOR: f64 = 8.0;
}

/// Cardio score composition and curve constants
pub mod cardio {
    /// Weight of the time sub-score within the 100-point cardio score
    pub const TIME_WEIGHT: f64 = 70.0;

    /// Weight of the variety sub-score
    pub const VARIETY_WEIGHT: f64 = 30.0;

    /// Saturation constant for total cardio minutes; 30 minutes reach ~63% of max
    pub const TIME_SATURATION_K: f64 = 30.0;

    /// Distinct cardio exercise count granting full variety credit
    pub const VARIETY_TARGET_EXERCISES: f64 = 3.0;
}

/// Cross-discipline combination constants
pub mod combination {
    /// Fraction of the weaker discipline's above-threshold score credited as bonus
    pub const CROSS_TRAINING_BONUS_FACTOR: f64 = 0.25;

    /// The weaker discipline must clear this score before any bonus accrues
    pub const CROSS_TRAINING_THRESHOLD: f64 = 50.0;
}

/// Closeness curve constants for nutrition scoring
pub mod closeness {
    /// Relative deviation below which a value scores full marks
    pub const DEAD_ZONE: f64 = 0.05;

    /// Relative deviation at which the score floors
    pub const ZERO_AT: f64 = 0.60;

    /// Steepness exponent for the calorie closeness curve
    pub const CALORIE_POW: f64 = 1.1;

    /// Steepness exponent for each macro closeness curve
    pub const MACRO_POW: f64 = 1.05;
}

/// Nutrition score composition weights
pub mod nutrition_weights {
    /// Protein share of the macro composite
    pub const MACRO_PROTEIN: f64 = 0.5;
    /// Carbohydrate share of the macro composite
    pub const MACRO_CARBS: f64 = 0.3;
    /// Fat share of the macro composite
    pub const MACRO_FAT: f64 = 0.2;

    /// Calorie share of the total nutrition score
    pub const TOTAL_CALORIES: f64 = 0.45;
    /// Macro-composite share of the total nutrition score
    pub const TOTAL_MACROS: f64 = 0.55;
}

/// Frequency-multiplier table bounds for period aggregation
pub mod frequency {
    /// Weekly session count treated as ideal (inclusive lower bound)
    pub const WEEKLY_IDEAL_MIN: f64 = 3.0;
    /// Weekly session count treated as ideal (inclusive upper bound)
    pub const WEEKLY_IDEAL_MAX: f64 = 5.0;
    /// Multiplier below the ideal weekly band
    pub const WEEKLY_LOW_MULTIPLIER: f64 = 0.8;
    /// Multiplier above the ideal weekly band
    pub const WEEKLY_HIGH_MULTIPLIER: f64 = 0.9;

    /// Monthly session count treated as ideal (inclusive lower bound)
    pub const MONTHLY_IDEAL_MIN: f64 = 12.0;
    /// Monthly session count treated as ideal (inclusive upper bound)
    pub const MONTHLY_IDEAL_MAX: f64 = 20.0;
    /// Multiplier below the ideal monthly band
    pub const MONTHLY_LOW_MULTIPLIER: f64 = 0.85;
    /// Multiplier above the ideal monthly band
    pub const MONTHLY_HIGH_MULTIPLIER: f64 = 0.95;
}

/// Aggregation defaults
pub mod aggregation {
    /// Period nutrition score when no day in the window has food logs.
    ///
    /// Deliberately neutral rather than zero: "no data" is not "zero
    /// performance". The live daily nutrition score can still legitimately
    /// be 0.
    pub const NEUTRAL_NUTRITION_SCORE: f64 = 50.0;

    /// Protein-ratio share of the simplified per-day nutrition score
    pub const DAILY_PROTEIN_SHARE: f64 = 0.5;
    /// Calorie-closeness share of the simplified per-day nutrition score
    pub const DAILY_CALORIE_SHARE: f64 = 0.5;
}
