// ABOUTME: Workout score calculation from a day's logged exercises
// ABOUTME: Strength sets/volume/variety sub-scores, cardio time/variety, cross-discipline combination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Workout (training) score calculation.
//!
//! Converts a set of logged exercises for one day into a single 0-100
//! training score. Strength and cardio are scored independently and then
//! combined; each sub-score rides a diminishing-returns curve so that more
//! work always helps but never without bound.
//!
//! Pure and synchronous: no side effects, no shared state, safe to call from
//! any thread. Malformed or absent input degrades to a zero contribution
//! instead of an error.

use crate::config::ScoringConfig;
use crate::constants::{cardio, combination, strength};
use crate::math::soft_saturate;
use crate::models::{Exercise, ExerciseKind, ExerciseSet};
use tracing::debug;

/// Calculator for daily training scores
#[derive(Debug, Clone, Default)]
pub struct WorkoutScoreCalculator {
    config: ScoringConfig,
}

impl WorkoutScoreCalculator {
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

    /// Compute the 0-100 training score for one day's exercises
    ///
    /// Returns 0 when no discipline has any logged sets. When both
    /// disciplines are present the better score carries the day, with a
    /// cross-training bonus of 25% of whatever the weaker discipline scores
    /// above 50.
    #[must_use]
    pub fn compute(&self, exercises: &[Exercise]) -> u8 {
        let strength_exercises: Vec<&Exercise> = exercises
            .iter()
            .filter(|exercise| exercise.kind == ExerciseKind::Strength)
            .collect();
        let cardio_exercises: Vec<&Exercise> = exercises
            .iter()
            .filter(|exercise| exercise.kind == ExerciseKind::Cardio)
            .collect();

        let has_strength = strength_exercises.iter().any(|e| e.has_sets());
        let has_cardio = cardio_exercises.iter().any(|e| e.has_sets());

        let score = match (has_strength, has_cardio) {
            (false, false) => 0.0,
            (true, false) => self.strength_score(&strength_exercises),
            (false, true) => self.cardio_score(&cardio_exercises),
            (true, true) => {
                let strength_points = self.strength_score(&strength_exercises);
                let cardio_points = self.cardio_score(&cardio_exercises);
                let best = strength_points.max(cardio_points);
                let weaker = strength_points.min(cardio_points);
                let bonus = combination::CROSS_TRAINING_BONUS_FACTOR
                    * (weaker - combination::CROSS_TRAINING_THRESHOLD).max(0.0);
                debug!(strength_points, cardio_points, bonus, "combined disciplines");
                (best + bonus).round()
            }
        };

        score.clamp(0.0, 100.0) as u8
    }

    /// Strength score: sets (40) + equivalent volume (50) + variety (10)
    fn strength_score(&self, exercises: &[&Exercise]) -> f64 {
        let sets: Vec<&ExerciseSet> = exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter())
            .collect();
        if sets.is_empty() {
            return 0.0;
        }

        let config = &self.config.strength;
        let total_sets = sets.len() as f64;
        let sets_score =
            strength::SETS_WEIGHT * soft_saturate(total_sets, config.sets_saturation_k);

        // Average estimated max across sets that carry a valid one; sets
        // without their own max borrow this day-level average.
        let valid_maxes: Vec<f64> = sets
            .iter()
            .filter_map(|set| set.valid_estimated_max())
            .collect();
        let average_max = if valid_maxes.is_empty() {
            None
        } else {
            Some(valid_maxes.iter().sum::<f64>() / valid_maxes.len() as f64)
        };

        let equivalent_volume: f64 = sets
            .iter()
            .map(|set| {
                let base_max = set
                    .valid_estimated_max()
                    .or(average_max)
                    .unwrap_or(strength::FALLBACK_BASE_MAX);
                let estimated_set_weight =
                    base_max / (1.0 + f64::from(set.reps) / config.epley_rep_divisor);
                estimated_set_weight * f64::from(set.reps)
            })
            .sum();

        let target_volume = average_max.map_or(config.fallback_target_volume, |max| {
            config.target_sets * config.target_reps * config.target_intensity * max
        });
        let volume_score = if target_volume > 0.0 {
            strength::VOLUME_WEIGHT
                * soft_saturate(equivalent_volume / target_volume, config.volume_saturation_k)
        } else {
            0.0
        };

        let distinct_exercises = exercises.iter().filter(|e| e.has_sets()).count() as u32;
        let variety_score = Self::strength_variety_score(distinct_exercises);

        debug!(
            total_sets,
            equivalent_volume, target_volume, distinct_exercises, "strength breakdown"
        );

        (sets_score + volume_score + variety_score).round()
    }

    /// Variety sub-score over the distinct strength exercise count.
    ///
    /// Rewards breadth up to 4 exercises, holds full credit through 6, then
    /// decays toward a floor: past that point, exercise-switching costs more
    /// than it earns.
    fn strength_variety_score(distinct: u32) -> f64 {
        match distinct {
            0 => 0.0,
            n if n < strength::VARIETY_RAMP_TARGET => {
                strength::VARIETY_WEIGHT * f64::from(n) / f64::from(strength::VARIETY_RAMP_TARGET)
            }
            n if n <= strength::VARIETY_PLATEAU_MAX => strength::VARIETY_WEIGHT,
            n => (strength::VARIETY_WEIGHT
                - f64::from(n - strength::VARIETY_PLATEAU_MAX) * strength::VARIETY_DECAY_STEP)
                .max(strength::VARIETY_FLOOR),
        }
    }

    /// Cardio score: time (70) + variety (30)
    fn cardio_score(&self, exercises: &[&Exercise]) -> f64 {
        let total_minutes: f64 = exercises.iter().map(|e| e.total_minutes()).sum();
        if total_minutes <= 0.0 {
            return 0.0;
        }

        let config = &self.config.cardio;
        let time_score = cardio::TIME_WEIGHT * soft_saturate(total_minutes, config.time_saturation_k);

        let distinct_exercises = exercises
            .iter()
            .filter(|e| e.total_minutes() > 0.0)
            .count() as f64;
        let variety_score = cardio::VARIETY_WEIGHT
            * (distinct_exercises / config.variety_target_exercises).min(1.0);

        debug!(total_minutes, distinct_exercises, "cardio breakdown");

        (time_score + variety_score).round()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{Exercise, ExerciseKind, ExerciseSet};

    fn strength_exercise(name: &str, reps: &[u32]) -> Exercise {
        reps.iter().fold(
            Exercise::new(name, ExerciseKind::Strength),
            |exercise, &r| exercise.with_set(ExerciseSet::strength(0.0, r)),
        )
    }

    fn cardio_exercise(name: &str, minutes: f64) -> Exercise {
        Exercise::new(name, ExerciseKind::Cardio).with_set(ExerciseSet::cardio(minutes, 5.0))
    }

    #[test]
    fn empty_input_scores_zero() {
        let calculator = WorkoutScoreCalculator::new();
        assert_eq!(calculator.compute(&[]), 0);
    }

    #[test]
    fn zero_set_exercises_contribute_nothing() {
        let calculator = WorkoutScoreCalculator::new();
        let exercises = vec![
            Exercise::new("Bench Press", ExerciseKind::Strength),
            Exercise::new("Rowing", ExerciseKind::Cardio),
        ];
        assert_eq!(calculator.compute(&exercises), 0);
    }

    #[test]
    fn reps_only_exercise_uses_fallback_base() {
        // One strength exercise, 3 sets of 10/8/6 reps, no estimated max.
        let calculator = WorkoutScoreCalculator::new();
        let exercises = vec![strength_exercise("Push-up", &[10, 8, 6])];

        let sets_score = 40.0 * (1.0 - (-3.0_f64 / 12.0).exp());
        let volume: f64 = 1.0 / (1.0 + 10.0 / 30.0) * 10.0
            + 1.0 / (1.0 + 8.0 / 30.0) * 8.0
            + 1.0 / (1.0 + 6.0 / 30.0) * 6.0;
        let volume_score = 50.0 * (1.0 - (-(volume / 80.0) / 1.2).exp());
        let variety_score = 10.0 * (1.0 / 4.0);
        let expected = (sets_score + volume_score + variety_score).round() as u8;

        assert_eq!(calculator.compute(&exercises), expected);
        // Sets component alone is 40*(1-e^(-3/12)) ~= 8.85
        assert!((sets_score - 8.848).abs() < 0.001);
    }

    #[test]
    fn own_estimated_max_beats_day_average() {
        let calculator = WorkoutScoreCalculator::new();
        let with_max = Exercise::new("Squat", ExerciseKind::Strength)
            .with_set(ExerciseSet::strength(100.0, 5).with_estimated_max(120.0));
        let without_max =
            Exercise::new("Lunge", ExerciseKind::Strength).with_set(ExerciseSet::strength(40.0, 10));

        // Both sets score; the lunge set borrows the squat's 120kg average.
        let score = calculator.compute(&[with_max, without_max]);
        assert!(score > 0);
        assert!(score <= 100);
    }

    #[test]
    fn variety_ramp_plateau_and_decay() {
        assert!((WorkoutScoreCalculator::strength_variety_score(0)).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(1) - 2.5).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(3) - 7.5).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(4) - 10.0).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(6) - 10.0).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(7) - 9.5).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(10) - 8.0).abs() < f64::EPSILON);
        assert!((WorkoutScoreCalculator::strength_variety_score(14) - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cardio_time_and_variety() {
        let calculator = WorkoutScoreCalculator::new();
        let exercises = vec![cardio_exercise("Run", 30.0)];

        let time_score = 70.0 * (1.0 - (-1.0_f64).exp());
        let variety_score = 30.0 / 3.0;
        let expected = (time_score + variety_score).round() as u8;
        assert_eq!(calculator.compute(&exercises), expected);
    }

    #[test]
    fn monotonic_in_sets_and_minutes() {
        let calculator = WorkoutScoreCalculator::new();

        let mut previous = 0;
        for set_count in 1..=40 {
            let reps = vec![8; set_count];
            let score = calculator.compute(&[strength_exercise("Deadlift", &reps)]);
            assert!(score >= previous, "sets={set_count} regressed");
            previous = score;
        }

        previous = 0;
        for minutes in (5..=240).step_by(5) {
            let score = calculator.compute(&[cardio_exercise("Bike", f64::from(minutes))]);
            assert!(score >= previous, "minutes={minutes} regressed");
            previous = score;
        }
    }

    #[test]
    fn cross_training_bonus_requires_strong_weaker_side() {
        let calculator = WorkoutScoreCalculator::new();

        // A heavy strength day plus a token 1-minute jog: the weaker side
        // stays below 50, so the combination degenerates to the best score.
        let heavy = vec![
            strength_exercise("Squat", &[8, 8, 8, 8, 8]),
            strength_exercise("Bench", &[8, 8, 8, 8, 8]),
            strength_exercise("Row", &[8, 8, 8, 8, 8]),
            strength_exercise("Press", &[8, 8, 8, 8, 8]),
        ];
        let strength_only = calculator.compute(&heavy);

        let mut with_token_cardio = heavy.clone();
        with_token_cardio.push(cardio_exercise("Jog", 1.0));
        assert_eq!(calculator.compute(&with_token_cardio), strength_only);

        // A real cardio session on top clears 50 and earns a bonus.
        let mut with_real_cardio = heavy;
        with_real_cardio.push(cardio_exercise("Run", 45.0));
        with_real_cardio.push(cardio_exercise("Bike", 30.0));
        assert!(calculator.compute(&with_real_cardio) >= strength_only);
    }

    #[test]
    fn score_never_exceeds_100() {
        let calculator = WorkoutScoreCalculator::new();
        let mut exercises: Vec<Exercise> = (0..12)
            .map(|i| strength_exercise(&format!("Lift {i}"), &[10; 8]))
            .collect();
        for i in 0..6 {
            exercises.push(cardio_exercise(&format!("Cardio {i}"), 120.0));
        }
        assert!(calculator.compute(&exercises) <= 100);
    }

    #[test]
    fn idempotent_for_identical_input() {
        let calculator = WorkoutScoreCalculator::new();
        let exercises = vec![
            strength_exercise("Squat", &[10, 8, 6]),
            cardio_exercise("Run", 25.0),
        ];
        assert_eq!(calculator.compute(&exercises), calculator.compute(&exercises));
    }
}
