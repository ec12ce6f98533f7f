// ABOUTME: Domain models for exercise logs, nutrition logs, profiles, and score records
// ABOUTME: Exercise, ExerciseSet, NutritionTotals, UserProfile, Period, ScoreRecord, ScoreBand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Domain models consumed and produced by the scoring engine.
//!
//! All types are plain serde-serializable data. The engine never mutates its
//! inputs; score records are produced fresh on every computation and replaced
//! wholesale, never updated in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discipline of an exercise
///
/// Determines which fields of its sets are authoritative: strength sets carry
/// weight/reps, cardio sets carry duration/distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Weight training (sets of reps at a load)
    Strength,
    /// Endurance work (duration and distance)
    Cardio,
}

impl ExerciseKind {
    /// Parse an exercise kind from free-form input
    ///
    /// Unrecognized input maps to `Strength`, matching how unlabeled
    /// historical logs were recorded.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cardio" | "endurance" => Self::Cardio,
            _ => Self::Strength,
        }
    }
}

/// One logged set of an exercise
///
/// Which fields are meaningful depends on the owning exercise's kind; the
/// calculators read only the authoritative fields and treat the rest as
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExerciseSet {
    /// Weight lifted in kilograms (strength)
    #[serde(default)]
    pub weight_kg: f64,
    /// Repetitions performed (strength)
    #[serde(default)]
    pub reps: u32,
    /// Estimated single-rep max in kilograms, when the athlete has one on record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_max_kg: Option<f64>,
    /// Duration in minutes (cardio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Distance in kilometers (cardio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ExerciseSet {
    /// Create a strength set
    #[must_use]
    pub fn strength(weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg,
            reps,
            ..Self::default()
        }
    }

    /// Create a cardio set
    #[must_use]
    pub fn cardio(duration_minutes: f64, distance_km: f64) -> Self {
        Self {
            duration_minutes: Some(duration_minutes),
            distance_km: Some(distance_km),
            ..Self::default()
        }
    }

    /// Attach an estimated single-rep max to this set
    #[must_use]
    pub fn with_estimated_max(mut self, estimated_max_kg: f64) -> Self {
        self.estimated_max_kg = Some(estimated_max_kg);
        self
    }

    /// Estimated max when present and positive
    #[must_use]
    pub fn valid_estimated_max(&self) -> Option<f64> {
        self.estimated_max_kg.filter(|max| *max > 0.0)
    }
}

/// A logged exercise with its sets
///
/// An exercise with zero sets contributes nothing to any score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier for this exercise log entry
    pub id: Uuid,
    /// Exercise name (e.g. "Back Squat", "Treadmill Run")
    pub name: String,
    /// Discipline of the exercise
    pub kind: ExerciseKind,
    /// Logged sets
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    /// Create an exercise with a fresh id and no sets
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ExerciseKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            sets: Vec::new(),
        }
    }

    /// Append a set
    #[must_use]
    pub fn with_set(mut self, set: ExerciseSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Whether this exercise has any logged sets
    #[must_use]
    pub fn has_sets(&self) -> bool {
        !self.sets.is_empty()
    }

    /// Total cardio minutes across all sets
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.sets
            .iter()
            .filter_map(|set| set.duration_minutes)
            .filter(|minutes| *minutes > 0.0)
            .sum()
    }
}

/// One logged food item's macro contribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct FoodLogEntry {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
}

/// A day's aggregated macro and calorie totals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct NutritionTotals {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
}

impl NutritionTotals {
    /// Sum a day's food log entries into totals
    #[must_use]
    pub fn from_entries(entries: &[FoodLogEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut totals, entry| {
            totals.calories += entry.calories;
            totals.protein_g += entry.protein_g;
            totals.fat_g += entry.fat_g;
            totals.carbs_g += entry.carbs_g;
            totals
        })
    }

    /// Whether nothing was logged (all totals zero)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories <= 0.0 && self.protein_g <= 0.0 && self.fat_g <= 0.0 && self.carbs_g <= 0.0
    }
}

/// Daily nutrition goals; supplied externally, never computed by this engine
pub type NutritionTargets = NutritionTotals;

/// Self-reported activity level from the user's profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 sessions/week
    Light,
    /// 3-5 sessions/week
    Moderate,
    /// 6-7 sessions/week
    Active,
    /// Hard daily training
    VeryActive,
}

impl ActivityLevel {
    /// All enumerated levels, in ascending activity order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse an activity level from free-form input
    ///
    /// Unknown input maps to `Moderate`, which carries the default weight
    /// table entry.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly_active" => Self::Light,
            "active" => Self::Active,
            "very_active" | "very-active" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }
}

/// Training goal from the user's profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, fat loss
    Cut,
    /// Caloric surplus, muscle gain
    Bulk,
    /// Caloric balance
    Maintain,
}

impl Goal {
    /// All enumerated goals
    pub const ALL: [Self; 3] = [Self::Cut, Self::Bulk, Self::Maintain];

    /// Parse a goal from free-form input; unknown input maps to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cut" | "lose" => Self::Cut,
            "bulk" | "gain" => Self::Bulk,
            _ => Self::Maintain,
        }
    }
}

/// Read-only profile inputs the engine needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
    /// Training goal
    pub goal: Goal,
}

/// Scoring period for a score record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// A single day
    Day,
    /// Rolling 7-day window
    Week,
    /// Rolling 30-day window
    Month,
}

/// A computed fitness score for one period
///
/// Produced fresh on every recomputation and replaced wholesale; the engine
/// holds no state between computations, so callers may cache records freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreRecord {
    /// Period this record covers
    pub period: Period,
    /// Blended total score, 0-100
    pub total_score: f64,
    /// Nutrition component, 0-100
    pub nutrition_score: f64,
    /// Training component, 0-100
    pub training_score: f64,
}

/// Presentation band for a score
///
/// Part of the engine contract: presentation layers map bands to colors, and
/// the thresholds are fixed here so every consumer bands identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Score of 80 or above
    Success,
    /// Score of 60 to 79
    Warning,
    /// Score below 60
    Error,
}

impl ScoreBand {
    /// Band for a 0-100 score
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Success
        } else if score >= 60.0 {
            Self::Warning
        } else {
            Self::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_entries() {
        let entries = [
            FoodLogEntry {
                calories: 450.0,
                protein_g: 30.0,
                fat_g: 12.0,
                carbs_g: 55.0,
            },
            FoodLogEntry {
                calories: 600.0,
                protein_g: 42.0,
                fat_g: 20.0,
                carbs_g: 60.0,
            },
        ];

        let totals = NutritionTotals::from_entries(&entries);
        assert!((totals.calories - 1050.0).abs() < f64::EPSILON);
        assert!((totals.protein_g - 72.0).abs() < f64::EPSILON);
        assert!(!totals.is_empty());
        assert!(NutritionTotals::default().is_empty());
    }

    #[test]
    fn lossy_parsing_defaults() {
        assert_eq!(ActivityLevel::from_str_lossy("couch"), ActivityLevel::Moderate);
        assert_eq!(
            ActivityLevel::from_str_lossy("very_active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(Goal::from_str_lossy("shred"), Goal::Maintain);
        assert_eq!(ExerciseKind::from_str_lossy("Cardio"), ExerciseKind::Cardio);
    }

    #[test]
    fn score_banding_thresholds() {
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Success);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_score(59.9), ScoreBand::Error);
    }
}
