// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Exercise/food builders, profile fixtures, and a failing Data Store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

//! Shared test fixtures for `fitscore` integration tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use fitscore::errors::{EngineError, EngineResult};
use fitscore::{
    ActivityLevel, DataStore, Exercise, ExerciseKind, ExerciseSet, FoodLogEntry, Goal,
    NutritionTotals, UserProfile,
};
use std::collections::HashMap;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// A date in the fixture month (June 2025)
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

/// Strength exercise with one set per rep count, no estimated max
pub fn strength_exercise(name: &str, reps: &[u32]) -> Exercise {
    reps.iter().fold(
        Exercise::new(name, ExerciseKind::Strength),
        |exercise, &r| exercise.with_set(ExerciseSet::strength(60.0, r)),
    )
}

/// Cardio exercise with a single timed set
pub fn cardio_exercise(name: &str, minutes: f64) -> Exercise {
    Exercise::new(name, ExerciseKind::Cardio).with_set(ExerciseSet::cardio(minutes, minutes / 6.0))
}

/// A food entry with the given macros
pub fn food(calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodLogEntry {
    FoodLogEntry {
        calories,
        protein_g: protein,
        fat_g: fat,
        carbs_g: carbs,
    }
}

/// Standard fixture nutrition targets
pub fn targets() -> NutritionTotals {
    NutritionTotals {
        calories: 2200.0,
        protein_g: 140.0,
        fat_g: 70.0,
        carbs_g: 220.0,
    }
}

/// Standard fixture profile
pub fn profile(activity_level: ActivityLevel, goal: Goal) -> UserProfile {
    UserProfile {
        activity_level,
        goal,
    }
}

/// A Data Store whose every read fails, for error propagation tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingDataStore;

#[async_trait]
impl DataStore for FailingDataStore {
    async fn exercises_for_date(&self, _date: NaiveDate) -> EngineResult<Vec<Exercise>> {
        Err(EngineError::store("connection reset"))
    }

    async fn exercises_for_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, Vec<Exercise>>> {
        Err(EngineError::store("connection reset"))
    }

    async fn food_totals_for_date(&self, _date: NaiveDate) -> EngineResult<NutritionTotals> {
        Err(EngineError::store("connection reset"))
    }

    async fn food_totals_for_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, NutritionTotals>> {
        Err(EngineError::store("connection reset"))
    }
}
