// ABOUTME: External collaborator traits for log storage and profile access
// ABOUTME: DataStore and ProfileProvider async traits plus in-memory reference implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! External interfaces consumed by the engine.
//!
//! The engine never persists anything itself; exercise and food records come
//! from a [`DataStore`] and profile inputs from a [`ProfileProvider`]. Both
//! are read-only from the engine's perspective. A failed read is the only
//! error the engine propagates to callers — everything else degrades to
//! neutral defaults.
//!
//! # Thread safety
//!
//! All implementations must be `Send + Sync`; reads may be issued
//! concurrently across dates and joined in any order.

use crate::errors::EngineResult;
use crate::models::{Exercise, FoodLogEntry, NutritionTargets, NutritionTotals, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Read-only access to exercise and food logs
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Exercises logged on one date (empty when none)
    async fn exercises_for_date(&self, date: NaiveDate) -> EngineResult<Vec<Exercise>>;

    /// Exercises per date over an inclusive range; dates without logs are absent
    async fn exercises_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, Vec<Exercise>>>;

    /// Aggregated food totals for one date (zero totals when nothing was logged)
    async fn food_totals_for_date(&self, date: NaiveDate) -> EngineResult<NutritionTotals>;

    /// Food totals per date over an inclusive range; dates without logs are absent
    async fn food_totals_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, NutritionTotals>>;
}

/// Read-only access to the user's profile and nutrition targets
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// The user's activity level and goal
    async fn profile(&self) -> EngineResult<UserProfile>;

    /// The user's daily nutrition targets; supplied, never computed here
    async fn nutrition_targets(&self) -> EngineResult<NutritionTargets>;
}

/// Deterministic in-memory [`DataStore`] for tests and demos
///
/// Holds logs keyed by date. No interior mutability: populate it up front,
/// then share it behind a reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataStore {
    exercises: HashMap<NaiveDate, Vec<Exercise>>,
    food_logs: HashMap<NaiveDate, Vec<FoodLogEntry>>,
}

impl InMemoryDataStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an exercise on a date
    pub fn log_exercise(&mut self, date: NaiveDate, exercise: Exercise) {
        self.exercises.entry(date).or_default().push(exercise);
    }

    /// Log a food entry on a date
    pub fn log_food(&mut self, date: NaiveDate, entry: FoodLogEntry) {
        self.food_logs.entry(date).or_default().push(entry);
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn exercises_for_date(&self, date: NaiveDate) -> EngineResult<Vec<Exercise>> {
        Ok(self.exercises.get(&date).cloned().unwrap_or_default())
    }

    async fn exercises_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, Vec<Exercise>>> {
        Ok(self
            .exercises
            .iter()
            .filter(|(date, logs)| **date >= start && **date <= end && !logs.is_empty())
            .map(|(date, logs)| (*date, logs.clone()))
            .collect())
    }

    async fn food_totals_for_date(&self, date: NaiveDate) -> EngineResult<NutritionTotals> {
        Ok(self
            .food_logs
            .get(&date)
            .map(|entries| NutritionTotals::from_entries(entries))
            .unwrap_or_default())
    }

    async fn food_totals_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<HashMap<NaiveDate, NutritionTotals>> {
        Ok(self
            .food_logs
            .iter()
            .filter(|(date, entries)| **date >= start && **date <= end && !entries.is_empty())
            .map(|(date, entries)| (*date, NutritionTotals::from_entries(entries)))
            .collect())
    }
}

/// Fixed-value [`ProfileProvider`] for tests and demos
#[derive(Debug, Clone, Copy)]
pub struct StaticProfileProvider {
    profile: UserProfile,
    targets: NutritionTargets,
}

impl StaticProfileProvider {
    /// Create a provider returning the given profile and targets
    #[must_use]
    pub const fn new(profile: UserProfile, targets: NutritionTargets) -> Self {
        Self { profile, targets }
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn profile(&self) -> EngineResult<UserProfile> {
        Ok(self.profile)
    }

    async fn nutrition_targets(&self) -> EngineResult<NutritionTargets> {
        Ok(self.targets)
    }
}
