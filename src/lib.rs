// ABOUTME: Fitness progress scoring engine - daily and period scores from exercise and nutrition logs
// ABOUTME: Library root wiring models, calculators, weighting, aggregation, and the score service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

#![deny(unsafe_code)]

//! # Fitscore
//!
//! Computes normalized fitness-progress scores (0-100) from raw exercise and
//! nutrition logs, blends them into a single daily fitness score using
//! profile-driven weights, and aggregates scores across rolling periods
//! (day/week/month).
//!
//! Persistence and presentation are external collaborators: records come in
//! through the [`store::DataStore`] trait, profile inputs through
//! [`store::ProfileProvider`], and score records go back out. Every
//! calculator is a pure function over its inputs — no global state, no
//! caches — so recomputation is cheap, idempotent, and safe from any thread.
//!
//! ## Modules
//!
//! - **models**: domain types (exercises, nutrition totals, profiles, score records)
//! - **workout**: daily 0-100 training score from logged exercises
//! - **nutrition**: per-nutrient and total nutrition scores versus targets
//! - **weights**: profile-driven nutrition/training weight resolution and daily composition
//! - **aggregate**: frequency-adjusted week/month aggregation
//! - **service**: the consumer-facing [`service::ScoreEngine`]
//! - **store**: Data Store and Profile Provider interfaces plus in-memory implementations
//! - **config**: tunable curve configuration with environment overrides
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), fitscore::EngineError> {
//! use chrono::NaiveDate;
//! use fitscore::{
//!     ActivityLevel, Goal, InMemoryDataStore, NutritionTotals, Period, ScoreEngine,
//!     StaticProfileProvider, UserProfile,
//! };
//!
//! let store = InMemoryDataStore::new();
//! let profile = UserProfile {
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Maintain,
//! };
//! let targets = NutritionTotals {
//!     calories: 2200.0,
//!     protein_g: 140.0,
//!     fat_g: 70.0,
//!     carbs_g: 220.0,
//! };
//!
//! let engine = ScoreEngine::new(store, StaticProfileProvider::new(profile, targets));
//! let date = NaiveDate::from_ymd_opt(2025, 6, 2).ok_or_else(|| {
//!     fitscore::EngineError::store("bad date")
//! })?;
//! let records = engine
//!     .score_records(date, &[Period::Day, Period::Week, Period::Month])
//!     .await?;
//! # let _ = records;
//! # Ok(())
//! # }
//! ```

/// Scoring constants organized by domain
pub mod constants;

/// Error types for engine operations
pub mod errors;

/// Shared curve and rounding helpers
pub mod math;

/// Domain models for logs, profiles, and score records
pub mod models;

/// Tunable scoring configuration with defaults, validation, and env overrides
pub mod config;

/// Daily training score calculation
pub mod workout;

/// Daily nutrition score calculation
pub mod nutrition;

/// Profile-driven weighting and daily composition
pub mod weights;

/// Rolling week/month aggregation
pub mod aggregate;

/// External Data Store and Profile Provider interfaces
pub mod store;

/// Consumer-facing score engine
pub mod service;

pub use aggregate::{AggregationWindow, PeriodAggregator, PeriodScores};
pub use config::{CardioScoringConfig, ClosenessConfig, ScoringConfig, StrengthScoringConfig};
pub use errors::{EngineError, EngineResult};
pub use models::{
    ActivityLevel, Exercise, ExerciseKind, ExerciseSet, FoodLogEntry, Goal, NutritionTargets,
    NutritionTotals, Period, ScoreBand, ScoreRecord, UserProfile,
};
pub use nutrition::{NutritionScoreCalculator, NutritionScores};
pub use service::ScoreEngine;
pub use store::{DataStore, InMemoryDataStore, ProfileProvider, StaticProfileProvider};
pub use weights::{compose_daily, resolve_weights, ScoreWeights};
pub use workout::WorkoutScoreCalculator;
