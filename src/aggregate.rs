// ABOUTME: Period aggregation of daily scores over rolling week/month windows
// ABOUTME: Frequency-adjusted training averages and simplified per-day nutrition scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! Period aggregation.
//!
//! Computes week/month figures from raw per-date records: a training score
//! for every active day, averaged and corrected by a frequency multiplier,
//! and a simplified nutrition score over days that have food logs. The
//! multiplier normalizes against the *actually-observed* date span rather
//! than the full requested window, so a data set spanning only a few days is
//! not penalized for the empty remainder.
//!
//! This is the only component that touches the Data Store. The two ranged
//! reads are issued concurrently and joined; a failed read propagates to the
//! caller untouched. Everything after the join is pure, and per-day training
//! scores are computed in parallel.

use crate::config::ScoringConfig;
use crate::constants::{aggregation, closeness, frequency};
use crate::errors::EngineResult;
use crate::math::round1;
use crate::models::{Exercise, NutritionTargets, NutritionTotals};
use crate::nutrition::{closeness_score, ClosenessWeights};
use crate::store::DataStore;
use crate::workout::WorkoutScoreCalculator;
use chrono::{Days, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Rolling window an aggregation covers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AggregationWindow {
    /// Rolling 7-day window
    Week,
    /// Rolling 30-day window
    Month,
}

impl AggregationWindow {
    /// Days covered by this window
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

/// Period-average component scores, rounded to one decimal place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodScores {
    /// Average nutrition score over nutrition-valid days (50.0 with no data)
    pub nutrition: f64,
    /// Frequency-adjusted average training score over active days
    pub training: f64,
}

/// Aggregator for rolling-period scores
#[derive(Debug, Clone, Default)]
pub struct PeriodAggregator {
    config: ScoringConfig,
    workout: WorkoutScoreCalculator,
}

impl PeriodAggregator {
    /// Create an aggregator with the default scoring configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with a custom scoring configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            workout: WorkoutScoreCalculator::with_config(config),
        }
    }

    /// Aggregate the window ending at `end_date` from the Data Store
    ///
    /// Issues the two ranged reads concurrently and joins them before the
    /// pure aggregation pass.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::Store` when either ranged read fails.
    pub async fn aggregate_range<S>(
        &self,
        store: &S,
        window: AggregationWindow,
        end_date: NaiveDate,
        targets: &NutritionTargets,
    ) -> EngineResult<PeriodScores>
    where
        S: DataStore + ?Sized,
    {
        let start_date = end_date
            .checked_sub_days(Days::new(window.days() - 1))
            .unwrap_or(end_date);

        let (workouts, nutrition) = futures_util::try_join!(
            store.exercises_for_range(start_date, end_date),
            store.food_totals_for_range(start_date, end_date),
        )?;

        Ok(self.aggregate_window(window, &workouts, &nutrition, targets))
    }

    /// Aggregate already-fetched per-date records for one window
    ///
    /// Pure and synchronous; the async entry point above is a thin wrapper
    /// around this.
    #[must_use]
    pub fn aggregate_window(
        &self,
        window: AggregationWindow,
        workouts_by_date: &HashMap<NaiveDate, Vec<Exercise>>,
        nutrition_by_date: &HashMap<NaiveDate, NutritionTotals>,
        targets: &NutritionTargets,
    ) -> PeriodScores {
        let training = self.training_aggregate(window, workouts_by_date);
        let nutrition = self.nutrition_aggregate(nutrition_by_date, targets);

        debug!(?window, training, nutrition, "period aggregate");

        PeriodScores {
            nutrition: round1(nutrition),
            training: round1(training),
        }
    }

    /// Average per-active-day training score, frequency-adjusted
    fn training_aggregate(
        &self,
        window: AggregationWindow,
        workouts_by_date: &HashMap<NaiveDate, Vec<Exercise>>,
    ) -> f64 {
        let active: Vec<(&NaiveDate, &Vec<Exercise>)> = workouts_by_date
            .iter()
            .filter(|(_, exercises)| !exercises.is_empty())
            .collect();
        if active.is_empty() {
            return 0.0;
        }

        let day_scores: Vec<f64> = active
            .par_iter()
            .map(|(_, exercises)| f64::from(self.workout.compute(exercises.as_slice())))
            .collect();

        let active_days = day_scores.len() as f64;
        let average = day_scores.iter().sum::<f64>() / active_days;

        let observed_days = observed_span_days(active.iter().map(|(date, _)| **date));
        let multiplier = frequency_multiplier(window, active_days, observed_days);

        average * multiplier
    }

    /// Average simplified per-day nutrition score over nutrition-valid days
    ///
    /// Days without food logs are skipped entirely; with no valid day at all
    /// the result is the neutral 50.0 — "no data", not "zero performance".
    fn nutrition_aggregate(
        &self,
        nutrition_by_date: &HashMap<NaiveDate, NutritionTotals>,
        targets: &NutritionTargets,
    ) -> f64 {
        let valid_days: Vec<&NutritionTotals> = nutrition_by_date
            .values()
            .filter(|totals| !totals.is_empty())
            .collect();
        if valid_days.is_empty() {
            return aggregation::NEUTRAL_NUTRITION_SCORE;
        }

        let total: f64 = valid_days
            .iter()
            .map(|totals| self.day_nutrition_score(totals, targets))
            .sum();
        total / valid_days.len() as f64
    }

    /// Simplified per-day nutrition score: protein-vs-target ratio capped at
    /// 100, blended 50/50 with goal-agnostic calorie closeness
    fn day_nutrition_score(&self, totals: &NutritionTotals, targets: &NutritionTargets) -> f64 {
        let protein_ratio =
            (totals.protein_g / targets.protein_g.max(1.0) * 100.0).min(100.0);
        let calorie_closeness = f64::from(closeness_score(
            totals.calories,
            targets.calories,
            ClosenessWeights {
                under: 1.0,
                over: 1.0,
            },
            closeness::CALORIE_POW,
            &self.config.closeness,
        ));

        aggregation::DAILY_PROTEIN_SHARE * protein_ratio
            + aggregation::DAILY_CALORIE_SHARE * calorie_closeness
    }
}

/// Inclusive day span between the earliest and latest observed dates
fn observed_span_days(dates: impl Iterator<Item = NaiveDate>) -> f64 {
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;
    for date in dates {
        earliest = Some(earliest.map_or(date, |current| current.min(date)));
        latest = Some(latest.map_or(date, |current| current.max(date)));
    }
    match (earliest, latest) {
        (Some(first), Some(last)) => (last - first).num_days() as f64 + 1.0,
        _ => 0.0,
    }
}

/// Frequency multiplier for a window
///
/// The observed frequency projects the active-day count onto the window
/// length, normalized by the observed span so sparse data sets are judged on
/// the days they actually cover.
fn frequency_multiplier(window: AggregationWindow, active_days: f64, observed_days: f64) -> f64 {
    if observed_days <= 0.0 {
        return 1.0;
    }
    let window_days = window.days() as f64;
    let projected = active_days / observed_days.min(window_days) * window_days;

    match window {
        AggregationWindow::Week => {
            if projected < frequency::WEEKLY_IDEAL_MIN {
                frequency::WEEKLY_LOW_MULTIPLIER
            } else if projected > frequency::WEEKLY_IDEAL_MAX {
                frequency::WEEKLY_HIGH_MULTIPLIER
            } else {
                1.0
            }
        }
        AggregationWindow::Month => {
            if projected < frequency::MONTHLY_IDEAL_MIN {
                frequency::MONTHLY_LOW_MULTIPLIER
            } else if projected > frequency::MONTHLY_IDEAL_MAX {
                frequency::MONTHLY_HIGH_MULTIPLIER
            } else {
                1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn weekly_multiplier_table() {
        // 4 active days across a fully observed week: frequency 4, ideal band.
        assert!((frequency_multiplier(AggregationWindow::Week, 4.0, 7.0) - 1.0).abs() < 1e-9);
        // 2 active days across a week: frequency 2, below the band.
        assert!((frequency_multiplier(AggregationWindow::Week, 2.0, 7.0) - 0.8).abs() < 1e-9);
        // Daily training: frequency 7, above the band.
        assert!((frequency_multiplier(AggregationWindow::Week, 7.0, 7.0) - 0.9).abs() < 1e-9);
        // 2 active days out of 2 observed: projects to 7/week, above the band.
        assert!((frequency_multiplier(AggregationWindow::Week, 2.0, 2.0) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn monthly_multiplier_table() {
        assert!((frequency_multiplier(AggregationWindow::Month, 15.0, 30.0) - 1.0).abs() < 1e-9);
        assert!((frequency_multiplier(AggregationWindow::Month, 6.0, 30.0) - 0.85).abs() < 1e-9);
        assert!((frequency_multiplier(AggregationWindow::Month, 25.0, 30.0) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn observed_span_is_inclusive() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let span = observed_span_days([d(3), d(1), d(7)].into_iter());
        assert!((span - 7.0).abs() < 1e-9);
        let single = observed_span_days([d(5)].into_iter());
        assert!((single - 1.0).abs() < 1e-9);
        assert!((observed_span_days(std::iter::empty())).abs() < 1e-9);
    }
}
