// ABOUTME: Consumer-facing score engine producing ScoreRecords for requested periods
// ABOUTME: Wires a DataStore and ProfileProvider to the calculators and aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

//! The consumer-facing scoring surface.
//!
//! [`ScoreEngine`] owns a Data Store and a Profile Provider and turns them
//! into fresh [`ScoreRecord`]s on demand. It holds no state between calls:
//! every record is recomputed from its full input, so callers may invoke it
//! reactively on every log mutation and simply discard superseded results.

use crate::aggregate::{AggregationWindow, PeriodAggregator};
use crate::config::ScoringConfig;
use crate::errors::EngineResult;
use crate::models::{Period, ScoreRecord};
use crate::nutrition::NutritionScoreCalculator;
use crate::store::{DataStore, ProfileProvider};
use crate::weights::{compose_daily, resolve_weights};
use crate::workout::WorkoutScoreCalculator;
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use tracing::debug;

/// Scoring engine over an injected Data Store and Profile Provider
#[derive(Debug, Clone)]
pub struct ScoreEngine<S, P> {
    store: S,
    profiles: P,
    workout: WorkoutScoreCalculator,
    nutrition: NutritionScoreCalculator,
    aggregator: PeriodAggregator,
}

impl<S, P> ScoreEngine<S, P>
where
    S: DataStore,
    P: ProfileProvider,
{
    /// Create an engine with the default scoring configuration
    #[must_use]
    pub fn new(store: S, profiles: P) -> Self {
        Self {
            store,
            profiles,
            workout: WorkoutScoreCalculator::new(),
            nutrition: NutritionScoreCalculator::new(),
            aggregator: PeriodAggregator::new(),
        }
    }

    /// Create an engine with a custom scoring configuration
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` when the configuration fails
    /// validation.
    pub fn with_config(store: S, profiles: P, config: ScoringConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            profiles,
            workout: WorkoutScoreCalculator::with_config(config),
            nutrition: NutritionScoreCalculator::with_config(config),
            aggregator: PeriodAggregator::with_config(config),
        })
    }

    /// Compute the daily score record for one date
    ///
    /// The four independent reads (exercises, food totals, profile, targets)
    /// are issued concurrently and joined.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::Store` when any read fails.
    pub async fn daily_record(&self, date: NaiveDate) -> EngineResult<ScoreRecord> {
        let (exercises, totals, profile, targets) = futures_util::try_join!(
            self.store.exercises_for_date(date),
            self.store.food_totals_for_date(date),
            self.profiles.profile(),
            self.profiles.nutrition_targets(),
        )?;

        let training_score = f64::from(self.workout.compute(&exercises));
        let nutrition_score =
            f64::from(self.nutrition.compute(&totals, &targets, profile.goal).total);
        let weights = resolve_weights(profile.activity_level, profile.goal);
        let total_score = compose_daily(training_score, nutrition_score, weights);

        debug!(%date, training_score, nutrition_score, total_score, "daily record");

        Ok(ScoreRecord {
            period: Period::Day,
            total_score,
            nutrition_score,
            training_score,
        })
    }

    /// Compute the score record for one period ending at `end_date`
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::Store` when any underlying read fails.
    pub async fn period_record(
        &self,
        period: Period,
        end_date: NaiveDate,
    ) -> EngineResult<ScoreRecord> {
        let window = match period {
            Period::Day => return self.daily_record(end_date).await,
            Period::Week => AggregationWindow::Week,
            Period::Month => AggregationWindow::Month,
        };

        let (profile, targets) = futures_util::try_join!(
            self.profiles.profile(),
            self.profiles.nutrition_targets(),
        )?;

        let scores = self
            .aggregator
            .aggregate_range(&self.store, window, end_date, &targets)
            .await?;

        let weights = resolve_weights(profile.activity_level, profile.goal);
        let total_score = compose_daily(scores.training, scores.nutrition, weights);

        debug!(?period, %end_date, ?scores, total_score, "period record");

        Ok(ScoreRecord {
            period,
            total_score,
            nutrition_score: scores.nutrition,
            training_score: scores.training,
        })
    }

    /// Compute fresh score records for every requested period
    ///
    /// Records are computed concurrently and returned in the order the
    /// periods were requested.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError::Store` when any underlying read fails.
    pub async fn score_records(
        &self,
        end_date: NaiveDate,
        periods: &[Period],
    ) -> EngineResult<Vec<ScoreRecord>> {
        try_join_all(
            periods
                .iter()
                .map(|period| self.period_record(*period, end_date)),
        )
        .await
    }
}
