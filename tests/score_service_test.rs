// ABOUTME: End-to-end tests for the ScoreEngine surface
// ABOUTME: Daily and period records over the in-memory store, weighting, and error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitscore Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    cardio_exercise, day, food, profile, strength_exercise, targets, FailingDataStore,
};
use fitscore::{
    compose_daily, resolve_weights, ActivityLevel, Goal, InMemoryDataStore, NutritionScoreCalculator,
    Period, ScoreEngine, ScoringConfig, StaticProfileProvider, WorkoutScoreCalculator,
};

fn seeded_store() -> InMemoryDataStore {
    let mut store = InMemoryDataStore::new();
    let t = targets();
    for d in [1, 3, 5, 7] {
        store.log_exercise(day(d), strength_exercise("Squat", &[10, 8, 6]));
        store.log_exercise(day(d), cardio_exercise("Run", 25.0));
        store.log_food(day(d), food(t.calories, t.protein_g, t.fat_g, t.carbs_g));
    }
    store
}

#[tokio::test]
async fn daily_record_blends_components_with_profile_weights() {
    common::init_test_logging();
    let store = seeded_store();
    let user = profile(ActivityLevel::Moderate, Goal::Maintain);
    let engine = ScoreEngine::new(store, StaticProfileProvider::new(user, targets()));

    let record = engine.daily_record(day(5)).await.unwrap();
    assert_eq!(record.period, Period::Day);

    let exercises = vec![
        strength_exercise("Squat", &[10, 8, 6]),
        cardio_exercise("Run", 25.0),
    ];
    let expected_training = f64::from(WorkoutScoreCalculator::new().compute(&exercises));
    let expected_nutrition = f64::from(
        NutritionScoreCalculator::new()
            .compute(&targets(), &targets(), Goal::Maintain)
            .total,
    );
    let weights = resolve_weights(ActivityLevel::Moderate, Goal::Maintain);
    let expected_total = compose_daily(expected_training, expected_nutrition, weights);

    assert!((record.training_score - expected_training).abs() < 1e-9);
    assert!((record.nutrition_score - expected_nutrition).abs() < 1e-9);
    assert!((record.total_score - expected_total).abs() < 1e-9);
}

#[tokio::test]
async fn unlogged_day_scores_zero_training_without_error() {
    let store = seeded_store();
    let user = profile(ActivityLevel::Moderate, Goal::Maintain);
    let engine = ScoreEngine::new(store, StaticProfileProvider::new(user, targets()));

    // Day 2 has no logs at all: training 0, nutrition scored against empty
    // totals, no error surfaced.
    let record = engine.daily_record(day(2)).await.unwrap();
    assert!((record.training_score - 0.0).abs() < f64::EPSILON);
    assert!(record.total_score <= 100.0);
}

#[tokio::test]
async fn requested_periods_come_back_in_order() {
    let store = seeded_store();
    let user = profile(ActivityLevel::Active, Goal::Cut);
    let engine = ScoreEngine::new(store, StaticProfileProvider::new(user, targets()));

    let records = engine
        .score_records(day(7), &[Period::Day, Period::Week, Period::Month])
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].period, Period::Day);
    assert_eq!(records[1].period, Period::Week);
    assert_eq!(records[2].period, Period::Month);
    for record in &records {
        assert!(record.total_score >= 0.0 && record.total_score <= 100.0);
        assert!(record.nutrition_score >= 0.0 && record.nutrition_score <= 100.0);
        assert!(record.training_score >= 0.0 && record.training_score <= 100.0);
    }
}

#[tokio::test]
async fn recomputation_is_idempotent() {
    let store = seeded_store();
    let user = profile(ActivityLevel::Light, Goal::Bulk);
    let engine = ScoreEngine::new(store, StaticProfileProvider::new(user, targets()));

    let first = engine.period_record(Period::Week, day(7)).await.unwrap();
    let second = engine.period_record(Period::Week, day(7)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_failure_rejects_the_record() {
    let user = profile(ActivityLevel::Moderate, Goal::Maintain);
    let engine = ScoreEngine::new(FailingDataStore, StaticProfileProvider::new(user, targets()));

    assert!(engine.daily_record(day(1)).await.is_err());
    assert!(engine.period_record(Period::Month, day(30)).await.is_err());
}

#[tokio::test]
async fn invalid_config_is_rejected_at_construction() {
    let mut config = ScoringConfig::default();
    config.closeness.zero_at = 0.01;
    let user = profile(ActivityLevel::Moderate, Goal::Maintain);

    let result = ScoreEngine::with_config(
        InMemoryDataStore::new(),
        StaticProfileProvider::new(user, targets()),
        config,
    );
    assert!(result.is_err());
}
