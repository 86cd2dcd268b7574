// ABOUTME: Integration tests for the Hooper Index recovery calculator
// ABOUTME: Covers the published formula, neutral defaulting, injury clamping, and tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

use sentinela::config::intelligence::RecoveryScoringConfig;
use sentinela::intelligence::{RecoveryCalculator, RecoveryStatus};
use sentinela::models::CheckinMetrics;

fn config() -> RecoveryScoringConfig {
    RecoveryScoringConfig::default()
}

fn checkin(
    sleep: i32,
    fatigue: i32,
    soreness: i32,
    stress: i32,
    mood: i32,
    libido: i32,
    injured: bool,
) -> CheckinMetrics {
    CheckinMetrics {
        qualidade_sono: Some(sleep),
        cansaco: Some(fatigue),
        dor_muscular: Some(soreness),
        estresse: Some(stress),
        humor: Some(mood),
        libido: Some(libido),
        lesao: Some(injured),
        ..CheckinMetrics::default()
    }
}

#[test]
fn test_neutral_checkin_scores_fifty() {
    let result = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 5, false), &config());
    assert!((result.hooper_index - 20.0).abs() < f64::EPSILON);
    assert_eq!(result.score, 50);
    assert_eq!(result.status, RecoveryStatus::Critical);
}

#[test]
fn test_perfect_checkin_clamps_to_one_hundred() {
    // hooper = 0, base = 100, adjustment = +15, raw 115 -> clamped.
    let result = RecoveryCalculator::calculate(&checkin(10, 0, 0, 0, 10, 10, false), &config());
    assert_eq!(result.score, 100);
    assert_eq!(result.status, RecoveryStatus::Safe);
    assert!(result.hooper_index.abs() < f64::EPSILON);
}

#[test]
fn test_injury_penalty_is_capped_at_seventy() {
    // Raw score 95 before the penalty: 95 - 12 = 83, ceiling forces 70.
    let result = RecoveryCalculator::calculate(&checkin(10, 2, 2, 0, 5, 10, true), &config());
    assert_eq!(result.score, 70);
    assert_eq!(result.status, RecoveryStatus::Warning);
}

#[test]
fn test_injury_penalty_applies_fully_below_the_ceiling() {
    let uninjured = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 5, false), &config());
    let injured = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 5, true), &config());
    assert_eq!(uninjured.score, 50);
    assert_eq!(injured.score, 38);
}

#[test]
fn test_missing_fields_behave_like_neutral_midpoint() {
    let explicit = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 5, false), &config());
    let empty = RecoveryCalculator::calculate(&CheckinMetrics::default(), &config());
    assert_eq!(explicit, empty);
}

#[test]
fn test_mood_weighs_twice_libido() {
    let base = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 5, false), &config());
    let mood_up = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 6, 5, false), &config());
    let libido_up = RecoveryCalculator::calculate(&checkin(5, 5, 5, 5, 5, 6, false), &config());
    assert_eq!(i32::from(mood_up.score) - i32::from(base.score), 2);
    assert_eq!(i32::from(libido_up.score) - i32::from(base.score), 1);
}

#[test]
fn test_hooper_index_reported_unrounded_and_independent_of_injury() {
    let result = RecoveryCalculator::calculate(&checkin(7, 3, 4, 2, 5, 5, true), &config());
    // hooper = 3 + 2 + 4 + (10 - 7) = 12 regardless of the injury flag.
    assert!((result.hooper_index - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_status_tier_boundaries() {
    // score 80: hooper 8 -> base 80, neutral adjustment.
    let safe = RecoveryCalculator::calculate(&checkin(10, 4, 4, 0, 5, 5, false), &config());
    assert_eq!(safe.score, 80);
    assert_eq!(safe.status, RecoveryStatus::Safe);

    // score 75: hooper 10.
    let warning = RecoveryCalculator::calculate(&checkin(10, 5, 5, 0, 5, 5, false), &config());
    assert_eq!(warning.score, 75);
    assert_eq!(warning.status, RecoveryStatus::Warning);

    // score 57.5 -> rounds to 58: hooper 17.
    let critical = RecoveryCalculator::calculate(&checkin(10, 9, 8, 0, 5, 5, false), &config());
    assert_eq!(critical.score, 58);
    assert_eq!(critical.status, RecoveryStatus::Critical);
}

#[test]
fn test_worst_checkin_clamps_to_zero() {
    let result = RecoveryCalculator::calculate(&checkin(0, 10, 10, 10, 0, 0, true), &config());
    assert_eq!(result.score, 0);
    assert_eq!(result.status, RecoveryStatus::Critical);
    assert!((result.hooper_index - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_calculator_and_evaluator_may_disagree() {
    // A check-in with a single warning-tier stress value still scores well:
    // the two algorithms intentionally answer different questions.
    use sentinela::config::intelligence::ClinicalRulesConfig;
    use sentinela::intelligence::{ClinicalEvaluator, Severity};
    use sentinela::models::BiologicalSex;

    let metrics = checkin(10, 0, 0, 8, 10, 10, false);
    let evaluation = ClinicalEvaluator::evaluate(
        Some(&metrics),
        BiologicalSex::Unknown,
        &ClinicalRulesConfig::default(),
    );
    let recovery = RecoveryCalculator::calculate(&metrics, &config());

    assert_eq!(evaluation.status, Severity::Warning);
    assert_eq!(recovery.status, RecoveryStatus::Safe);
}

#[test]
fn test_result_serializes_for_score_cards() {
    let result = RecoveryCalculator::calculate(&checkin(8, 2, 3, 2, 7, 6, false), &config());
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["score"].is_u64());
    assert!(json["hooper_index"].is_f64());
    assert!(matches!(
        json["status"].as_str(),
        Some("safe" | "warning" | "critical")
    ));
}
