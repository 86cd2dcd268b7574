// ABOUTME: Integration tests for the printable report summarizer
// ABOUTME: Verifies report labels stay consistent with the evaluator's thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

use chrono::NaiveDate;
use sentinela::config::intelligence::IntelligenceConfig;
use sentinela::intelligence::{MetricAssessment, MetricKind, ReportSummarizer};
use sentinela::models::{CheckinMetrics, CheckinRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn checkin(on: NaiveDate, metrics: CheckinMetrics) -> CheckinRecord {
    CheckinRecord { date: on, metrics }
}

#[test]
fn test_report_rows_cover_submitted_metrics_in_order() {
    let reference = date(2025, 6, 12);
    let checkins = vec![
        checkin(
            date(2025, 6, 9),
            CheckinMetrics {
                qualidade_sono: Some(4),
                cansaco: Some(8),
                estresse: Some(9),
                humor: Some(6),
                ..CheckinMetrics::default()
            },
        ),
        checkin(
            date(2025, 6, 11),
            CheckinMetrics {
                qualidade_sono: Some(6),
                cansaco: Some(6),
                estresse: Some(7),
                humor: Some(8),
                peso: Some(74.0),
                ..CheckinMetrics::default()
            },
        ),
    ];

    let summary = ReportSummarizer::summarize(&checkins, reference, &IntelligenceConfig::default());
    assert_eq!(summary.checkin_count, 2);

    let kinds: Vec<MetricKind> = summary.metrics.iter().map(|row| row.metric).collect();
    assert_eq!(
        kinds,
        vec![
            MetricKind::SleepQuality,
            MetricKind::Fatigue,
            MetricKind::Stress,
            MetricKind::Mood,
        ]
    );

    // Sleep averages 5.0: at the warning bound, so Attention.
    let sleep = &summary.metrics[0];
    assert!((sleep.average - 5.0).abs() < f64::EPSILON);
    assert_eq!(sleep.assessment, MetricAssessment::Attention);

    // Fatigue averages 7.0: warning bound crossed, Attention.
    let fatigue = &summary.metrics[1];
    assert_eq!(fatigue.assessment, MetricAssessment::Attention);

    // Stress averages 8.0: Attention is its worst possible label.
    let stress = &summary.metrics[2];
    assert_eq!(stress.assessment, MetricAssessment::Attention);

    // Mood averages 7.0: healthy.
    let mood = &summary.metrics[3];
    assert_eq!(mood.assessment, MetricAssessment::Good);

    assert_eq!(summary.average_weight, Some(74.0));
}

#[test]
fn test_report_thresholds_match_the_evaluator() {
    // An average sitting exactly on the critical bound must label Critical,
    // the same way a single check-in at that value evaluates Critical.
    let reference = date(2025, 6, 12);
    let checkins = vec![
        checkin(
            date(2025, 6, 9),
            CheckinMetrics {
                qualidade_sono: Some(2),
                ..CheckinMetrics::default()
            },
        ),
        checkin(
            date(2025, 6, 10),
            CheckinMetrics {
                qualidade_sono: Some(4),
                ..CheckinMetrics::default()
            },
        ),
    ];

    let summary = ReportSummarizer::summarize(&checkins, reference, &IntelligenceConfig::default());
    let sleep = &summary.metrics[0];
    assert!((sleep.average - 3.0).abs() < f64::EPSILON);
    assert_eq!(sleep.assessment, MetricAssessment::Critical);
}

#[test]
fn test_average_recovery_score_spans_the_window() {
    let reference = date(2025, 6, 12);
    let checkins = vec![
        // Neutral check-in scores 50.
        checkin(
            date(2025, 6, 9),
            CheckinMetrics {
                qualidade_sono: Some(5),
                cansaco: Some(5),
                dor_muscular: Some(5),
                estresse: Some(5),
                humor: Some(5),
                libido: Some(5),
                lesao: Some(false),
                ..CheckinMetrics::default()
            },
        ),
        // Perfect check-in scores 100.
        checkin(
            date(2025, 6, 11),
            CheckinMetrics {
                qualidade_sono: Some(10),
                cansaco: Some(0),
                dor_muscular: Some(0),
                estresse: Some(0),
                humor: Some(10),
                libido: Some(10),
                lesao: Some(false),
                ..CheckinMetrics::default()
            },
        ),
    ];

    let summary = ReportSummarizer::summarize(&checkins, reference, &IntelligenceConfig::default());
    assert_eq!(summary.average_recovery_score, Some(75.0));
}

#[test]
fn test_window_bounds_match_the_aggregator() {
    let reference = date(2025, 6, 12);
    let inside = checkin(
        date(2025, 6, 5),
        CheckinMetrics {
            humor: Some(10),
            ..CheckinMetrics::default()
        },
    );
    let outside = checkin(
        date(2025, 6, 4),
        CheckinMetrics {
            humor: Some(0),
            ..CheckinMetrics::default()
        },
    );

    let summary = ReportSummarizer::summarize(
        &[inside, outside],
        reference,
        &IntelligenceConfig::default(),
    );
    assert_eq!(summary.checkin_count, 1);
    assert_eq!(summary.window_start, date(2025, 6, 5));
    assert_eq!(summary.window_end, reference);
}
