// ABOUTME: Windowed per-metric averages with good/attention/critical labels for printable reports
// ABOUTME: Reuses the clinical rule thresholds so report labels can never drift from the evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Report Summarizer
//!
//! Builds the numbers behind one patient's printable summary table: each
//! subjective metric averaged over the check-ins inside the trailing window
//! and labelled Good / Attention / Critical.
//!
//! The labels come from the same `ClinicalRulesConfig` table the evaluator
//! reads — attention means the warning bound is crossed, critical means the
//! critical bound is crossed. Stress has no critical bound, so its worst
//! label is Attention. Body weight is averaged for display only and never
//! assessed.

use crate::config::intelligence::{ClinicalRulesConfig, IntelligenceConfig};
use crate::intelligence::recovery_calculator::RecoveryCalculator;
use chrono::{Duration, NaiveDate};
use sentinela_core::models::{CheckinMetrics, CheckinRecord};
use serde::{Deserialize, Serialize};

/// Label for one averaged metric in the report table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricAssessment {
    /// Inside the healthy range
    Good,
    /// Warning bound crossed
    Attention,
    /// Critical bound crossed
    Critical,
}

/// The subjective metrics that appear as report rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Sleep quality (higher = better)
    SleepQuality,
    /// Fatigue (higher = worse)
    Fatigue,
    /// Muscle soreness (higher = worse)
    MuscleSoreness,
    /// Stress (higher = worse, no critical bound)
    Stress,
    /// Mood (higher = better)
    Mood,
    /// Libido (higher = better)
    Libido,
}

impl MetricKind {
    /// Report row order
    pub const ALL: [Self; 6] = [
        Self::SleepQuality,
        Self::Fatigue,
        Self::MuscleSoreness,
        Self::Stress,
        Self::Mood,
        Self::Libido,
    ];

    /// Row label in the rendered table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SleepQuality => "Sleep quality",
            Self::Fatigue => "Fatigue",
            Self::MuscleSoreness => "Muscle soreness",
            Self::Stress => "Stress",
            Self::Mood => "Mood",
            Self::Libido => "Libido",
        }
    }

    /// This metric's submitted value on one check-in
    const fn value(self, metrics: &CheckinMetrics) -> Option<i32> {
        match self {
            Self::SleepQuality => metrics.qualidade_sono,
            Self::Fatigue => metrics.cansaco,
            Self::MuscleSoreness => metrics.dor_muscular,
            Self::Stress => metrics.estresse,
            Self::Mood => metrics.humor,
            Self::Libido => metrics.libido,
        }
    }

    /// Label an averaged value against the shared rule table
    fn assess(self, average: f64, rules: &ClinicalRulesConfig) -> MetricAssessment {
        let critical = &rules.critical;
        let warning = &rules.warning;
        match self {
            Self::SleepQuality => {
                at_most(average, critical.sleep_quality_max, warning.sleep_quality_max)
            }
            Self::Fatigue => at_least(average, Some(critical.fatigue_min), warning.fatigue_min),
            Self::MuscleSoreness => {
                at_least(average, Some(critical.soreness_min), warning.soreness_min)
            }
            Self::Stress => at_least(average, None, warning.stress_min),
            Self::Mood => at_most(average, critical.mood_max, warning.mood_max),
            Self::Libido => at_most(average, critical.libido_max, warning.libido_max),
        }
    }
}

/// Higher-is-better metric: low averages escalate
fn at_most(average: f64, critical_max: i32, warning_max: i32) -> MetricAssessment {
    if average <= f64::from(critical_max) {
        MetricAssessment::Critical
    } else if average <= f64::from(warning_max) {
        MetricAssessment::Attention
    } else {
        MetricAssessment::Good
    }
}

/// Higher-is-worse metric: high averages escalate
fn at_least(average: f64, critical_min: Option<i32>, warning_min: i32) -> MetricAssessment {
    if critical_min.is_some_and(|min| average >= f64::from(min)) {
        MetricAssessment::Critical
    } else if average >= f64::from(warning_min) {
        MetricAssessment::Attention
    } else {
        MetricAssessment::Good
    }
}

/// One averaged metric row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Which metric this row describes
    pub metric: MetricKind,
    /// Mean of the submitted values inside the window
    pub average: f64,
    /// How many check-ins carried this metric
    pub samples: usize,
    /// Good / Attention / Critical label for the average
    pub assessment: MetricAssessment,
}

/// The numbers behind one patient's printable summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// First date inside the window
    pub window_start: NaiveDate,
    /// Last date inside the window (the reference date)
    pub window_end: NaiveDate,
    /// Check-ins found inside the window
    pub checkin_count: usize,
    /// Averaged rows, in report order; metrics never submitted are omitted
    pub metrics: Vec<MetricSummary>,
    /// Mean body weight over the window, display only
    pub average_weight: Option<f64>,
    /// Mean recovery score over the windowed check-ins
    pub average_recovery_score: Option<f64>,
}

/// Report summarizer
pub struct ReportSummarizer;

impl ReportSummarizer {
    /// Summarize one patient's check-ins over the trailing window
    #[must_use]
    pub fn summarize(
        checkins: &[CheckinRecord],
        reference_date: NaiveDate,
        config: &IntelligenceConfig,
    ) -> ReportSummary {
        let window_start = reference_date - Duration::days(config.alerts.window_days);
        let recent: Vec<&CheckinRecord> = checkins
            .iter()
            .filter(|checkin| checkin.date >= window_start && checkin.date <= reference_date)
            .collect();

        let metrics = MetricKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let values: Vec<f64> = recent
                    .iter()
                    .filter_map(|checkin| kind.value(&checkin.metrics))
                    .map(f64::from)
                    .collect();
                mean(&values).map(|average| MetricSummary {
                    metric: kind,
                    average,
                    samples: values.len(),
                    assessment: kind.assess(average, &config.clinical),
                })
            })
            .collect();

        let weights: Vec<f64> = recent
            .iter()
            .filter_map(|checkin| checkin.metrics.peso)
            .collect();

        let scores: Vec<f64> = recent
            .iter()
            .map(|checkin| {
                f64::from(RecoveryCalculator::calculate(&checkin.metrics, &config.recovery).score)
            })
            .collect();

        ReportSummary {
            window_start,
            window_end: reference_date,
            checkin_count: recent.len(),
            metrics,
            average_weight: mean(&weights),
            average_recovery_score: mean(&scores),
        }
    }
}

/// Mean of a slice, `None` when empty
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
