// ABOUTME: Hooper Index recovery scoring producing a continuous 0-100 wellness score
// ABOUTME: Neutral-midpoint defaulting with clamped injury penalty and fixed status tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Recovery Score Calculator
//!
//! Computes a continuous 0-100 recovery score from one check-in using the
//! Hooper Index method, for trend display. This is intentionally a separate
//! algorithm from the clinical evaluator's discrete tiers — the two may
//! disagree about the same check-in, and that is expected: a continuous
//! trend score and a rule-based alert tier answer different questions.
//!
//! Unlike the evaluator, this calculator must always produce a score, so
//! missing numeric fields default to the neutral midpoint and missing
//! booleans to `false`. Keep that policy here and nowhere else.
//!
//! # Scientific References
//!
//! - Hooper, S.L., & Mackinnon, L.T. (1995). Monitoring overtraining in
//!   athletes: recommendations. *Sports Medicine*, 20(5), 321-327.
//!   <https://doi.org/10.2165/00007256-199520050-00003>

use crate::config::intelligence::RecoveryScoringConfig;
use sentinela_core::models::CheckinMetrics;
use serde::{Deserialize, Serialize};

/// Recovery status tier, a pure function of the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Score at or above the safe threshold
    Safe,
    /// Score between the warning and safe thresholds
    Warning,
    /// Score below the warning threshold
    Critical,
}

impl RecoveryStatus {
    /// Display color, consistent with the clinical severity mapping
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Safe => "green",
            Self::Warning => "orange",
            Self::Critical => "red",
        }
    }
}

/// Result of scoring one check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryResult {
    /// Recovery score, 0-100, rounded to the nearest integer
    pub score: u8,
    /// Status tier derived from the score via fixed thresholds
    pub status: RecoveryStatus,
    /// Hooper Index (fatigue + stress + soreness + inverted sleep), unrounded
    pub hooper_index: f64,
}

/// Recovery score calculator
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Calculate the recovery score for one check-in
    ///
    /// Missing numeric fields are substituted with the neutral midpoint and
    /// a missing injury flag with `false`, so a result is always produced.
    /// An injured patient takes a flat penalty and is then capped at the
    /// injured ceiling regardless of how high the score was before — an
    /// injured patient can never be reported as fully safe.
    ///
    /// Pure function; never fails.
    #[must_use]
    pub fn calculate(metrics: &CheckinMetrics, config: &RecoveryScoringConfig) -> RecoveryResult {
        let sleep_quality = numeric_or_neutral(metrics.qualidade_sono, config.neutral_midpoint);
        let fatigue = numeric_or_neutral(metrics.cansaco, config.neutral_midpoint);
        let soreness = numeric_or_neutral(metrics.dor_muscular, config.neutral_midpoint);
        let stress = numeric_or_neutral(metrics.estresse, config.neutral_midpoint);
        let mood = numeric_or_neutral(metrics.humor, config.neutral_midpoint);
        let libido = numeric_or_neutral(metrics.libido, config.neutral_midpoint);
        let injured = metrics.lesao.unwrap_or(false);

        let hooper_index = fatigue + stress + soreness + (config.scale_max - sleep_quality);
        let base_score = hooper_index.mul_add(-config.hooper_multiplier, 100.0);

        // Mood weighs twice libido, both centered at the neutral midpoint.
        let adjustment = (mood - config.neutral_midpoint).mul_add(
            config.mood_weight,
            (libido - config.neutral_midpoint) * config.libido_weight,
        );

        let mut raw_score = base_score + adjustment;
        if injured {
            raw_score = (raw_score - config.injury_penalty).min(config.injured_score_ceiling);
        }

        let score = raw_score.clamp(0.0, 100.0).round() as u8;

        RecoveryResult {
            score,
            status: Self::categorize(score, config),
            hooper_index,
        }
    }

    /// Map a score to its status tier
    #[must_use]
    pub const fn categorize(score: u8, config: &RecoveryScoringConfig) -> RecoveryStatus {
        if score >= config.safe_threshold {
            RecoveryStatus::Safe
        } else if score >= config.warning_threshold {
            RecoveryStatus::Warning
        } else {
            RecoveryStatus::Critical
        }
    }
}

/// The calculator's defaulting policy: absent numerics become the midpoint
fn numeric_or_neutral(value: Option<i32>, neutral: f64) -> f64 {
    value.map_or(neutral, f64::from)
}
