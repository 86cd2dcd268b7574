// ABOUTME: Threshold configuration for clinical rules, recovery scoring, and alert windows
// ABOUTME: Defaults carry the published rule table; deployments may override from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Intelligence Configuration
//!
//! Threshold tables for the clinical status evaluator, the Hooper-Index
//! recovery calculator, and the roster aggregation window.
//!
//! The defaults are the values the product ships with. They are kept in one
//! place so the evaluator and the report summarizer can never disagree about
//! where "attention" ends and "critical" begins.
//!
//! # Scientific References
//!
//! - Hooper, S.L., & Mackinnon, L.T. (1995). Monitoring overtraining in
//!   athletes: recommendations. *Sports Medicine*, 20(5), 321-327.
//!   <https://doi.org/10.2165/00007256-199520050-00003>

use sentinela_core::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Umbrella configuration for the whole engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Clinical severity rule thresholds
    pub clinical: ClinicalRulesConfig,
    /// Recovery score formula parameters
    pub recovery: RecoveryScoringConfig,
    /// Trailing window for alert feeds and reports
    pub alerts: AlertWindowConfig,
}

impl IntelligenceConfig {
    /// Parse a configuration override from a JSON document
    ///
    /// Sections left out of the document keep their shipped defaults.
    ///
    /// # Errors
    /// Returns a serialization error when the document is not valid JSON
    /// for this shape
    pub fn from_json(text: &str) -> AppResult<Self> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }
}

/// Clinical severity rule thresholds for both tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRulesConfig {
    /// Critical-tier thresholds
    pub critical: CriticalThresholds,
    /// Warning-tier thresholds
    pub warning: WarningThresholds,
}

/// Thresholds that classify a check-in as Critical
///
/// "max" fields fire at-or-below (metrics where higher is better), "min"
/// fields fire at-or-above (metrics where higher is worse). A missing metric
/// value never fires its rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalThresholds {
    /// Sleep quality at or below this value is critical
    pub sleep_quality_max: i32,
    /// Fatigue at or above this value is critical
    pub fatigue_min: i32,
    /// Muscle soreness at or above this value is critical
    pub soreness_min: i32,
    /// Mood at or below this value is critical
    pub mood_max: i32,
    /// Libido at or below this value is critical
    pub libido_max: i32,
}

/// Thresholds that classify a check-in as Warning
///
/// Only consulted when no critical rule fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningThresholds {
    /// Sleep quality at or below this value warrants monitoring
    pub sleep_quality_max: i32,
    /// Muscle soreness at or above this value warrants monitoring
    pub soreness_min: i32,
    /// Fatigue at or above this value warrants monitoring
    pub fatigue_min: i32,
    /// Stress at or above this value warrants monitoring
    pub stress_min: i32,
    /// Mood at or below this value warrants monitoring
    pub mood_max: i32,
    /// Libido at or below this value warrants monitoring
    pub libido_max: i32,
}

/// Recovery score formula parameters (Hooper Index method)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryScoringConfig {
    /// Neutral substitute for missing numeric fields
    pub neutral_midpoint: f64,
    /// Top of the subjective metric scale (sleep quality is inverted against it)
    pub scale_max: f64,
    /// Points subtracted per Hooper Index unit
    pub hooper_multiplier: f64,
    /// Weight of mood deviation from the midpoint
    pub mood_weight: f64,
    /// Weight of libido deviation from the midpoint
    pub libido_weight: f64,
    /// Flat score penalty when an injury is reported
    pub injury_penalty: f64,
    /// Score ceiling for an injured patient, applied after the penalty
    pub injured_score_ceiling: f64,
    /// Scores at or above this are Safe
    pub safe_threshold: u8,
    /// Scores at or above this (but below safe) are Warning; below is Critical
    pub warning_threshold: u8,
}

/// Trailing calendar-date window for alert feeds and report summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertWindowConfig {
    /// Window length in days; a check-in dated within
    /// `[reference - window_days, reference]` (inclusive) counts as recent
    pub window_days: i64,
}

impl Default for CriticalThresholds {
    fn default() -> Self {
        Self {
            sleep_quality_max: 3,
            fatigue_min: 9,
            soreness_min: 9,
            mood_max: 2,
            libido_max: 2,
        }
    }
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            sleep_quality_max: 5,
            soreness_min: 7,
            fatigue_min: 7,
            stress_min: 8,
            mood_max: 4,
            libido_max: 5,
        }
    }
}

impl Default for RecoveryScoringConfig {
    fn default() -> Self {
        Self {
            neutral_midpoint: 5.0,
            scale_max: 10.0,
            hooper_multiplier: 2.5,
            mood_weight: 2.0,
            libido_weight: 1.0,
            injury_penalty: 12.0,
            injured_score_ceiling: 70.0,
            safe_threshold: 80,
            warning_threshold: 60,
        }
    }
}

impl Default for AlertWindowConfig {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}
