// ABOUTME: Weekly subjective well-being check-in value objects
// ABOUTME: CheckinMetrics and CheckinRecord with flexible date string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for flexible date parsing
/// Accepts both full ISO 8601 datetime ("2025-11-26T00:00:00Z") and simple date ("2025-11-26")
fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    // Try full ISO 8601 datetime first
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.date_naive());
    }

    // Try ISO 8601 without timezone
    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    // Try simple date format (YYYY-MM-DD)
    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(serde::de::Error::custom(format!(
        "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
    )))
}

/// One submitted check-in's subjective metric values
///
/// All 0-10 fields are either a finite integer or absent. Absence means
/// "unknown": the clinical evaluator skips the corresponding rule entirely,
/// while the recovery calculator substitutes the neutral midpoint. Those two
/// policies are intentionally different and must not be unified.
///
/// Out-of-range values (negative, above 10) are accepted and compared
/// numerically as-is; range validation belongs to the submitting form layer.
///
/// Field names match the stored check-in row names exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckinMetrics {
    /// Sleep quality, 0-10, higher = better
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualidade_sono: Option<i32>,

    /// Fatigue, 0-10, higher = worse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cansaco: Option<i32>,

    /// Muscle soreness, 0-10, higher = worse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dor_muscular: Option<i32>,

    /// Stress, 0-10, higher = worse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estresse: Option<i32>,

    /// Mood, 0-10, higher = better
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humor: Option<i32>,

    /// Libido, 0-10, higher = better
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libido: Option<i32>,

    /// Morning erection present; meaningful only when sex = male
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erecao_matinal: Option<bool>,

    /// Injury or pain reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesao: Option<bool>,

    /// Menstrual cycle disruption; meaningful only when sex = female
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_menstrual_alterado: Option<bool>,

    /// Body weight in kg; carried for display only, never used by risk rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso: Option<f64>,
}

/// One stored check-in row: metric values plus the submission date
///
/// The date is a calendar date — the aggregation window compares dates, not
/// timestamps — parsed flexibly from either a plain date string or a full
/// ISO 8601 datetime, which is how hosted backends tend to return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Submission date of this check-in
    #[serde(rename = "data", deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,

    /// The submitted metric values
    #[serde(flatten)]
    pub metrics: CheckinMetrics,
}
