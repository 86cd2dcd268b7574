// ABOUTME: Clinical status evaluation classifying check-ins into severity tiers
// ABOUTME: Layered critical/warning rule set with sex gating and explainable reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Clinical Status Evaluator
//!
//! Classifies a single check-in into a severity tier (Critical / Warning /
//! Safe / `NoData`) with the ordered list of triggering reasons, so every
//! alert the clinician sees is explainable.
//!
//! Rules are evaluated as an ordered list of (reason, predicate) pairs per
//! tier. Critical rules run first; if any fires, warning rules are not
//! consulted at all — reason lists never mix tiers. A metric that was not
//! submitted never satisfies its predicate: absence is unknown, not zero.
//! (The recovery calculator handles absence differently, on purpose — see
//! `recovery_calculator`.)
//!
//! The evaluator is a pure function. Out-of-range values are compared
//! numerically as-is; range validation belongs to the submitting form.

use crate::config::intelligence::ClinicalRulesConfig;
use sentinela_core::models::{BiologicalSex, CheckinMetrics};
use serde::{Deserialize, Serialize};

/// Severity tier of one check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// At least one critical rule fired; immediate attention
    Critical,
    /// At least one warning rule fired; monitoring advised
    Warning,
    /// A check-in exists and no rule fired
    Safe,
    /// No check-in to evaluate; non-actionable, distinct from Safe
    NoData,
}

impl Severity {
    /// Display color consumed by dashboard badges
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "orange",
            Self::Safe => "green",
            Self::NoData => "gray",
        }
    }

    /// Badge variant consumed by dashboard badges
    #[must_use]
    pub const fn badge_variant(self) -> &'static str {
        match self {
            Self::Critical => "destructive",
            Self::Warning => "secondary",
            Self::Safe => "default",
            Self::NoData => "outline",
        }
    }

    /// Metric category name carried on alert entries
    #[must_use]
    pub const fn metric_label(self) -> Option<&'static str> {
        match self {
            Self::Critical => Some("Overall Health"),
            Self::Warning => Some("Monitoring"),
            Self::Safe | Self::NoData => None,
        }
    }

    /// Sort rank for alert feeds: lower sorts first
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Safe => 2,
            Self::NoData => 3,
        }
    }
}

/// Reason a check-in was classified Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalReason {
    /// Injury or pain reported
    #[serde(rename = "lesao")]
    InjuryReported,
    /// Menstrual cycle disruption reported (female patients)
    #[serde(rename = "ciclo_alterado")]
    MenstrualCycleDisruption,
    /// Sleep quality at or below the critical bound
    #[serde(rename = "sono_critico")]
    SleepCritical,
    /// Fatigue at or above the critical bound
    #[serde(rename = "cansaco_critico")]
    FatigueCritical,
    /// Muscle soreness at or above the critical bound
    #[serde(rename = "dor_critica")]
    SorenessCritical,
    /// Mood at or below the critical bound
    #[serde(rename = "humor_critico")]
    MoodCritical,
    /// Libido at or below the critical bound
    #[serde(rename = "libido_critica")]
    LibidoCritical,
}

impl CriticalReason {
    /// Stable key identifying this reason in stored payloads
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InjuryReported => "lesao",
            Self::MenstrualCycleDisruption => "ciclo_alterado",
            Self::SleepCritical => "sono_critico",
            Self::FatigueCritical => "cansaco_critico",
            Self::SorenessCritical => "dor_critica",
            Self::MoodCritical => "humor_critico",
            Self::LibidoCritical => "libido_critica",
        }
    }

    /// Human-readable label used to build alert messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InjuryReported => "Injury reported",
            Self::MenstrualCycleDisruption => "Menstrual cycle disruption",
            Self::SleepCritical => "Critically low sleep quality",
            Self::FatigueCritical => "Extreme fatigue",
            Self::SorenessCritical => "Severe muscle soreness",
            Self::MoodCritical => "Severely low mood",
            Self::LibidoCritical => "Severely low libido",
        }
    }
}

/// Reason a check-in was classified Warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningReason {
    /// Sleep quality at or below the warning bound
    #[serde(rename = "sono_baixo")]
    SleepLow,
    /// Muscle soreness at or above the warning bound
    #[serde(rename = "dor_elevada")]
    SorenessElevated,
    /// Fatigue at or above the warning bound
    #[serde(rename = "cansaco_elevado")]
    FatigueElevated,
    /// Stress at or above the warning bound
    #[serde(rename = "estresse_elevado")]
    StressElevated,
    /// Mood at or below the warning bound
    #[serde(rename = "humor_baixo")]
    MoodLow,
    /// Libido at or below the warning bound
    #[serde(rename = "libido_baixa")]
    LibidoLow,
    /// Morning erection explicitly reported absent (male patients)
    #[serde(rename = "sem_erecao_matinal")]
    NoMorningErection,
}

impl WarningReason {
    /// Stable key identifying this reason in stored payloads
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SleepLow => "sono_baixo",
            Self::SorenessElevated => "dor_elevada",
            Self::FatigueElevated => "cansaco_elevado",
            Self::StressElevated => "estresse_elevado",
            Self::MoodLow => "humor_baixo",
            Self::LibidoLow => "libido_baixa",
            Self::NoMorningErection => "sem_erecao_matinal",
        }
    }

    /// Human-readable label used to build alert messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SleepLow => "Low sleep quality",
            Self::SorenessElevated => "Elevated muscle soreness",
            Self::FatigueElevated => "Elevated fatigue",
            Self::StressElevated => "High stress",
            Self::MoodLow => "Low mood",
            Self::LibidoLow => "Low libido",
            Self::NoMorningErection => "Absent morning erection",
        }
    }
}

/// Result of evaluating one check-in
///
/// Invariants: `critical_reasons` is non-empty iff `status` is Critical;
/// `warning_reasons` is non-empty iff `status` is Warning; the two lists are
/// never both non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalEvaluation {
    /// Severity tier
    pub status: Severity,
    /// Critical reasons in rule order; empty unless status is Critical
    pub critical_reasons: Vec<CriticalReason>,
    /// Warning reasons in rule order; empty unless status is Warning
    pub warning_reasons: Vec<WarningReason>,
}

impl ClinicalEvaluation {
    /// The evaluation of a patient with no check-in at all
    #[must_use]
    pub const fn no_data() -> Self {
        Self {
            status: Severity::NoData,
            critical_reasons: Vec::new(),
            warning_reasons: Vec::new(),
        }
    }

    /// Comma-joined human-readable labels of the triggering reasons
    ///
    /// Empty for Safe and `NoData` evaluations.
    #[must_use]
    pub fn reasons_text(&self) -> String {
        match self.status {
            Severity::Critical => self
                .critical_reasons
                .iter()
                .map(|reason| reason.label())
                .collect::<Vec<_>>()
                .join(", "),
            Severity::Warning => self
                .warning_reasons
                .iter()
                .map(|reason| reason.label())
                .collect::<Vec<_>>()
                .join(", "),
            Severity::Safe | Severity::NoData => String::new(),
        }
    }
}

/// Clinical status evaluator
pub struct ClinicalEvaluator;

impl ClinicalEvaluator {
    /// Classify one check-in into a severity tier with explainable reasons
    ///
    /// `None` metrics means no check-in exists and yields `NoData`. A present
    /// check-in with null fields simply skips the rules those fields drive.
    /// Pure function; never fails.
    #[must_use]
    pub fn evaluate(
        metrics: Option<&CheckinMetrics>,
        sex: BiologicalSex,
        config: &ClinicalRulesConfig,
    ) -> ClinicalEvaluation {
        let Some(metrics) = metrics else {
            return ClinicalEvaluation::no_data();
        };

        let critical_reasons = Self::critical_reasons(metrics, sex, config);
        if !critical_reasons.is_empty() {
            // Critical dominates: warning rules are not consulted at all,
            // even those that would also be true.
            return ClinicalEvaluation {
                status: Severity::Critical,
                critical_reasons,
                warning_reasons: Vec::new(),
            };
        }

        let warning_reasons = Self::warning_reasons(metrics, sex, config);
        let status = if warning_reasons.is_empty() {
            Severity::Safe
        } else {
            Severity::Warning
        };

        ClinicalEvaluation {
            status,
            critical_reasons: Vec::new(),
            warning_reasons,
        }
    }

    /// Critical rules in display order
    fn critical_reasons(
        metrics: &CheckinMetrics,
        sex: BiologicalSex,
        config: &ClinicalRulesConfig,
    ) -> Vec<CriticalReason> {
        let t = &config.critical;
        let rules = [
            (
                CriticalReason::InjuryReported,
                metrics.lesao == Some(true),
            ),
            (
                CriticalReason::MenstrualCycleDisruption,
                sex == BiologicalSex::Female && metrics.ciclo_menstrual_alterado == Some(true),
            ),
            (
                CriticalReason::SleepCritical,
                at_most(metrics.qualidade_sono, t.sleep_quality_max),
            ),
            (
                CriticalReason::FatigueCritical,
                at_least(metrics.cansaco, t.fatigue_min),
            ),
            (
                CriticalReason::SorenessCritical,
                at_least(metrics.dor_muscular, t.soreness_min),
            ),
            (
                CriticalReason::MoodCritical,
                at_most(metrics.humor, t.mood_max),
            ),
            (
                CriticalReason::LibidoCritical,
                at_most(metrics.libido, t.libido_max),
            ),
        ];

        rules
            .into_iter()
            .filter_map(|(reason, fired)| fired.then_some(reason))
            .collect()
    }

    /// Warning rules in display order; only consulted when nothing critical fired
    fn warning_reasons(
        metrics: &CheckinMetrics,
        sex: BiologicalSex,
        config: &ClinicalRulesConfig,
    ) -> Vec<WarningReason> {
        let t = &config.warning;
        let rules = [
            (
                WarningReason::SleepLow,
                at_most(metrics.qualidade_sono, t.sleep_quality_max),
            ),
            (
                WarningReason::SorenessElevated,
                at_least(metrics.dor_muscular, t.soreness_min),
            ),
            (
                WarningReason::FatigueElevated,
                at_least(metrics.cansaco, t.fatigue_min),
            ),
            (
                WarningReason::StressElevated,
                at_least(metrics.estresse, t.stress_min),
            ),
            (
                WarningReason::MoodLow,
                at_most(metrics.humor, t.mood_max),
            ),
            (
                WarningReason::LibidoLow,
                at_most(metrics.libido, t.libido_max),
            ),
            (
                // Explicit false only: an absent answer is unknown, not "no".
                WarningReason::NoMorningErection,
                sex == BiologicalSex::Male && metrics.erecao_matinal == Some(false),
            ),
        ];

        rules
            .into_iter()
            .filter_map(|(reason, fired)| fired.then_some(reason))
            .collect()
    }
}

/// A higher-is-better metric fires at or below its bound; absent never fires
fn at_most(value: Option<i32>, limit: i32) -> bool {
    value.is_some_and(|v| v <= limit)
}

/// A higher-is-worse metric fires at or above its bound; absent never fires
fn at_least(value: Option<i32>, limit: i32) -> bool {
    value.is_some_and(|v| v >= limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ClinicalRulesConfig {
        ClinicalRulesConfig::default()
    }

    #[test]
    fn test_no_checkin_is_no_data_not_safe() {
        let evaluation = ClinicalEvaluator::evaluate(None, BiologicalSex::Unknown, &rules());
        assert_eq!(evaluation.status, Severity::NoData);
        assert!(evaluation.critical_reasons.is_empty());
        assert!(evaluation.warning_reasons.is_empty());
    }

    #[test]
    fn test_empty_checkin_is_safe() {
        let metrics = CheckinMetrics::default();
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Female, &rules());
        assert_eq!(evaluation.status, Severity::Safe);
    }

    #[test]
    fn test_critical_suppresses_warning_rules_entirely() {
        // Injury plus a warning-level sleep value: the warning list must stay
        // empty even though the sleep rule would fire.
        let metrics = CheckinMetrics {
            lesao: Some(true),
            qualidade_sono: Some(5),
            ..CheckinMetrics::default()
        };
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        assert_eq!(evaluation.status, Severity::Critical);
        assert_eq!(
            evaluation.critical_reasons,
            vec![CriticalReason::InjuryReported]
        );
        assert!(evaluation.warning_reasons.is_empty());
    }

    #[test]
    fn test_critical_reasons_keep_rule_order() {
        let metrics = CheckinMetrics {
            qualidade_sono: Some(2),
            cansaco: Some(10),
            lesao: Some(true),
            ..CheckinMetrics::default()
        };
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        assert_eq!(
            evaluation.critical_reasons,
            vec![
                CriticalReason::InjuryReported,
                CriticalReason::SleepCritical,
                CriticalReason::FatigueCritical,
            ]
        );
    }

    #[test]
    fn test_sleep_boundary_between_tiers() {
        let critical = CheckinMetrics {
            qualidade_sono: Some(3),
            ..CheckinMetrics::default()
        };
        let warning = CheckinMetrics {
            qualidade_sono: Some(4),
            ..CheckinMetrics::default()
        };
        assert_eq!(
            ClinicalEvaluator::evaluate(Some(&critical), BiologicalSex::Unknown, &rules()).status,
            Severity::Critical
        );
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&warning), BiologicalSex::Unknown, &rules());
        assert_eq!(evaluation.status, Severity::Warning);
        assert_eq!(evaluation.warning_reasons, vec![WarningReason::SleepLow]);
    }

    #[test]
    fn test_cycle_disruption_gated_to_female() {
        let metrics = CheckinMetrics {
            ciclo_menstrual_alterado: Some(true),
            ..CheckinMetrics::default()
        };
        let female = ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Female, &rules());
        assert_eq!(female.status, Severity::Critical);
        assert_eq!(
            female.critical_reasons,
            vec![CriticalReason::MenstrualCycleDisruption]
        );

        let male = ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Male, &rules());
        assert_eq!(male.status, Severity::Safe);
        let unknown =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        assert_eq!(unknown.status, Severity::Safe);
    }

    #[test]
    fn test_morning_erection_fires_on_explicit_false_for_males_only() {
        let absent = CheckinMetrics {
            erecao_matinal: Some(false),
            ..CheckinMetrics::default()
        };
        let male = ClinicalEvaluator::evaluate(Some(&absent), BiologicalSex::Male, &rules());
        assert_eq!(male.status, Severity::Warning);
        assert_eq!(
            male.warning_reasons,
            vec![WarningReason::NoMorningErection]
        );

        // Null is unknown, never a signal
        let unanswered = CheckinMetrics::default();
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&unanswered), BiologicalSex::Male, &rules());
        assert_eq!(evaluation.status, Severity::Safe);

        let female = ClinicalEvaluator::evaluate(Some(&absent), BiologicalSex::Female, &rules());
        assert_eq!(female.status, Severity::Safe);
    }

    #[test]
    fn test_absent_fields_never_fire_rules() {
        // Sleep missing entirely: neither the <=3 nor the <=5 rule may treat
        // it as zero.
        let metrics = CheckinMetrics {
            estresse: Some(8),
            ..CheckinMetrics::default()
        };
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        assert_eq!(evaluation.status, Severity::Warning);
        assert_eq!(
            evaluation.warning_reasons,
            vec![WarningReason::StressElevated]
        );
    }

    #[test]
    fn test_out_of_range_values_compared_as_is() {
        let metrics = CheckinMetrics {
            qualidade_sono: Some(15),
            humor: Some(-3),
            ..CheckinMetrics::default()
        };
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        // Sleep 15 fires nothing; mood -3 is at or below 2, critical.
        assert_eq!(evaluation.status, Severity::Critical);
        assert_eq!(evaluation.critical_reasons, vec![CriticalReason::MoodCritical]);
    }

    #[test]
    fn test_reasons_text_joins_labels() {
        let metrics = CheckinMetrics {
            cansaco: Some(7),
            estresse: Some(9),
            ..CheckinMetrics::default()
        };
        let evaluation =
            ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Unknown, &rules());
        assert_eq!(evaluation.reasons_text(), "Elevated fatigue, High stress");
    }

    #[test]
    fn test_display_contract_mapping() {
        assert_eq!(Severity::Critical.color(), "red");
        assert_eq!(Severity::Warning.badge_variant(), "secondary");
        assert_eq!(Severity::NoData.color(), "gray");
        assert_eq!(Severity::Critical.metric_label(), Some("Overall Health"));
        assert_eq!(Severity::Warning.metric_label(), Some("Monitoring"));
        assert_eq!(Severity::Safe.metric_label(), None);
    }

    #[test]
    fn test_reason_keys_are_stable() {
        assert_eq!(CriticalReason::InjuryReported.key(), "lesao");
        assert_eq!(CriticalReason::SleepCritical.key(), "sono_critico");
        assert_eq!(WarningReason::NoMorningErection.key(), "sem_erecao_matinal");
        let json = serde_json::to_string(&CriticalReason::SleepCritical).unwrap();
        assert_eq!(json, r#""sono_critico""#);
    }
}
