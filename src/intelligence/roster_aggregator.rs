// ABOUTME: Roster-wide aggregation producing alert feeds and dashboard KPI counts
// ABOUTME: Trailing-window filtering, latest check-in selection, tier-then-recency ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Roster Aggregator
//!
//! Turns a collection of patients — each with an unordered check-in history —
//! into the set of patients currently requiring attention, plus the summary
//! counts behind dashboard KPI tiles.
//!
//! Only check-ins dated within the trailing window count; the latest of
//! those (greatest calendar date, first-seen wins ties) is evaluated with
//! the patient's sex. `NoData` and Safe evaluations produce no alert —
//! `NoData` is non-actionable by contract and must never inflate the
//! critical count.
//!
//! The aggregator only reads the snapshot it is given and allocates fresh
//! result objects, so concurrent runs over different snapshots never
//! interfere.

use crate::config::intelligence::{AlertWindowConfig, ClinicalRulesConfig};
use crate::intelligence::clinical_evaluator::{ClinicalEvaluator, Severity};
use chrono::{Duration, NaiveDate};
use sentinela_core::models::{CheckinRecord, Patient};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One at-risk patient in the alert feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEntry {
    /// Patient identifier from storage
    pub patient_id: String,
    /// Patient display name
    pub patient_name: String,
    /// Severity of the latest recent check-in (Critical or Warning only)
    pub severity: Severity,
    /// Comma-joined labels of the triggering reasons
    pub reasons_text: String,
    /// Metric category name ("Overall Health" / "Monitoring")
    pub metric_label: String,
    /// Date of the evaluated check-in
    pub checkin_date: NaiveDate,
}

/// Dashboard KPI counts over one aggregation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Patients in the roster
    pub total_patients: usize,
    /// Patients with at least one check-in inside the window
    pub responded: usize,
    /// `responded / total_patients`, 0.0 for an empty roster
    pub response_rate: f64,
    /// Patients whose latest recent check-in evaluated Critical
    pub critical_count: usize,
}

/// Roster aggregator
pub struct RosterAggregator;

impl RosterAggregator {
    /// Build the alert feed for a roster as of `reference_date`
    ///
    /// Alerts are sorted all Critical before all Warning, most recent
    /// check-in first within each tier.
    #[must_use]
    pub fn aggregate_alerts(
        patients: &[Patient],
        reference_date: NaiveDate,
        window: &AlertWindowConfig,
        rules: &ClinicalRulesConfig,
    ) -> Vec<AlertEntry> {
        let mut alerts: Vec<AlertEntry> = patients
            .iter()
            .filter_map(|patient| Self::alert_for_patient(patient, reference_date, window, rules))
            .collect();

        alerts.sort_by(|a, b| {
            a.severity
                .priority()
                .cmp(&b.severity.priority())
                .then_with(|| b.checkin_date.cmp(&a.checkin_date))
        });

        alerts
    }

    /// Summary counts for dashboard KPI tiles
    #[must_use]
    pub fn summarize(
        patients: &[Patient],
        reference_date: NaiveDate,
        window: &AlertWindowConfig,
        rules: &ClinicalRulesConfig,
    ) -> RosterSummary {
        let total_patients = patients.len();
        let mut responded = 0_usize;
        let mut critical_count = 0_usize;

        for patient in patients {
            let Some(latest) = Self::latest_recent_checkin(patient, reference_date, window) else {
                continue;
            };
            responded += 1;

            let evaluation =
                ClinicalEvaluator::evaluate(Some(&latest.metrics), patient.sex, rules);
            if evaluation.status == Severity::Critical {
                critical_count += 1;
            }
        }

        let response_rate = if total_patients == 0 {
            0.0
        } else {
            responded as f64 / total_patients as f64
        };

        RosterSummary {
            total_patients,
            responded,
            response_rate,
            critical_count,
        }
    }

    /// The latest check-in inside the trailing window, if any
    ///
    /// Window bounds are inclusive calendar dates. Ties on the date keep the
    /// first record seen, which is deterministic for a given snapshot.
    #[must_use]
    pub fn latest_recent_checkin<'a>(
        patient: &'a Patient,
        reference_date: NaiveDate,
        window: &AlertWindowConfig,
    ) -> Option<&'a CheckinRecord> {
        let window_start = reference_date - Duration::days(window.window_days);

        patient
            .checkins
            .iter()
            .filter(|checkin| checkin.date >= window_start && checkin.date <= reference_date)
            .fold(None, |latest: Option<&CheckinRecord>, candidate| {
                match latest {
                    Some(current) if candidate.date > current.date => Some(candidate),
                    Some(current) => Some(current),
                    None => Some(candidate),
                }
            })
    }

    /// Evaluate one patient's latest recent check-in into an alert entry
    fn alert_for_patient(
        patient: &Patient,
        reference_date: NaiveDate,
        window: &AlertWindowConfig,
        rules: &ClinicalRulesConfig,
    ) -> Option<AlertEntry> {
        let Some(latest) = Self::latest_recent_checkin(patient, reference_date, window) else {
            debug!(
                patient_id = %patient.id,
                window_days = window.window_days,
                "no check-in inside window, patient skipped"
            );
            return None;
        };

        let evaluation = ClinicalEvaluator::evaluate(Some(&latest.metrics), patient.sex, rules);
        let metric_label = evaluation.status.metric_label()?;

        Some(AlertEntry {
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            severity: evaluation.status,
            reasons_text: evaluation.reasons_text(),
            metric_label: metric_label.to_owned(),
            checkin_date: latest.date,
        })
    }
}
