// ABOUTME: Subcommand implementations for the sentinela CLI
// ABOUTME: Reads JSON input files, invokes the engine, prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use sentinela::config::intelligence::IntelligenceConfig;
use sentinela::intelligence::{
    ClinicalEvaluator, RecoveryCalculator, ReportSummarizer, RosterAggregator,
};
use sentinela::models::{BiologicalSex, CheckinMetrics, CheckinRecord, Patient};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Classify one check-in and print the evaluation
pub fn evaluate(input: &Path, sex: Option<&str>, config: &IntelligenceConfig) -> Result<()> {
    let metrics = read_checkin(input)?;
    let sex = BiologicalSex::from_code(sex);
    let evaluation = ClinicalEvaluator::evaluate(Some(&metrics), sex, &config.clinical);
    let reasons_text = evaluation.reasons_text();
    print_json(&json!({
        "status": evaluation.status,
        "color": evaluation.status.color(),
        "badge_variant": evaluation.status.badge_variant(),
        "critical_reasons": evaluation.critical_reasons,
        "warning_reasons": evaluation.warning_reasons,
        "reasons_text": reasons_text,
    }))
}

/// Score one check-in and print the recovery result
pub fn score(input: &Path, config: &IntelligenceConfig) -> Result<()> {
    let metrics = read_checkin(input)?;
    let result = RecoveryCalculator::calculate(&metrics, &config.recovery);
    print_json(&json!({
        "score": result.score,
        "status": result.status,
        "color": result.status.color(),
        "hooper_index": result.hooper_index,
    }))
}

/// Build the alert feed and summary counts for a roster file
pub fn alerts(input: &Path, reference_date: Option<&str>, config: &IntelligenceConfig) -> Result<()> {
    let roster = read_roster(input)?;
    let reference = parse_reference_date(reference_date)?;
    debug!(patients = roster.len(), %reference, "aggregating roster");

    let alerts =
        RosterAggregator::aggregate_alerts(&roster, reference, &config.alerts, &config.clinical);
    let summary = RosterAggregator::summarize(&roster, reference, &config.alerts, &config.clinical);

    print_json(&json!({
        "reference_date": reference,
        "alerts": alerts,
        "summary": summary,
    }))
}

/// Summarize one patient's recent metrics for a printable report
pub fn report(
    input: &Path,
    patient_id: &str,
    reference_date: Option<&str>,
    config: &IntelligenceConfig,
) -> Result<()> {
    let roster = read_roster(input)?;
    let reference = parse_reference_date(reference_date)?;

    let patient = roster
        .iter()
        .find(|patient| patient.id == patient_id)
        .ok_or_else(|| anyhow!("patient '{patient_id}' not found in roster file"))?;

    let summary = ReportSummarizer::summarize(&patient.checkins, reference, config);
    let rows: Vec<serde_json::Value> = summary
        .metrics
        .iter()
        .map(|row| {
            json!({
                "metric": row.metric,
                "label": row.metric.label(),
                "average": row.average,
                "samples": row.samples,
                "assessment": row.assessment,
            })
        })
        .collect();

    print_json(&json!({
        "patient_id": &patient.id,
        "patient_name": &patient.name,
        "window_start": summary.window_start,
        "window_end": summary.window_end,
        "checkin_count": summary.checkin_count,
        "metrics": rows,
        "average_weight": summary.average_weight,
        "average_recovery_score": summary.average_recovery_score,
    }))
}

/// Read one check-in: either a stored record (with a date) or bare metrics
fn read_checkin(input: &Path) -> Result<CheckinMetrics> {
    let text = fs::read_to_string(input)?;
    if let Ok(record) = serde_json::from_str::<CheckinRecord>(&text) {
        return Ok(record.metrics);
    }
    Ok(serde_json::from_str::<CheckinMetrics>(&text)?)
}

/// Read a roster file: an array of patients with check-in histories
fn read_roster(input: &Path) -> Result<Vec<Patient>> {
    let text = fs::read_to_string(input)?;
    Ok(serde_json::from_str(&text)?)
}

/// Parse a `YYYY-MM-DD` override or default to today's local date
fn parse_reference_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(text) => Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Print a value as pretty JSON on stdout
fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
