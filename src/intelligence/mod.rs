// ABOUTME: Intelligence module for clinical evaluation, recovery scoring, and aggregation
// ABOUTME: Pure, stateless analysis functions over check-in value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Intelligence Module
//!
//! The analytical core of sentinela: pure, synchronous functions over
//! check-in snapshots. Nothing here touches storage, the network, or shared
//! mutable state — callers fetch data, invoke these functions, and render
//! the results. Same input, same output, always.

/// Severity tier classification with explainable reasons
pub mod clinical_evaluator;

/// Hooper Index recovery scoring
pub mod recovery_calculator;

/// Per-metric report averages with shared-threshold labels
pub mod report;

/// Roster-wide alert feeds and KPI counts
pub mod roster_aggregator;

pub use clinical_evaluator::{
    ClinicalEvaluation, ClinicalEvaluator, CriticalReason, Severity, WarningReason,
};
pub use recovery_calculator::{RecoveryCalculator, RecoveryResult, RecoveryStatus};
pub use report::{MetricAssessment, MetricKind, MetricSummary, ReportSummarizer, ReportSummary};
pub use roster_aggregator::{AlertEntry, RosterAggregator, RosterSummary};
