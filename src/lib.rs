// ABOUTME: Main library entry point for the sentinela monitoring engine
// ABOUTME: Clinical risk evaluation, recovery scoring, and roster aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

#![deny(unsafe_code)]

//! # Sentinela
//!
//! Clinical risk evaluation and recovery-scoring engine for longitudinal
//! athlete monitoring. Athletes submit weekly subjective check-ins;
//! clinicians review alert feeds and trend scores built from them.
//!
//! The engine is three pure, stateless components composed by callers:
//!
//! - **Clinical Status Evaluator** — classifies one check-in into a severity
//!   tier (Critical / Warning / Safe / `NoData`) with the ordered list of
//!   triggering reasons.
//! - **Recovery Score Calculator** — computes a continuous 0-100 score from
//!   the same check-in shape via the Hooper Index method.
//! - **Roster Aggregator** — scans a patient roster, selects each patient's
//!   latest recent check-in, and produces alert feeds and KPI counts.
//!
//! Storage, authentication, rendering, and delivery are external
//! collaborators: the engine consumes plain check-in records and returns
//! values. It performs no I/O and holds no state, so calls may run
//! concurrently and repeatedly with no coordination.
//!
//! ## Example
//!
//! ```rust
//! use sentinela::config::intelligence::IntelligenceConfig;
//! use sentinela::intelligence::{ClinicalEvaluator, RecoveryCalculator, Severity};
//! use sentinela::models::{BiologicalSex, CheckinMetrics};
//!
//! let config = IntelligenceConfig::default();
//! let metrics = CheckinMetrics {
//!     qualidade_sono: Some(4),
//!     cansaco: Some(6),
//!     ..CheckinMetrics::default()
//! };
//!
//! let evaluation =
//!     ClinicalEvaluator::evaluate(Some(&metrics), BiologicalSex::Male, &config.clinical);
//! assert_eq!(evaluation.status, Severity::Warning);
//!
//! let recovery = RecoveryCalculator::calculate(&metrics, &config.recovery);
//! assert!(recovery.score <= 100);
//! ```

/// Threshold configuration with shipped defaults
pub mod config;

/// Pure analysis functions: evaluator, calculator, aggregator, report
pub mod intelligence;

/// Structured logging setup for binaries
pub mod logging;

// Foundation types re-exported from the core crate
pub use sentinela_core::errors;
pub use sentinela_core::models;
