// ABOUTME: Configuration module for the sentinela engine
// ABOUTME: Re-exports the intelligence threshold configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

//! # Configuration
//!
//! Every threshold the engine compares against lives here, in serde-capable
//! structs with documented defaults. The evaluator, the recovery calculator,
//! the aggregator, and the report summarizer all read from the same tables —
//! there is deliberately no second copy of any threshold anywhere else.

/// Clinical rule thresholds, recovery scoring weights, and alert window
pub mod intelligence;

pub use intelligence::{
    AlertWindowConfig, ClinicalRulesConfig, CriticalThresholds, IntelligenceConfig,
    RecoveryScoringConfig, WarningThresholds,
};
