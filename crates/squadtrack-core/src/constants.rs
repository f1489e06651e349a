// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Normalization weight bounds, history thresholds, and workflow route fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Metric unit normalization weights
pub mod normalization {
    /// Weight applied when a metric has no unit or the unit carries no weight
    pub const NEUTRAL_WEIGHT: f64 = 1.0;
    /// Upper bound (inclusive) of a valid normalization weight
    pub const MAX_WEIGHT: f64 = 2.0;
    /// Lower bound (exclusive) of a valid normalization weight
    pub const MIN_WEIGHT_EXCLUSIVE: f64 = 0.0;
}

/// Improvement history requirements
pub mod history {
    /// Fewest recorded values a metric needs before an improvement figure exists
    pub const MIN_HISTORY_POINTS: usize = 2;
    /// Scale factor turning a ratio into a percentage
    pub const PERCENT_SCALE: f64 = 100.0;
}

/// Workflow route fragments
pub mod workflow {
    /// Path prefix under which a session's workflow steps are mounted
    pub const SESSION_ROUTE_PREFIX: &str = "/sessions";
    /// Step identifier: configure session-wide metrics
    pub const STEP_SESSION_METRICS: &str = "session-metrics";
    /// Step identifier: assign metrics to individual players
    pub const STEP_PLAYER_METRICS: &str = "player-metrics";
    /// Step identifier: mark attendance
    pub const STEP_ATTENDANCE: &str = "attendance";
    /// Step identifier: record performance values
    pub const STEP_RECORD_METRICS: &str = "record-metrics";
}
