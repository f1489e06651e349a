// ABOUTME: Training-session completion workflow with four strictly ordered steps
// ABOUTME: Step identifiers, route parsing, and re-exports of the gate and its predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Workflow
//!
//! A coach walks a session through `session-metrics` → `player-metrics` →
//! `attendance` → `record-metrics`. Steps complete strictly in order, earlier
//! steps stay viewable, and later steps open only once their preconditions
//! hold. The gate is pure: it reads a snapshot and returns step states and
//! navigation targets, it never mutates anything.

pub mod attendance;
pub mod gate;
pub mod predicates;

pub use attendance::{apply_attendance_updates, AttendanceMarking, AttendanceUpdate};
pub use gate::{StepState, WorkflowGate, WorkflowResult};
pub use predicates::SessionPredicates;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use squadtrack_core::constants::workflow::{
    SESSION_ROUTE_PREFIX, STEP_ATTENDANCE, STEP_PLAYER_METRICS, STEP_RECORD_METRICS,
    STEP_SESSION_METRICS,
};
use squadtrack_core::errors::AppError;

/// One step of the session workflow, in workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStep {
    /// Configure the metrics measured in this session
    SessionMetrics,
    /// Assign metrics to individual players
    PlayerMetrics,
    /// Mark who attended
    Attendance,
    /// Record measured values
    RecordMetrics,
}

impl WorkflowStep {
    /// All steps in workflow order
    pub const ALL: [Self; 4] = [
        Self::SessionMetrics,
        Self::PlayerMetrics,
        Self::Attendance,
        Self::RecordMetrics,
    ];

    /// Number of steps in the workflow
    pub const COUNT: usize = Self::ALL.len();

    /// Route fragment identifying the step
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SessionMetrics => STEP_SESSION_METRICS,
            Self::PlayerMetrics => STEP_PLAYER_METRICS,
            Self::Attendance => STEP_ATTENDANCE,
            Self::RecordMetrics => STEP_RECORD_METRICS,
        }
    }

    /// Zero-based index in workflow order
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::SessionMetrics => 0,
            Self::PlayerMetrics => 1,
            Self::Attendance => 2,
            Self::RecordMetrics => 3,
        }
    }

    /// One-based position in workflow order
    #[must_use]
    pub const fn position(self) -> usize {
        self.index() + 1
    }

    /// The step after this one
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Parse a step identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.id() == id)
    }

    /// Derive the step from a navigation path
    ///
    /// The last path segment naming a step wins, so `/sessions/12/attendance`
    /// and `/teams/3/sessions/12/attendance?tab=2` both resolve to `attendance`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').find_map(Self::from_id)
    }

    /// Navigation path of this step for a session
    #[must_use]
    pub fn path(self, session_id: i64) -> String {
        format!("{SESSION_ROUTE_PREFIX}/{session_id}/{}", self.id())
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkflowStep {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim())
            .ok_or_else(|| AppError::invalid_input(format!("unknown workflow step: {s}")))
    }
}

/// Where the caller should navigate next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTarget {
    /// Target step
    pub step: WorkflowStep,
    /// Navigation path of the target step
    pub path: String,
}

impl StepTarget {
    /// Target for a step of a session
    #[must_use]
    pub fn new(step: WorkflowStep, session_id: i64) -> Self {
        Self {
            step,
            path: step.path(session_id),
        }
    }
}
