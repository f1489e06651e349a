// ABOUTME: Training session snapshot models with nested player and metric records
// ABOUTME: Session, SessionStatus, PlayerRecord, AttendanceStatus, and MetricRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Metric;

/// Lifecycle state of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Planned, not started
    #[default]
    Scheduled,
    /// In progress
    Ongoing,
    /// Closed by the coach
    Completed,
}

/// Attendance of one player at one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Not yet marked
    #[default]
    Pending,
    /// Attended on time
    Present,
    /// Attended, arrived late
    Late,
    /// Did not attend
    Absent,
    /// Did not attend, excused
    Excused,
}

impl AttendanceStatus {
    /// Whether attendance has been marked with a terminal value
    #[must_use]
    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the player took part in the session (present or late)
    #[must_use]
    pub const fn is_attending(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

/// A metric assigned to a player within a session
///
/// `value` stays empty while the metric is assigned but not yet measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Record identifier
    pub id: i64,
    /// The metric being measured
    pub metric: Metric,
    /// Measured value
    #[serde(default)]
    pub value: Option<f64>,
    /// Free-form coach notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MetricRecord {
    /// Whether a usable (finite) value has been recorded
    #[must_use]
    pub fn recorded_value(&self) -> Option<f64> {
        self.value.filter(|value| value.is_finite())
    }
}

/// One player's participation in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Record identifier
    pub id: i64,
    /// Player this record belongs to
    #[serde(default)]
    pub player_id: Option<i64>,
    /// Attendance state
    #[serde(default)]
    pub attendance_status: AttendanceStatus,
    /// Metrics assigned to (and possibly recorded for) this player
    #[serde(default)]
    pub metric_records: Vec<MetricRecord>,
}

impl PlayerRecord {
    /// Whether at least one metric is assigned to this player
    #[must_use]
    pub fn has_metrics(&self) -> bool {
        !self.metric_records.is_empty()
    }
}

/// A training session snapshot
///
/// # Examples
///
/// ```rust
/// use squadtrack_core::models::{Session, SessionStatus};
///
/// let session: Session = serde_json::from_str(
///     r#"{"id": 7, "date": "2026-03-14", "status": "ongoing", "player_records": []}"#,
/// ).unwrap();
/// assert_eq!(session.status, SessionStatus::Ongoing);
/// assert!(session.player_records.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    pub id: i64,
    /// Scheduled calendar date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Lifecycle state
    #[serde(default)]
    pub status: SessionStatus,
    /// Roster with attendance and metric records
    #[serde(default)]
    pub player_records: Vec<PlayerRecord>,
}

impl Session {
    /// Whether the coach has closed the session
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Look up a player record by its identifier
    #[must_use]
    pub fn player_record(&self, player_record_id: i64) -> Option<&PlayerRecord> {
        self.player_records
            .iter()
            .find(|record| record.id == player_record_id)
    }

    /// Player records of players who attended (present or late)
    pub fn attending_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.player_records
            .iter()
            .filter(|record| record.attendance_status.is_attending())
    }
}
