// ABOUTME: Attendance marking rules and pending-update application for the workflow
// ABOUTME: Decides whether attendance may be marked and applies submitted updates to a copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use squadtrack_core::models::{AttendanceStatus, Session};
use squadtrack_core::permissions::Capabilities;
use tracing::debug;

use super::SessionPredicates;

/// An attendance change submitted by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    /// Player record to update
    pub player_record_id: i64,
    /// New attendance status
    pub attendance_status: AttendanceStatus,
}

/// Outcome of checking whether attendance may be marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMarking {
    /// Marking is permitted
    Allowed,
    /// Session is completed and the caller may not edit it
    SessionLocked,
    /// Roster is empty
    NoPlayers,
    /// Some player has no metric assigned
    MissingMetrics,
    /// Session has no scheduled date
    DateNotSet,
    /// Session date is still ahead
    BeforeSessionDate,
    /// Session date has passed
    AfterSessionDate,
}

impl AttendanceMarking {
    /// Decide whether attendance may be marked
    ///
    /// Marking requires every player to have metrics and either the session
    /// taking place today or the `MARK_ATTENDANCE_ANY_DAY` capability.
    #[must_use]
    pub fn check(predicates: &SessionPredicates, capabilities: Capabilities) -> Self {
        if predicates.is_session_completed && !capabilities.can_edit_completed_sessions() {
            return Self::SessionLocked;
        }
        if predicates.has_no_players() {
            return Self::NoPlayers;
        }
        if !predicates.all_players_have_metrics {
            return Self::MissingMetrics;
        }
        if predicates.is_session_today || capabilities.can_mark_attendance_any_day() {
            return Self::Allowed;
        }
        match predicates.days_until_session {
            None => Self::DateNotSet,
            Some(days) if days > 0 => Self::BeforeSessionDate,
            Some(_) => Self::AfterSessionDate,
        }
    }

    /// Whether marking is permitted
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Message shown on the attendance step, `None` when allowed
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Allowed => None,
            Self::SessionLocked => Some("completed sessions are read-only"),
            Self::NoPlayers => Some("session has no players assigned"),
            Self::MissingMetrics => {
                Some("all players must have metrics assigned before accessing attendance")
            }
            Self::DateNotSet => Some("session date is not set"),
            Self::BeforeSessionDate => Some("cannot mark attendance before session date"),
            Self::AfterSessionDate => Some("attendance can only be marked on the session date"),
        }
    }
}

/// Return a copy of the session with submitted attendance updates applied
///
/// Updates naming an unknown player record are ignored.
#[must_use]
pub fn apply_attendance_updates(session: &Session, updates: &[AttendanceUpdate]) -> Session {
    let mut updated = session.clone();
    for update in updates {
        match updated
            .player_records
            .iter_mut()
            .find(|record| record.id == update.player_record_id)
        {
            Some(record) => record.attendance_status = update.attendance_status,
            None => debug!(
                session_id = session.id,
                player_record_id = update.player_record_id,
                "Ignoring attendance update for unknown player record"
            ),
        }
    }
    updated
}
