// ABOUTME: Boolean predicates derived from a session snapshot for workflow gating
// ABOUTME: Rejects vacuous truth so an empty roster never satisfies "every player" checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use squadtrack_core::models::{PlayerRecord, Session};

use crate::improvement::is_fully_recorded;

/// Facts about a session snapshot consulted by the gating rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // One flag per gating predicate
pub struct SessionPredicates {
    /// Number of player records in the roster
    pub player_count: usize,
    /// Every player has at least one metric assigned
    pub all_players_have_metrics: bool,
    /// Every player's attendance is marked
    pub all_players_attendance_marked: bool,
    /// Metrics are configured, session-wide or ad hoc per player
    pub metrics_configured: bool,
    /// Every attending player has all assigned metrics recorded
    pub all_attendees_recorded: bool,
    /// The session takes place on the caller's date
    pub is_session_today: bool,
    /// The session has been completed
    pub is_session_completed: bool,
    /// Scheduled date, if known
    pub session_date: Option<NaiveDate>,
    /// Days from the caller's date to the session date (negative when past)
    pub days_until_session: Option<i64>,
}

impl SessionPredicates {
    /// Derive predicates from a snapshot; a missing session yields all-false
    #[must_use]
    pub fn evaluate(session: Option<&Session>, today: NaiveDate) -> Self {
        let Some(session) = session else {
            return Self::default();
        };
        let players = &session.player_records;

        Self {
            player_count: players.len(),
            all_players_have_metrics: every(players, PlayerRecord::has_metrics),
            all_players_attendance_marked: every(players, |p| p.attendance_status.is_marked()),
            metrics_configured: metrics_configured(session),
            all_attendees_recorded: all_attendees_recorded(session),
            is_session_today: session.date == Some(today),
            is_session_completed: session.is_completed(),
            session_date: session.date,
            days_until_session: session.date.map(|date| (date - today).num_days()),
        }
    }

    /// Whether the roster is empty
    #[must_use]
    pub const fn has_no_players(&self) -> bool {
        self.player_count == 0
    }
}

/// Non-vacuous "every": an empty slice never satisfies it
fn every<F>(players: &[PlayerRecord], predicate: F) -> bool
where
    F: Fn(&PlayerRecord) -> bool,
{
    !players.is_empty() && players.iter().all(predicate)
}

/// Session-wide configuration (every attendee has metrics) or ad hoc
/// per-player assignment (anyone has metrics)
fn metrics_configured(session: &Session) -> bool {
    let attendees: Vec<&PlayerRecord> = session.attending_players().collect();
    let attendees_configured =
        !attendees.is_empty() && attendees.iter().all(|record| record.has_metrics());
    let any_assigned = session.player_records.iter().any(PlayerRecord::has_metrics);

    attendees_configured || any_assigned
}

fn all_attendees_recorded(session: &Session) -> bool {
    let mut attendees = session.attending_players().peekable();
    attendees.peek().is_some() && attendees.all(is_fully_recorded)
}
