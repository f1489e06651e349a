// ABOUTME: Benchmark test fixtures for generating realistic training-session data
// ABOUTME: Provides deterministic session generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating session snapshots.
//!
//! Values depend only on indices, so every run measures the same data.

use chrono::{Duration, NaiveDate};
use squadtrack::models::{
    AttendanceStatus, Metric, MetricRecord, MetricUnit, PlayerRecord, Session, SessionStatus,
};

/// Predefined roster sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RosterSize {
    /// Small squad (12 players)
    Small,
    /// Full academy roster (60 players)
    Large,
}

impl RosterSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Large => 60,
        }
    }
}

/// Anchor date for generated sessions
#[must_use]
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default()
}

fn metrics() -> [Metric; 4] {
    let unit = |code: &str, weight| MetricUnit {
        code: code.into(),
        name: code.to_uppercase(),
        normalization_weight: Some(weight),
    };
    [
        Metric::new(1, "Sprint 40m", true).with_unit(unit("s", 0.5)),
        Metric::new(2, "Vertical jump", false).with_unit(unit("cm", 1.0)),
        Metric::new(3, "Push-ups", false).with_unit(unit("reps", 0.25)),
        Metric::new(4, "Bench press", false).with_unit(unit("kg", 1.5)),
    ]
}

const fn attendance(index: usize) -> AttendanceStatus {
    match index % 7 {
        0 => AttendanceStatus::Absent,
        1 => AttendanceStatus::Late,
        _ => AttendanceStatus::Present,
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn player(session_index: usize, index: usize, metrics: &[Metric]) -> PlayerRecord {
    let status = attendance(index + session_index);
    let record_id = (session_index * 1000 + index) as i64;

    PlayerRecord {
        id: record_id,
        player_id: Some(index as i64),
        attendance_status: status,
        metric_records: metrics
            .iter()
            .enumerate()
            .map(|(m, metric)| MetricRecord {
                id: record_id * 10 + m as i64,
                metric: metric.clone(),
                value: status
                    .is_attending()
                    .then(|| 10.0 + ((index * 31 + session_index * 7 + m * 13) % 40) as f64),
                notes: None,
            })
            .collect(),
    }
}

/// One session with a fully marked roster of the given size
#[must_use]
pub fn generate_session(size: RosterSize) -> Session {
    generate_sessions(size, 1).remove(0)
}

/// A weekly series of sessions with the same roster
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_sessions(size: RosterSize, count: usize) -> Vec<Session> {
    let metrics = metrics();
    (0..count)
        .map(|s| Session {
            id: s as i64 + 1,
            date: Some(base_date() + Duration::weeks(s as i64)),
            status: SessionStatus::Completed,
            player_records: (0..size.count())
                .map(|index| player(s, index, &metrics))
                .collect(),
        })
        .collect()
}
