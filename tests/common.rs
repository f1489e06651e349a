// ABOUTME: Shared test utilities and session fixtures for integration tests
// ABOUTME: Provides logging setup plus builders for sessions, players and metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `squadtrack`
//!
//! Fixtures build session snapshots the way the backend delivers them so the
//! workflow and improvement tests read like the scenarios they check.

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use squadtrack::models::{
    AttendanceStatus, Metric, MetricRecord, MetricUnit, PlayerRecord, Session, SessionStatus,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "today" used across workflow tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Date offset from [`today`] by whole days
pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// Sprint 40m: lower is better, measured in seconds with weight 0.5
pub fn sprint_40m() -> Metric {
    Metric::new(1, "Sprint 40m", true).with_unit(MetricUnit::new("s", "Seconds", 0.5).unwrap())
}

/// Vertical jump: higher is better, measured in centimetres with weight 1.0
pub fn vertical_jump() -> Metric {
    Metric::new(2, "Vertical jump", false)
        .with_unit(MetricUnit::new("cm", "Centimetres", 1.0).unwrap())
}

/// Metric record for a metric, optionally recorded
pub fn metric_record(id: i64, metric: &Metric, value: Option<f64>) -> MetricRecord {
    MetricRecord {
        id,
        metric: metric.clone(),
        value,
        notes: None,
    }
}

/// Player record with one record per `(metric, value)` pair
pub fn player(
    id: i64,
    status: AttendanceStatus,
    metrics: &[(&Metric, Option<f64>)],
) -> PlayerRecord {
    PlayerRecord {
        id,
        player_id: Some(id + 1000),
        attendance_status: status,
        metric_records: metrics
            .iter()
            .enumerate()
            .map(|(i, (metric, value))| {
                metric_record(id * 100 + i64::try_from(i).unwrap(), metric, *value)
            })
            .collect(),
    }
}

/// Player record without any metric assigned
pub fn player_without_metrics(id: i64, status: AttendanceStatus) -> PlayerRecord {
    player(id, status, &[])
}

/// Session dated today with the given status and roster
pub fn session(id: i64, status: SessionStatus, players: Vec<PlayerRecord>) -> Session {
    Session {
        id,
        date: Some(today()),
        status,
        player_records: players,
    }
}

/// Ongoing session for today whose whole workflow is complete
pub fn completed_workflow_session(id: i64) -> Session {
    let sprint = sprint_40m();
    session(
        id,
        SessionStatus::Ongoing,
        vec![
            player(1, AttendanceStatus::Present, &[(&sprint, Some(4.9))]),
            player(2, AttendanceStatus::Late, &[(&sprint, Some(5.2))]),
            player(3, AttendanceStatus::Absent, &[(&sprint, None)]),
        ],
    )
}
