// ABOUTME: Tests for loading session snapshots from JSON files
// ABOUTME: Covers single-object and array documents, error codes, and end-to-end gate evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{init_test_logging, today};
use squadtrack::errors::ErrorCode;
use squadtrack::models::{AttendanceStatus, SessionStatus};
use squadtrack::permissions::UserRole;
use squadtrack::snapshot::{find_session, load_sessions, parse_session};
use squadtrack::workflow::{WorkflowGate, WorkflowStep};
use tempfile::TempDir;

const SESSIONS_JSON: &str = r#"[
  {
    "id": 12,
    "date": "2026-10-18",
    "status": "ongoing",
    "player_records": [
      {
        "id": 101,
        "player_id": 7,
        "attendance_status": "present",
        "metric_records": [
          {
            "id": 1001,
            "metric": {
              "id": 1,
              "name": "Sprint 40m",
              "is_lower_better": true,
              "metric_unit": { "code": "s", "name": "Seconds", "normalization_weight": 0.5 },
              "category": { "id": 3, "name": "Speed" }
            },
            "value": null
          }
        ]
      },
      {
        "id": 102,
        "player_id": 8,
        "attendance_status": "pending",
        "metric_records": []
      }
    ]
  },
  { "id": 13, "date": null, "status": "scheduled", "player_records": [] }
]"#;

#[test]
fn test_load_array_snapshot_and_evaluate() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessions.json");
    fs::write(&path, SESSIONS_JSON).unwrap();

    let sessions = load_sessions(&path).unwrap();
    assert_eq!(sessions.len(), 2);

    let session = find_session(&sessions, 12).unwrap();
    assert_eq!(session.status, SessionStatus::Ongoing);
    assert_eq!(
        session.player_records[1].attendance_status,
        AttendanceStatus::Pending
    );
    let unit = session.player_records[0].metric_records[0]
        .metric
        .metric_unit
        .as_ref()
        .unwrap();
    assert_eq!(unit.normalization_weight, Some(0.5));

    let gate = WorkflowGate::new(UserRole::Coach.capabilities(), today());
    let result = gate.evaluate(Some(session), WorkflowStep::PlayerMetrics);
    assert_eq!(result.current_step, 2);
    assert_eq!(
        result.steps[2].validation_message.as_deref(),
        Some("all players must have metrics assigned before accessing attendance")
    );
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = load_sessions(dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.context.resource_id.unwrap().ends_with("absent.json"));
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"id\": 1,").unwrap();

    let error = load_sessions(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_unknown_session_id_is_not_found() {
    let sessions = vec![parse_session(r#"{"id": 5}"#).unwrap()];
    let error = find_session(&sessions, 6).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.details["available"][0], 5);
}

#[test]
fn test_unknown_status_is_rejected() {
    let error = parse_session(r#"{"id": 5, "status": "cancelled"}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}
