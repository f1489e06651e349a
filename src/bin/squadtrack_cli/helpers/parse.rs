// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Argument parsers for squadtrack-cli values clap cannot derive
// ABOUTME: Turns <player-record-id>=<status> pairs into attendance updates

use serde_json::Value;
use squadtrack::models::AttendanceStatus;
use squadtrack::workflow::AttendanceUpdate;

/// Parse `<player-record-id>=<status>`, e.g. `101=present`
pub fn parse_attendance_update(raw: &str) -> Result<AttendanceUpdate, String> {
    let (id, status) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <player-record-id>=<status>, got '{raw}'"))?;

    let player_record_id = id
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid player record id '{id}': {e}"))?;

    let attendance_status: AttendanceStatus =
        serde_json::from_value(Value::String(status.trim().to_ascii_lowercase()))
            .map_err(|_| format!("unknown attendance status '{status}'"))?;

    Ok(AttendanceUpdate {
        player_record_id,
        attendance_status,
    })
}
