// ABOUTME: Workflow commands for squadtrack-cli
// ABOUTME: Evaluates the session gate and resolves auto-advance targets from a snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use serde_json::json;
use squadtrack::errors::{AppError, AppResult};
use squadtrack::models::Session;
use squadtrack::snapshot::{find_session, load_sessions};
use squadtrack::workflow::{AttendanceUpdate, WorkflowGate, WorkflowStep};
use tracing::info;

use crate::helpers::display::print_json;
use crate::SessionArgs;

/// Evaluate the gate for one session
pub fn evaluate(args: &SessionArgs, step: Option<WorkflowStep>, path: Option<&str>) -> AppResult<()> {
    let (gate, session) = load(args)?;

    let result = match (step, path) {
        (Some(step), _) => gate.evaluate(Some(&session), step),
        (None, Some(path)) => gate.evaluate_path(Some(&session), path),
        // No step given: land on the first incomplete one
        (None, None) => gate.evaluate_path(Some(&session), ""),
    };

    info!(
        session_id = session.id,
        progress = result.progress,
        current_step = result.current_step,
        "Workflow evaluated"
    );

    print_json(&json!({
        "sessionId": session.id,
        "attendanceMarking": gate.attendance_marking(Some(&session)),
        "workflow": result,
    }))
}

/// Resolve the navigation target after submitting `from`
pub fn next_step(
    args: &SessionArgs,
    from: WorkflowStep,
    attendance: &[AttendanceUpdate],
) -> AppResult<()> {
    let (gate, session) = load(args)?;
    let target = gate.next_step(&session, from, attendance);

    info!(
        session_id = session.id,
        from = %from,
        advanced = target.is_some(),
        "Next step resolved"
    );

    print_json(&json!({
        "sessionId": session.id,
        "from": from,
        "next": target,
    }))
}

fn load(args: &SessionArgs) -> AppResult<(WorkflowGate, Session)> {
    let sessions = load_sessions(&args.snapshot)?;
    let session = match args.session {
        Some(id) => find_session(&sessions, id)?.clone(),
        None => sessions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::invalid_input("snapshot contains no sessions"))?,
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let gate = WorkflowGate::new(args.role.capabilities(), today);

    Ok((gate, session))
}
