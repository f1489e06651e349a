// ABOUTME: Table-driven workflow gate computing step completion, navigability and form locks
// ABOUTME: Pure evaluation of a session snapshot plus injected capabilities and caller date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use squadtrack_core::models::Session;
use squadtrack_core::permissions::{Actor, Capabilities};
use tracing::debug;

use super::attendance::{apply_attendance_updates, AttendanceMarking, AttendanceUpdate};
use super::{SessionPredicates, StepTarget, WorkflowStep};

const MSG_NO_PLAYERS: &str = "session has no players assigned";
const MSG_MISSING_PLAYER_METRICS: &str =
    "all players must have metrics assigned before accessing attendance";
const MSG_METRICS_NOT_CONFIGURED: &str = "metrics must be configured before recording performance";
const MSG_ATTENDANCE_INCOMPLETE: &str =
    "attendance must be marked for all players before recording performance";
const MSG_SESSION_LOCKED: &str = "completed sessions are read-only";

/// Gating rule of one step
struct StepRule {
    step: WorkflowStep,
    /// The step's own completion predicate, before the ordering constraint
    completed: fn(&SessionPredicates) -> bool,
    /// Whether navigation to the step is open for an incomplete session
    navigable: fn(&SessionPredicates) -> bool,
    /// Why navigation is blocked
    blocked_message: fn(&SessionPredicates) -> Option<&'static str>,
}

const fn always(_: &SessionPredicates) -> bool {
    true
}

const fn no_message(_: &SessionPredicates) -> Option<&'static str> {
    None
}

const STEP_RULES: [StepRule; WorkflowStep::COUNT] = [
    StepRule {
        step: WorkflowStep::SessionMetrics,
        completed: |p| p.metrics_configured,
        navigable: always,
        blocked_message: no_message,
    },
    StepRule {
        step: WorkflowStep::PlayerMetrics,
        completed: |p| p.all_players_have_metrics,
        navigable: always,
        blocked_message: no_message,
    },
    StepRule {
        step: WorkflowStep::Attendance,
        completed: |p| p.all_players_attendance_marked,
        navigable: |p| p.all_players_have_metrics,
        blocked_message: |p| {
            if p.has_no_players() {
                Some(MSG_NO_PLAYERS)
            } else {
                Some(MSG_MISSING_PLAYER_METRICS)
            }
        },
    },
    StepRule {
        step: WorkflowStep::RecordMetrics,
        completed: |p| p.all_attendees_recorded,
        navigable: |p| p.metrics_configured && p.all_players_attendance_marked,
        blocked_message: |p| {
            if p.metrics_configured {
                Some(MSG_ATTENDANCE_INCOMPLETE)
            } else {
                Some(MSG_METRICS_NOT_CONFIGURED)
            }
        },
    },
];

/// State of one step as presented to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepState {
    /// Step identifier
    pub id: WorkflowStep,
    /// The step and every step before it are complete
    pub completed: bool,
    /// The caller is on this step
    pub current: bool,
    /// Navigation to the step is blocked
    pub disabled: bool,
    /// The step's form may not be edited
    pub is_form_disabled: bool,
    /// Why the step is blocked or read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

/// Full gate output for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResult {
    /// Percentage of completed steps
    pub progress: u8,
    /// One-based position of the first incomplete step, `COUNT + 1` when done
    pub current_step: usize,
    /// Every step is complete
    pub all_completed: bool,
    /// Session-wide edit lock
    pub is_form_disabled: bool,
    /// Per-step states in workflow order
    pub steps: Vec<StepState>,
}

impl WorkflowResult {
    /// State of a specific step
    #[must_use]
    pub fn step(&self, step: WorkflowStep) -> Option<&StepState> {
        self.steps.get(step.index())
    }

    /// First incomplete step, `None` once everything is complete
    #[must_use]
    pub fn first_incomplete(&self) -> Option<WorkflowStep> {
        let index = self.current_step.checked_sub(1)?;
        WorkflowStep::ALL.get(index).copied()
    }
}

/// Evaluates the session workflow for one caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowGate {
    capabilities: Capabilities,
    today: NaiveDate,
}

impl WorkflowGate {
    /// Gate for a capability set on the caller's local date
    #[must_use]
    pub const fn new(capabilities: Capabilities, today: NaiveDate) -> Self {
        Self {
            capabilities,
            today,
        }
    }

    /// Gate for an actor, resolving the role into capabilities
    #[must_use]
    pub fn for_actor(actor: &Actor, today: NaiveDate) -> Self {
        Self::new(actor.capabilities(), today)
    }

    /// Injected capabilities
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Caller's local date
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Predicates of a snapshot as seen on the caller's date
    #[must_use]
    pub fn predicates(&self, session: Option<&Session>) -> SessionPredicates {
        SessionPredicates::evaluate(session, self.today)
    }

    /// Whether the caller may mark attendance, and why not
    #[must_use]
    pub fn attendance_marking(&self, session: Option<&Session>) -> AttendanceMarking {
        AttendanceMarking::check(&self.predicates(session), self.capabilities)
    }

    /// Whether the caller may mark attendance
    #[must_use]
    pub fn can_mark_attendance(&self, session: Option<&Session>) -> bool {
        self.attendance_marking(session).is_allowed()
    }

    /// Evaluate every step with `current` as the caller's step
    #[must_use]
    pub fn evaluate(&self, session: Option<&Session>, current: WorkflowStep) -> WorkflowResult {
        let predicates = self.predicates(session);
        let edit_lock =
            predicates.is_session_completed && !self.capabilities.can_edit_completed_sessions();
        let marking = AttendanceMarking::check(&predicates, self.capabilities);

        let mut previous_complete = true;
        let steps: Vec<StepState> = STEP_RULES
            .iter()
            .map(|rule| {
                let completed = previous_complete && (rule.completed)(&predicates);
                previous_complete = completed;

                let disabled =
                    !predicates.is_session_completed && !(rule.navigable)(&predicates);
                let marking_blocked =
                    rule.step == WorkflowStep::Attendance && !marking.is_allowed();

                let validation_message = if disabled {
                    (rule.blocked_message)(&predicates)
                } else if marking_blocked {
                    marking.message()
                } else if edit_lock {
                    Some(MSG_SESSION_LOCKED)
                } else {
                    None
                };

                StepState {
                    id: rule.step,
                    completed,
                    current: rule.step == current,
                    disabled,
                    is_form_disabled: edit_lock || disabled || marking_blocked,
                    validation_message: validation_message.map(str::to_owned),
                }
            })
            .collect();

        let completed_count = steps.iter().filter(|state| state.completed).count();
        let current_step = steps
            .iter()
            .position(|state| !state.completed)
            .map_or(WorkflowStep::COUNT + 1, |index| index + 1);
        let progress = u8::try_from(completed_count * 100 / WorkflowStep::COUNT).unwrap_or(100);

        debug!(
            session_id = session.map(|s| s.id),
            current = %current,
            completed_steps = completed_count,
            edit_lock,
            "Evaluated session workflow"
        );

        WorkflowResult {
            progress,
            current_step,
            all_completed: completed_count == WorkflowStep::COUNT,
            is_form_disabled: edit_lock,
            steps,
        }
    }

    /// Evaluate with the caller's step derived from a navigation path
    ///
    /// A path naming no step falls back to the first incomplete step.
    #[must_use]
    pub fn evaluate_path(&self, session: Option<&Session>, path: &str) -> WorkflowResult {
        if let Some(step) = WorkflowStep::from_path(path) {
            return self.evaluate(session, step);
        }
        let result = self.evaluate(session, WorkflowStep::SessionMetrics);
        match result.first_incomplete() {
            Some(step) if step != WorkflowStep::SessionMetrics => self.evaluate(session, step),
            _ => result,
        }
    }

    /// Where to go after the caller submits `current`
    ///
    /// `submitted` holds attendance updates sent with the attendance step;
    /// they are applied to a copy of the snapshot before deciding.
    #[must_use]
    pub fn next_step(
        &self,
        session: &Session,
        current: WorkflowStep,
        submitted: &[AttendanceUpdate],
    ) -> Option<StepTarget> {
        let next = current.next()?;
        let advance = match current {
            WorkflowStep::SessionMetrics => true,
            WorkflowStep::Attendance => {
                let updated = apply_attendance_updates(session, submitted);
                self.predicates(Some(&updated)).metrics_configured
            }
            WorkflowStep::PlayerMetrics | WorkflowStep::RecordMetrics => self
                .evaluate(Some(session), current)
                .step(next)
                .is_some_and(|state| !state.disabled),
        };

        debug!(
            session_id = session.id,
            from = %current,
            to = %next,
            advance,
            "Resolved next workflow step"
        );

        advance.then(|| StepTarget::new(next, session.id))
    }
}
