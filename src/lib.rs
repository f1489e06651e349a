// ABOUTME: Main library entry point for the squadtrack coaching engine
// ABOUTME: Re-exports the workspace crates and adds logging and snapshot loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Squadtrack
//!
//! Decision logic of a coaching dashboard: the training-session completion
//! workflow and the metric improvement engine.
//!
//! ## Features
//!
//! - **Workflow gate**: step completion, navigation, edit lock and auto-advance
//!   for the `session-metrics` → `player-metrics` → `attendance` →
//!   `record-metrics` flow
//! - **Normalization**: direction-aware improvement percentages scaled by
//!   unit weights
//! - **Improvement summaries**: per player, per metric, per session and across
//!   session history
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use squadtrack::permissions::UserRole;
//! use squadtrack::snapshot::parse_session;
//! use squadtrack::workflow::{WorkflowGate, WorkflowStep};
//!
//! let session = parse_session(r#"{"id": 4, "date": "2026-10-18", "status": "ongoing", "player_records": []}"#)?;
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default();
//! let gate = WorkflowGate::new(UserRole::Coach.capabilities(), today);
//!
//! let result = gate.evaluate(Some(&session), WorkflowStep::SessionMetrics);
//! assert_eq!(result.progress, 0);
//! # Ok::<(), squadtrack::errors::AppError>(())
//! ```

/// Structured logging setup
pub mod logging;

/// JSON snapshot parsing and loading
pub mod snapshot;

pub use squadtrack_core::{constants, errors, models, permissions};
pub use squadtrack_intelligence::{config, history, improvement, normalization, workflow};
