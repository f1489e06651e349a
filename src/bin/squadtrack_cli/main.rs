// ABOUTME: Squadtrack CLI - evaluates session workflows and improvement figures from JSON snapshots
// ABOUTME: Dispatches workflow, next-step, improvement and unit validation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Gate state of session 12 as a coach, on the attendance step
//! squadtrack-cli workflow --snapshot sessions.json --session 12 --path /sessions/12/attendance
//!
//! # Where to go after submitting attendance
//! squadtrack-cli next-step --snapshot sessions.json --session 12 --from attendance \
//!     --attendance 101=present --attendance 102=absent
//!
//! # Improvement across every session in the snapshot
//! squadtrack-cli improvement --snapshot sessions.json
//!
//! # Check a unit weight before saving it
//! squadtrack-cli validate-unit --code kg --name Kilogram --weight 1.5
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use squadtrack::errors::AppResult;
use squadtrack::logging::LoggingConfig;
use squadtrack::permissions::UserRole;
use squadtrack::workflow::{AttendanceUpdate, WorkflowStep};
use tracing::{debug, warn};

use helpers::parse::parse_attendance_update;

#[derive(Parser)]
#[command(
    name = "squadtrack-cli",
    about = "Squadtrack session workflow and improvement CLI",
    long_about = "Evaluates the training-session workflow gate and metric improvement figures over JSON session snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Options shared by commands that evaluate one session as a given caller
#[derive(Args)]
struct SessionArgs {
    /// Snapshot file holding a session object or an array of sessions
    #[arg(long)]
    snapshot: PathBuf,

    /// Session to evaluate (defaults to the first session in the snapshot)
    #[arg(long)]
    session: Option<i64>,

    /// Role of the caller
    #[arg(long, default_value = "Coach")]
    role: UserRole,

    /// Caller's local date (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate step completion, navigation and form locks
    Workflow {
        #[command(flatten)]
        session: SessionArgs,

        /// Current step identifier
        #[arg(long, conflicts_with = "path")]
        step: Option<WorkflowStep>,

        /// Current navigation path, e.g. /sessions/12/attendance
        #[arg(long)]
        path: Option<String>,
    },

    /// Resolve where to navigate after submitting a step
    NextStep {
        #[command(flatten)]
        session: SessionArgs,

        /// Step being submitted
        #[arg(long)]
        from: WorkflowStep,

        /// Submitted attendance, as <player-record-id>=<status>
        #[arg(long = "attendance", value_parser = parse_attendance_update)]
        attendance: Vec<AttendanceUpdate>,
    },

    /// Compute improvement summaries
    Improvement {
        /// Snapshot file holding a session object or an array of sessions
        #[arg(long)]
        snapshot: PathBuf,

        /// Restrict to one session, using each player's records in that session
        #[arg(long)]
        session: Option<i64>,
    },

    /// Validate a metric unit definition
    ValidateUnit {
        /// Unit code, e.g. kg
        #[arg(long)]
        code: String,

        /// Unit display name
        #[arg(long)]
        name: String,

        /// Normalization weight in (0, 2]
        #[arg(long)]
        weight: Option<f64>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("Squadtrack CLI");

    let outcome = match cli.command {
        Command::Workflow {
            session,
            step,
            path,
        } => commands::workflow::evaluate(&session, step, path.as_deref()),
        Command::NextStep {
            session,
            from,
            attendance,
        } => commands::workflow::next_step(&session, from, &attendance),
        Command::Improvement { snapshot, session } => {
            commands::improvement::summarize(&snapshot, session)
        }
        Command::ValidateUnit { code, name, weight } => {
            commands::unit::validate(code, name, weight)
        }
    };

    outcome.inspect_err(|e| warn!(code = ?e.code, "Command failed: {e}"))
}
