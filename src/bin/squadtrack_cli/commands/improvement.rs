// ABOUTME: Improvement command for squadtrack-cli
// ABOUTME: Computes per-player and per-metric improvement over snapshot sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde_json::json;
use squadtrack::errors::AppResult;
use squadtrack::history::collect_player_histories;
use squadtrack::improvement::ImprovementCalculator;
use squadtrack::snapshot::{find_session, load_sessions};
use tracing::info;

use crate::helpers::display::print_json;

/// Summaries for one session, or across every session in the snapshot
pub fn summarize(snapshot: &Path, session_id: Option<i64>) -> AppResult<()> {
    let sessions = load_sessions(snapshot)?;
    let calculator = ImprovementCalculator::new();

    let players = match session_id {
        Some(id) => calculator.session_summaries(find_session(&sessions, id)?),
        None => calculator.team_summaries(&collect_player_histories(&sessions)),
    };
    let metrics = calculator.metric_summaries(&players);

    info!(
        sessions = sessions.len(),
        players = players.len(),
        metrics = metrics.len(),
        "Improvement computed"
    );

    print_json(&json!({
        "players": players,
        "metrics": metrics,
    }))
}
