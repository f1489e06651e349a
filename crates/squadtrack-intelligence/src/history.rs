// ABOUTME: Per-player metric histories assembled from one or many session snapshots
// ABOUTME: Orders recorded values chronologically and groups them by metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric history collection
//!
//! Only recorded (finite) values enter a series. Assigned-but-unmeasured metric
//! records still create an empty series so callers can tell "no data" apart
//! from "no metric".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use squadtrack_core::models::{Metric, PlayerRecord, Session};
use tracing::debug;

/// Recorded values of one metric for one player, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Metric definition (latest seen)
    pub metric: Metric,
    /// Recorded values in chronological order
    pub values: Vec<f64>,
}

impl MetricSeries {
    /// First recorded value
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Last recorded value
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// All metric series of one player
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerHistory {
    /// Player identifier
    pub player_id: i64,
    series: Vec<MetricSeries>,
}

impl PlayerHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new(player_id: i64) -> Self {
        Self {
            player_id,
            series: Vec::new(),
        }
    }

    /// Append the metric records of a player record, in order
    pub fn extend_from_record(&mut self, record: &PlayerRecord) {
        for metric_record in &record.metric_records {
            self.push(&metric_record.metric, metric_record.recorded_value());
        }
    }

    /// Append one observation; `None` registers the metric without a value
    pub fn push(&mut self, metric: &Metric, value: Option<f64>) {
        let series = match self.series.iter().position(|s| s.metric.id == metric.id) {
            Some(position) => &mut self.series[position],
            None => {
                self.series.push(MetricSeries {
                    metric: metric.clone(),
                    values: Vec::new(),
                });
                let last = self.series.len() - 1;
                &mut self.series[last]
            }
        };
        series.metric = metric.clone();

        if let Some(value) = value.filter(|v| v.is_finite()) {
            series.values.push(value);
        }
    }

    /// Series in order of first appearance
    #[must_use]
    pub fn series(&self) -> &[MetricSeries] {
        &self.series
    }

    /// Series for a metric
    #[must_use]
    pub fn series_for(&self, metric_id: i64) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.metric.id == metric_id)
    }
}

/// Gather every player's recorded values across sessions
///
/// Sessions are ordered by date with undated sessions last; sessions sharing a
/// date keep their input order. Player records without a `player_id` cannot be
/// attributed across sessions and are skipped. Histories are returned in
/// ascending player order.
#[must_use]
pub fn collect_player_histories(sessions: &[Session]) -> Vec<PlayerHistory> {
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by_key(|session| (session.date.is_none(), session.date));

    let mut histories: BTreeMap<i64, PlayerHistory> = BTreeMap::new();
    let mut skipped = 0_usize;

    for session in ordered {
        for record in &session.player_records {
            let Some(player_id) = record.player_id else {
                skipped += 1;
                continue;
            };
            histories
                .entry(player_id)
                .or_insert_with(|| PlayerHistory::new(player_id))
                .extend_from_record(record);
        }
    }

    debug!(
        sessions = sessions.len(),
        players = histories.len(),
        skipped_records = skipped,
        "Collected player metric histories"
    );

    histories.into_values().collect()
}
