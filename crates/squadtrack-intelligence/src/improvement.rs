// ABOUTME: Improvement aggregation over normalized metric changes per player and per metric
// ABOUTME: Excludes metrics with insufficient history instead of counting them as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Improvement calculation
//!
//! For every (player, metric) pair with enough recorded values the calculator
//! reports the first and last value, the raw delta, the direction-resolved
//! percentage and its normalized counterpart. A player's overall improvement is
//! the mean of the normalized percentages of the contributing metrics.

use std::collections::BTreeMap;
use std::slice;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use squadtrack_core::models::{PlayerRecord, Session};
use tracing::debug;

use crate::config::NormalizationConfig;
use crate::history::{collect_player_histories, MetricSeries, PlayerHistory};
use crate::normalization::{Normalizer, SignedChange};

/// Improvement of one metric for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementResult {
    /// Metric identifier
    pub metric_id: i64,
    /// Metric display name
    pub metric_name: String,
    /// Earliest recorded value
    pub first_value: f64,
    /// Latest recorded value
    pub last_value: f64,
    /// `last_value - first_value`
    pub raw_delta: f64,
    /// Percentage where positive always means improvement
    pub signed_percentage: f64,
    /// Signed percentage scaled by the unit weight
    pub normalized_percentage: f64,
    /// Whether the metric moved in its "better" direction
    pub is_improved: bool,
    /// Number of recorded values the figure is based on
    pub data_points: usize,
}

/// Improvement figures of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerImprovementSummary {
    /// Player identifier
    pub player_id: i64,
    /// Per-metric results for metrics with sufficient history
    pub metrics: Vec<ImprovementResult>,
    /// Mean normalized percentage; `None` when no metric contributes
    pub overall_improvement: Option<f64>,
    /// Number of metrics contributing to `overall_improvement`
    pub contributing_metrics: usize,
    /// Metrics left out for lack of history
    pub insufficient_metrics: Vec<i64>,
}

/// Improvement of one metric across players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricImprovementSummary {
    /// Metric identifier
    pub metric_id: i64,
    /// Metric display name
    pub metric_name: String,
    /// Players with a figure for this metric
    pub players_measured: usize,
    /// Players whose figure is an improvement
    pub players_improved: usize,
    /// Mean normalized percentage over measured players
    pub mean_normalized_percentage: Option<f64>,
}

/// Whether any metric assigned to the player carries a recorded value
#[must_use]
pub fn has_recorded_value(record: &PlayerRecord) -> bool {
    record
        .metric_records
        .iter()
        .any(|metric_record| metric_record.recorded_value().is_some())
}

/// Whether the player has metrics assigned and every one of them is recorded
#[must_use]
pub fn is_fully_recorded(record: &PlayerRecord) -> bool {
    record.has_metrics()
        && record
            .metric_records
            .iter()
            .all(|metric_record| metric_record.recorded_value().is_some())
}

/// Calculator turning metric histories into improvement summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovementCalculator {
    normalizer: Normalizer,
}

impl ImprovementCalculator {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Create a calculator with explicit configuration
    #[must_use]
    pub const fn with_config(config: NormalizationConfig) -> Self {
        Self {
            normalizer: Normalizer::with_config(config),
        }
    }

    /// Improvement of a single metric series
    ///
    /// Returns `None` when the series has fewer recorded values than the
    /// configured minimum history.
    #[must_use]
    pub fn metric_improvement(&self, series: &MetricSeries) -> Option<ImprovementResult> {
        if series.values.len() < self.normalizer.config().min_history_points {
            return None;
        }
        let change = SignedChange::between(series.first()?, series.last()?, series.metric.is_lower_better);
        let normalized = self
            .normalizer
            .normalize(Some(change.signed_percentage), series.metric.metric_unit.as_ref())
            .unwrap_or(0.0);

        Some(ImprovementResult {
            metric_id: series.metric.id,
            metric_name: series.metric.name.clone(),
            first_value: change.first_value,
            last_value: change.last_value,
            raw_delta: change.raw_delta,
            signed_percentage: change.signed_percentage,
            normalized_percentage: normalized,
            is_improved: change.is_improved(),
            data_points: series.values.len(),
        })
    }

    /// Summary of every metric in a player's history
    #[must_use]
    pub fn player_summary(&self, history: &PlayerHistory) -> PlayerImprovementSummary {
        let mut metrics = Vec::with_capacity(history.series().len());
        let mut insufficient_metrics = Vec::new();

        for series in history.series() {
            match self.metric_improvement(series) {
                Some(result) => metrics.push(result),
                None => insufficient_metrics.push(series.metric.id),
            }
        }

        let overall_improvement = mean(metrics.iter().map(|m| m.normalized_percentage));

        PlayerImprovementSummary {
            player_id: history.player_id,
            contributing_metrics: metrics.len(),
            overall_improvement,
            metrics,
            insufficient_metrics,
        }
    }

    /// Summaries for many players, computed in parallel, in ascending player order
    #[must_use]
    pub fn team_summaries(&self, histories: &[PlayerHistory]) -> Vec<PlayerImprovementSummary> {
        let mut summaries: Vec<PlayerImprovementSummary> = histories
            .par_iter()
            .map(|history| self.player_summary(history))
            .collect();
        summaries.sort_by_key(|summary| summary.player_id);

        debug!(
            players = summaries.len(),
            with_improvement = summaries
                .iter()
                .filter(|s| s.overall_improvement.is_some())
                .count(),
            "Computed team improvement summaries"
        );

        summaries
    }

    /// Summaries within one session, each player's metric records in order
    ///
    /// Player records without a `player_id` are skipped.
    #[must_use]
    pub fn session_summaries(&self, session: &Session) -> Vec<PlayerImprovementSummary> {
        let histories = collect_player_histories(slice::from_ref(session));
        self.team_summaries(&histories)
    }

    /// Per-metric roll-up of player summaries, in ascending metric order
    #[must_use]
    pub fn metric_summaries(
        &self,
        players: &[PlayerImprovementSummary],
    ) -> Vec<MetricImprovementSummary> {
        let mut grouped: BTreeMap<i64, (String, Vec<&ImprovementResult>)> = BTreeMap::new();
        for result in players.iter().flat_map(|player| &player.metrics) {
            grouped
                .entry(result.metric_id)
                .or_insert_with(|| (result.metric_name.clone(), Vec::new()))
                .1
                .push(result);
        }

        grouped
            .into_iter()
            .map(|(metric_id, (metric_name, results))| MetricImprovementSummary {
                metric_id,
                metric_name,
                players_measured: results.len(),
                players_improved: results.iter().filter(|r| r.is_improved).count(),
                mean_normalized_percentage: mean(results.iter().map(|r| r.normalized_percentage)),
            })
            .collect()
    }
}

/// Arithmetic mean, `None` for an empty input
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0_f64, 0_u32), |(sum, count), value| {
        (sum + value, count.saturating_add(1))
    });
    (count > 0).then(|| sum / f64::from(count))
}
