// ABOUTME: Normalization configuration for cross-metric improvement comparison
// ABOUTME: Configures the neutral weight, the weight ceiling, and the minimum history length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Normalization Configuration

use serde::{Deserialize, Serialize};
use squadtrack_core::constants::history::MIN_HISTORY_POINTS;
use squadtrack_core::constants::normalization::{MAX_WEIGHT, NEUTRAL_WEIGHT};
use squadtrack_core::errors::{AppError, AppResult};
use squadtrack_core::models::MetricUnit;

/// Normalization Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Weight used when a unit is missing or carries an invalid weight
    pub neutral_weight: f64,
    /// Largest weight a unit may carry
    pub max_weight: f64,
    /// Recorded values a metric needs before it yields an improvement figure
    pub min_history_points: usize,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            neutral_weight: NEUTRAL_WEIGHT,
            max_weight: MAX_WEIGHT,
            min_history_points: MIN_HISTORY_POINTS,
        }
    }
}

impl NormalizationConfig {
    /// Whether `weight` is acceptable under this configuration
    #[must_use]
    pub fn accepts_weight(&self, weight: f64) -> bool {
        weight.is_finite() && weight > 0.0 && weight <= self.max_weight
    }

    /// Validate a unit against the weight ceiling in effect
    ///
    /// Applies the unit's own checks first, then rejects weights above a
    /// lowered `max_weight`, which would otherwise resolve to the neutral weight.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MetricUnit::validate`], or `ValueOutOfRange` when
    /// the weight exceeds `max_weight`
    pub fn validate_unit(&self, unit: &MetricUnit) -> AppResult<()> {
        unit.validate()?;
        match unit.normalization_weight {
            Some(weight) if !self.accepts_weight(weight) => Err(AppError::value_out_of_range(format!(
                "normalization weight {weight} for unit '{}' exceeds the configured maximum {}",
                unit.code, self.max_weight
            ))
            .with_resource_id(unit.code.clone())),
            _ => Ok(()),
        }
    }
}
