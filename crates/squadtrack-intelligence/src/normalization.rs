// ABOUTME: Metric normalization engine turning raw deltas into comparable signed percentages
// ABOUTME: Resolves metric directionality first, then scales magnitude by the unit weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Improvement normalization
//!
//! A 5% change in body weight is not as significant as a 5% change in vertical
//! jump. Each metric unit carries a weight in (0, 2] that scales the signed
//! percentage before figures are compared or averaged.
//!
//! Directionality is resolved before normalization: a positive signed
//! percentage always means "got better", and the weight only scales magnitude.

use serde::{Deserialize, Serialize};
use squadtrack_core::constants::history::PERCENT_SCALE;
use squadtrack_core::errors::AppResult;
use squadtrack_core::models::MetricUnit;
use tracing::warn;

use crate::config::{IntelligenceConfig, NormalizationConfig};

/// Direction-resolved change between a first and a last observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignedChange {
    /// Earliest recorded value
    pub first_value: f64,
    /// Latest recorded value
    pub last_value: f64,
    /// `last_value - first_value`
    pub raw_delta: f64,
    /// Delta relative to the first value, in percent (0 when the first value is 0)
    pub raw_percentage: f64,
    /// Percentage where positive always means improvement
    pub signed_percentage: f64,
}

impl SignedChange {
    /// Resolve the change between two observations of a metric
    ///
    /// A zero first value short-circuits the ratio to 0 instead of producing an
    /// infinite or NaN percentage.
    #[must_use]
    #[allow(clippy::float_cmp)] // Only an exact zero makes the ratio undefined
    pub fn between(first_value: f64, last_value: f64, is_lower_better: bool) -> Self {
        let raw_delta = last_value - first_value;
        let raw_percentage = if first_value == 0.0 {
            0.0
        } else {
            finite_or_zero(raw_delta / first_value * PERCENT_SCALE)
        };
        let signed_percentage = if is_lower_better {
            -raw_percentage
        } else {
            raw_percentage
        };

        Self {
            first_value,
            last_value,
            raw_delta: finite_or_zero(raw_delta),
            raw_percentage,
            signed_percentage,
        }
    }

    /// Whether the metric moved in its "better" direction
    #[must_use]
    pub fn is_improved(&self) -> bool {
        self.signed_percentage > 0.0
    }
}

/// Weight resolution and scaling under a given configuration
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    config: NormalizationConfig,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().normalization,
        }
    }

    /// Create a normalizer with explicit configuration
    #[must_use]
    pub const fn with_config(config: NormalizationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Resolve the weight to apply for a metric unit
    ///
    /// A missing unit or a unit without a weight normalizes with the neutral
    /// weight. A weight outside the valid domain also falls back to neutral, but
    /// is logged so the data owner can correct the unit definition.
    #[must_use]
    pub fn resolve_weight(&self, unit: Option<&MetricUnit>) -> f64 {
        let Some(unit) = unit else {
            return self.config.neutral_weight;
        };
        match unit.normalization_weight {
            None => self.config.neutral_weight,
            Some(weight) if self.config.accepts_weight(weight) => weight,
            Some(weight) => {
                warn!(
                    unit = %unit.code,
                    weight,
                    "Metric unit carries an invalid normalization weight, using neutral weight"
                );
                self.config.neutral_weight
            }
        }
    }

    /// Scale a signed improvement percentage by the unit weight
    ///
    /// `None` means "no data" and stays `None`; it is never turned into zero.
    #[must_use]
    pub fn normalize(&self, signed_percentage: Option<f64>, unit: Option<&MetricUnit>) -> Option<f64> {
        let percentage = signed_percentage.filter(|p| p.is_finite())?;
        Some(finite_or_zero(percentage * self.resolve_weight(unit)))
    }
}

/// Resolve the weight for a unit under the global configuration
#[must_use]
pub fn resolve_weight(unit: Option<&MetricUnit>) -> f64 {
    Normalizer::new().resolve_weight(unit)
}

/// Validate a unit against the global configuration
///
/// # Errors
///
/// See [`NormalizationConfig::validate_unit`]
pub fn validate_unit(unit: &MetricUnit) -> AppResult<()> {
    Normalizer::new().config().validate_unit(unit)
}

/// Normalize a signed improvement percentage under the global configuration
///
/// # Examples
///
/// ```rust
/// use squadtrack_core::models::MetricUnit;
/// use squadtrack_intelligence::normalization::normalize_improvement;
///
/// let unit = MetricUnit::new("s", "Seconds", 0.5).unwrap();
/// assert_eq!(normalize_improvement(Some(10.0), Some(&unit)), Some(5.0));
/// assert_eq!(normalize_improvement(None, Some(&unit)), None);
/// ```
#[must_use]
pub fn normalize_improvement(signed_percentage: Option<f64>, unit: Option<&MetricUnit>) -> Option<f64> {
    Normalizer::new().normalize(signed_percentage, unit)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
