// ABOUTME: Metric definitions with directionality, units, and categories
// ABOUTME: MetricUnit enforces the normalization weight domain at definition time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::normalization::{MAX_WEIGHT, MIN_WEIGHT_EXCLUSIVE};
use crate::errors::{AppError, AppResult};

/// Grouping used by the dashboard to organise metrics (speed, strength, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Unit of measurement for a metric
///
/// The normalization weight dampens or amplifies raw percentage swings so that
/// metrics with naturally large relative changes (repetition counts) do not
/// dominate aggregate improvement scores.
///
/// # Examples
///
/// ```rust
/// use squadtrack_core::models::MetricUnit;
///
/// let seconds = MetricUnit::new("s", "Seconds", 0.5).unwrap();
/// assert_eq!(seconds.normalization_weight, Some(0.5));
/// assert!(MetricUnit::new("reps", "Repetitions", 2.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricUnit {
    /// Short code (e.g. "s", "kg", "reps")
    pub code: String,
    /// Display name
    pub name: String,
    /// Multiplier in (0, 2]; absent in legacy data
    #[serde(default)]
    pub normalization_weight: Option<f64>,
}

impl MetricUnit {
    /// Define a unit, rejecting weights outside (0, 2]
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the weight is not finite or outside (0, 2]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        normalization_weight: f64,
    ) -> AppResult<Self> {
        let unit = Self {
            code: code.into(),
            name: name.into(),
            normalization_weight: Some(normalization_weight),
        };
        unit.validate()?;
        Ok(unit)
    }

    /// Validate a unit as received from an edit form or the backend
    ///
    /// A unit without a weight is accepted; it normalizes with the neutral weight.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty code and `ValueOutOfRange`
    /// for a weight outside (0, 2]
    pub fn validate(&self) -> AppResult<()> {
        if self.code.trim().is_empty() {
            return Err(AppError::missing_field("metric unit code"));
        }
        match self.normalization_weight {
            Some(weight) if !Self::is_valid_weight(weight) => Err(AppError::value_out_of_range(
                format!(
                    "normalization weight {weight} for unit '{}' must be in ({MIN_WEIGHT_EXCLUSIVE}, {MAX_WEIGHT}]",
                    self.code
                ),
            )
            .with_resource_id(self.code.clone())),
            _ => Ok(()),
        }
    }

    /// Whether a weight lies in the (0, 2] domain
    #[must_use]
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight > MIN_WEIGHT_EXCLUSIVE && weight <= MAX_WEIGHT
    }
}

/// A named, directional, unit-bearing measurable quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric identifier
    pub id: i64,
    /// Display name (e.g. "Sprint 40m")
    pub name: String,
    /// True when smaller values are better (times, body fat)
    #[serde(default)]
    pub is_lower_better: bool,
    /// Unit of measurement
    #[serde(default)]
    pub metric_unit: Option<MetricUnit>,
    /// Dashboard category
    #[serde(default)]
    pub category: Option<Category>,
}

impl Metric {
    /// Create a metric without unit or category
    pub fn new(id: i64, name: impl Into<String>, is_lower_better: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_lower_better,
            metric_unit: None,
            category: None,
        }
    }

    /// Attach a unit
    #[must_use]
    pub fn with_unit(mut self, unit: MetricUnit) -> Self {
        self.metric_unit = Some(unit);
        self
    }

    /// Attach a category
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}
