// ABOUTME: Intelligence configuration for workflow gating and improvement normalization
// ABOUTME: Loads defaults, applies environment overrides, and validates the result once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is environment-only. Defaults come from
//! `squadtrack_core::constants`; `SQUADTRACK_*` variables override them and the
//! merged result is validated before use.

pub mod error;
pub mod normalization;

pub use error::ConfigError;
pub use normalization::NormalizationConfig;

use serde::{Deserialize, Serialize};
use squadtrack_core::constants::history::MIN_HISTORY_POINTS;
use squadtrack_core::constants::normalization::MAX_WEIGHT;
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable overriding the neutral normalization weight
pub const ENV_NEUTRAL_WEIGHT: &str = "SQUADTRACK_NEUTRAL_WEIGHT";
/// Environment variable overriding the maximum unit weight
pub const ENV_MAX_UNIT_WEIGHT: &str = "SQUADTRACK_MAX_UNIT_WEIGHT";
/// Environment variable overriding the minimum history length
pub const ENV_MIN_HISTORY_POINTS: &str = "SQUADTRACK_MIN_HISTORY_POINTS";

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for improvement normalization
    pub normalization: NormalizationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a weight or history bound is outside its domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        let norm = &self.normalization;

        if !norm.max_weight.is_finite() || norm.max_weight <= 0.0 || norm.max_weight > MAX_WEIGHT
        {
            return Err(ConfigError::ValueOutOfRange(
                "max_weight must be in (0, 2]",
            ));
        }

        if !norm.accepts_weight(norm.neutral_weight) {
            return Err(ConfigError::InvalidRange(
                "neutral_weight must be in (0, max_weight]",
            ));
        }

        if norm.min_history_points < MIN_HISTORY_POINTS {
            return Err(ConfigError::ValueOutOfRange(
                "min_history_points must be at least 2",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_NEUTRAL_WEIGHT, &mut self.normalization.neutral_weight)?;
        Self::apply_env_var(ENV_MAX_UNIT_WEIGHT, &mut self.normalization.max_weight)?;
        Self::apply_env_var(
            ENV_MIN_HISTORY_POINTS,
            &mut self.normalization.min_history_points,
        )?;
        Ok(self)
    }
}
