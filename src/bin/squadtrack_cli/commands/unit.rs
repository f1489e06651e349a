// ABOUTME: Metric unit validation command for squadtrack-cli
// ABOUTME: Rejects normalization weights outside (0, max weight] before a unit is saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use squadtrack::errors::AppResult;
use squadtrack::models::MetricUnit;
use squadtrack::normalization::{resolve_weight, validate_unit};

use crate::helpers::display::print_json;

/// Validate a unit definition and show the weight normalization will use
pub fn validate(code: String, name: String, weight: Option<f64>) -> AppResult<()> {
    let unit = MetricUnit {
        code,
        name,
        normalization_weight: weight,
    };
    validate_unit(&unit)?;

    print_json(&json!({
        "valid": true,
        "unit": unit,
        "effectiveWeight": resolve_weight(Some(&unit)),
    }))
}
