// ABOUTME: Integration tests for directionality resolution and unit-weight normalization
// ABOUTME: Checks the sign inversion and weight scaling laws plus the Sprint 40m scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{init_test_logging, sprint_40m};
use proptest::prelude::*;
use squadtrack::config::NormalizationConfig;
use squadtrack::errors::ErrorCode;
use squadtrack::models::MetricUnit;
use squadtrack::normalization::{normalize_improvement, resolve_weight, Normalizer, SignedChange};

const TOLERANCE: f64 = 1e-9;

fn normalizer() -> Normalizer {
    Normalizer::with_config(NormalizationConfig::default())
}

fn unit(weight: Option<f64>) -> MetricUnit {
    MetricUnit {
        code: "kg".into(),
        name: "Kilogram".into(),
        normalization_weight: weight,
    }
}

// ============================================================================
// Sprint 40m scenario
// ============================================================================

#[test]
fn test_sprint_40m_improvement_for_faster_player() {
    init_test_logging();
    let sprint = sprint_40m();
    let change = SignedChange::between(5.0, 4.5, sprint.is_lower_better);
    let normalized = normalizer()
        .normalize(Some(change.signed_percentage), sprint.metric_unit.as_ref())
        .unwrap();

    assert!((change.raw_delta + 0.5).abs() < TOLERANCE);
    assert!((change.signed_percentage - 10.0).abs() < TOLERANCE);
    assert!((normalized - 5.0).abs() < TOLERANCE);
    assert!(change.is_improved());
}

#[test]
fn test_sprint_40m_regression_for_slower_player() {
    let sprint = sprint_40m();
    let change = SignedChange::between(5.0, 5.5, sprint.is_lower_better);
    let normalized = normalizer()
        .normalize(Some(change.signed_percentage), sprint.metric_unit.as_ref())
        .unwrap();

    assert!((change.signed_percentage + 10.0).abs() < TOLERANCE);
    assert!((normalized + 5.0).abs() < TOLERANCE);
    assert!(!change.is_improved());
}

// ============================================================================
// Weight resolution
// ============================================================================

#[test]
fn test_missing_unit_or_weight_uses_neutral_weight() {
    assert_eq!(resolve_weight(None), 1.0);
    assert_eq!(resolve_weight(Some(&unit(None))), 1.0);
    assert_eq!(normalize_improvement(Some(12.0), None), Some(12.0));
}

#[test]
fn test_invalid_weight_in_data_falls_back_to_neutral() {
    init_test_logging();
    for weight in [0.0, -1.0, 2.5, f64::NAN, f64::INFINITY] {
        assert_eq!(normalizer().resolve_weight(Some(&unit(Some(weight)))), 1.0);
    }
}

#[test]
fn test_weight_bounds_are_inclusive_at_two() {
    assert_eq!(normalizer().resolve_weight(Some(&unit(Some(2.0)))), 2.0);
    assert!(MetricUnit::new("kg", "Kilogram", 2.0).is_ok());
}

#[test]
fn test_unit_definition_rejects_out_of_domain_weight() {
    for weight in [0.0, -0.5, 2.01, f64::NAN] {
        let error = MetricUnit::new("kg", "Kilogram", weight).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource_id.as_deref(), Some("kg"));
    }

    let error = MetricUnit::new(" ", "Blank", 1.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_no_data_stays_no_data() {
    assert_eq!(normalize_improvement(None, Some(&unit(Some(0.5)))), None);
}

#[test]
fn test_zero_baseline_yields_zero_percentage() {
    let change = SignedChange::between(0.0, 7.0, true);

    assert_eq!(change.raw_percentage, 0.0);
    assert_eq!(change.signed_percentage.abs(), 0.0);
    assert!(!change.is_improved());
}

// ============================================================================
// Laws
// ============================================================================

proptest! {
    #[test]
    fn prop_sign_inversion(first in 0.1_f64..1_000.0, last in 0.0_f64..1_000.0) {
        let higher = SignedChange::between(first, last, false);
        let lower = SignedChange::between(first, last, true);

        prop_assert!((higher.signed_percentage + lower.signed_percentage).abs() < TOLERANCE);
        prop_assert_eq!(higher.raw_delta, lower.raw_delta);
        prop_assert!(!(higher.is_improved() && lower.is_improved()));
    }

    #[test]
    fn prop_weight_scaling(raw in -500.0_f64..500.0, weight in 0.01_f64..=2.0) {
        let scaled = normalizer().normalize(Some(raw), Some(&unit(Some(weight)))).unwrap();

        prop_assert!((scaled - raw * weight).abs() < TOLERANCE);
        prop_assert!(raw == 0.0 || scaled.signum() == raw.signum());
    }
}
