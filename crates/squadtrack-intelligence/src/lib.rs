// ABOUTME: Session workflow gate and metric normalization engine for squadtrack
// ABOUTME: Pure computation over session snapshots, extracted for parallel compilation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Squadtrack Intelligence
//!
//! Decision logic of the coaching dashboard:
//!
//! - **workflow**: which training-session step is complete, navigable or locked
//! - **normalization**: direction-aware, unit-weighted percentage changes
//! - **improvement**: per-player and per-metric improvement aggregation
//! - **history**: metric histories assembled across sessions
//! - **config**: validated, environment-overridable engine configuration
//!
//! Nothing here performs I/O. Inputs are snapshots, outputs are plain data.

/// Engine configuration with environment overrides
pub mod config;

/// Cross-session metric histories
pub mod history;

/// Improvement aggregation
pub mod improvement;

/// Directionality and unit-weight normalization
pub mod normalization;

/// Training-session completion workflow
pub mod workflow;
