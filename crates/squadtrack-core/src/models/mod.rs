// ABOUTME: Core data models for training sessions and metric observations
// ABOUTME: Re-exports Session, PlayerRecord, MetricRecord, Metric, and MetricUnit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Snapshot shapes delivered by the backend API. The engine never creates or
//! destroys these entities; it reads a snapshot and derives results from it.
//!
//! ## Core Models
//!
//! - `Session`: one scheduled, ongoing or completed training event
//! - `PlayerRecord`: one player's participation in a session
//! - `MetricRecord`: a metric assigned to a player, optionally with a recorded value
//! - `Metric`: a named, directional quantity with a unit
//! - `MetricUnit`: unit of measurement carrying a normalization weight

mod metric;
mod session;

pub use metric::{Category, Metric, MetricUnit};
pub use session::{AttendanceStatus, MetricRecord, PlayerRecord, Session, SessionStatus};
