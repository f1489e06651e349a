// ABOUTME: Core types and constants for the squadtrack training-session engine
// ABOUTME: Foundation crate with error handling, session models, roles, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Squadtrack Core
//!
//! Foundation crate providing the shared types used by the workflow gate and the
//! normalization engine. Everything in here is plain data: the persistence layer
//! owns these entities, this crate only describes the snapshot shape.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Normalization bounds and workflow route fragments
//! - **models**: Session, player record, metric record, metric and unit definitions
//! - **permissions**: User roles and the capability set injected into the workflow gate

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Session and metric data models as delivered by the backend
pub mod models;

/// Role-based capabilities with bitflags
pub mod permissions;
