// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for squadtrack-cli
// ABOUTME: Provides workflow, improvement and unit validation commands

pub mod improvement;
pub mod unit;
pub mod workflow;
