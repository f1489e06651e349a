// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for squadtrack-cli
// ABOUTME: Provides argument parsing and JSON output utilities

pub mod display;
pub mod parse;
