// ABOUTME: Role-based capability system for the training-session workflow
// ABOUTME: Maps UserRole to a Capabilities bitflag set injected into the workflow gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Roles and Capabilities
//!
//! The workflow gate never inspects roles directly. Callers resolve an actor's
//! role into a [`Capabilities`] set once and pass that set in, so gating rules
//! can be exercised without any authentication context.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

bitflags! {
    /// Capabilities consulted by the workflow gate
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capabilities: u8 {
        /// May edit forms of a session that has been completed
        const EDIT_COMPLETED_SESSIONS = 0b0000_0001;
        /// May mark attendance on a day other than the session date
        const MARK_ATTENDANCE_ANY_DAY = 0b0000_0010;

        /// Capabilities granted to administrators
        const ADMIN_DEFAULT = Self::EDIT_COMPLETED_SESSIONS.bits()
            | Self::MARK_ATTENDANCE_ANY_DAY.bits();
    }
}

impl Capabilities {
    /// Check that every flag in `other` is present
    #[must_use]
    pub fn has_all(self, other: Self) -> bool {
        self.contains(other)
    }

    /// Check that at least one flag in `other` is present
    #[must_use]
    pub fn has_any(self, other: Self) -> bool {
        self.intersects(other)
    }

    /// Whether forms of a completed session remain editable
    #[must_use]
    pub fn can_edit_completed_sessions(self) -> bool {
        self.contains(Self::EDIT_COMPLETED_SESSIONS)
    }

    /// Whether attendance may be marked outside the session date
    #[must_use]
    pub fn can_mark_attendance_any_day(self) -> bool {
        self.contains(Self::MARK_ATTENDANCE_ANY_DAY)
    }
}

/// Roles known to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Club administrator
    Admin,
    /// Team coach
    Coach,
    /// Player viewing their own data
    Player,
}

impl UserRole {
    /// Canonical string form, as sent by the backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Coach => "Coach",
            Self::Player => "Player",
        }
    }

    /// Capabilities implied by this role
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::Admin => Capabilities::ADMIN_DEFAULT,
            Self::Coach | Self::Player => Capabilities::empty(),
        }
    }

    /// Whether this role is an administrator
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "coach" => Ok(Self::Coach),
            "player" => Ok(Self::Player),
            other => Err(AppError::invalid_input(format!("unknown role: {other}"))),
        }
    }
}

/// The user on whose behalf the workflow is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Role of the user
    pub role: UserRole,
}

impl Actor {
    /// Create an actor with the given role
    #[must_use]
    pub const fn new(role: UserRole) -> Self {
        Self { role }
    }

    /// Capabilities to inject into the workflow gate
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }
}
