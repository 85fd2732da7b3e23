//! Core domain types for Cardfolio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod notice;
mod text;
pub mod ui;

pub use notice::{MissingFields, Notice};
pub use text::{AgeRejected, is_blank, join_with_and, validate_age};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Fields
// ============================================================================

/// One of the three profile fields, in display and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Hobby,
    Age,
}

impl Field {
    /// Fixed order used for focus cycling and for the missing-field summary.
    pub const ALL: [Self; 3] = [Self::Name, Self::Hobby, Self::Age];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Hobby => "Hobby",
            Self::Age => "Age",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Hobby,
            Self::Hobby => Self::Age,
            Self::Age => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Age,
            Self::Hobby => Self::Name,
            Self::Age => Self::Hobby,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Mode
// ============================================================================

/// Whether the card accepts edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Editable,
    Locked,
}

impl Mode {
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Editable)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editable => "editable",
            Self::Locked => "locked",
        }
    }
}

// ============================================================================
// Commit policy
// ============================================================================

/// How a commit request behaves when the form is incomplete.
///
/// The card went through three iterations: a save button that is simply
/// disabled until every field is filled, a button that silently ignores
/// incomplete saves, and one that reports the missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Commit is unavailable while any field is blank.
    DisableWhenIncomplete,
    /// Commit is always available; incomplete commits are ignored.
    SilentGuard,
    /// Incomplete commits report the missing fields; complete ones confirm the save.
    #[default]
    Messaging,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown commit policy: {0:?}")]
pub struct UnknownCommitPolicy(pub String);

impl CommitPolicy {
    pub const ALL: [Self; 3] = [
        Self::DisableWhenIncomplete,
        Self::SilentGuard,
        Self::Messaging,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisableWhenIncomplete => "disable_when_incomplete",
            Self::SilentGuard => "silent_guard",
            Self::Messaging => "messaging",
        }
    }

    /// Whether this policy surfaces notices at all.
    #[must_use]
    pub const fn reports(self) -> bool {
        matches!(self, Self::Messaging)
    }

    /// Parse a policy name, accepting `-` in place of `_` and any ASCII case.
    pub fn parse(raw: &str) -> Result<Self, UnknownCommitPolicy> {
        let needle = raw.trim().to_ascii_lowercase().replace('-', "_");
        match needle.as_str() {
            "disable_when_incomplete" | "disabled" => Ok(Self::DisableWhenIncomplete),
            "silent_guard" | "silent" => Ok(Self::SilentGuard),
            "messaging" | "message" => Ok(Self::Messaging),
            _ => Err(UnknownCommitPolicy(raw.to_string())),
        }
    }
}

impl FromStr for CommitPolicy {
    type Err = UnknownCommitPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
