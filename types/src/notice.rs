//! User-facing notices produced by a commit.
//!
//! A notice is shown once (as a toast) and never stored in form state.

use std::fmt;

use crate::{Field, join_with_and};

/// Ordered, non-empty list of fields that were blank at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(Vec<Field>);

impl MissingFields {
    /// Returns `None` when nothing is missing.
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Option<Self> {
        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    /// Labels joined as an English list, e.g. `Name, Hobby, and Age`.
    #[must_use]
    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self.0.iter().map(|field| field.label()).collect();
        join_with_and(&labels)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The card was locked after a complete commit.
    Saved,
    /// A commit was refused because some fields were blank.
    Incomplete(MissingFields),
}

impl Notice {
    pub const SAVED_TEXT: &'static str = "Profile saved";

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => f.write_str(Self::SAVED_TEXT),
            Self::Incomplete(missing) => write!(f, "Please fill: {}", missing.summary()),
        }
    }
}
