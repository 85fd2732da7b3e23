//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

use crate::Field;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
}

/// Fixed text shown in the card header when a field is blank.
#[must_use]
pub const fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Hobby => "Hobby",
        Field::Age => "Age",
    }
}

/// Hint shown under the age input while the card is editable.
pub const AGE_HINT: &str = "Numbers only";
