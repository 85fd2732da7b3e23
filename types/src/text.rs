//! Small pure text helpers.

use thiserror::Error;

/// True for the empty string and for strings made only of whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// An age edit that contained something other than a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("age accepts digits only, got {found:?} at char {index}")]
pub struct AgeRejected {
    pub found: char,
    pub index: usize,
}

/// Accept `text` as an age value only if every char is an ASCII digit.
///
/// The empty string is accepted so the field can be cleared.
pub fn validate_age(text: &str) -> Result<(), AgeRejected> {
    match text.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, found)) => Err(AgeRejected { found, index }),
        None => Ok(()),
    }
}

/// Join items into an English list.
///
/// - one item: `A`
/// - two items: `A and B`
/// - three or more: `A, B, and C` (serial comma)
///
/// An empty slice yields an empty string.
#[must_use]
pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}
