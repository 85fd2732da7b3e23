//! Grapheme-aware text edits that produce a candidate value.
//!
//! The engine never writes into a field directly: it builds the text the
//! field would hold after a keystroke and submits it to the form, which may
//! refuse it. Cursor positions are grapheme indices.

use unicode_segmentation::UnicodeSegmentation;

#[must_use]
pub(crate) fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

fn byte_index_at(text: &str, grapheme_index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(grapheme_index)
        .map_or(text.len(), |(i, _)| i)
}

/// `text` with `insert` placed at `cursor`, plus the cursor after it.
#[must_use]
pub(crate) fn insert_at(text: &str, cursor: usize, insert: &str) -> (String, usize) {
    let index = byte_index_at(text, cursor);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..index]);
    out.push_str(insert);
    out.push_str(&text[index..]);
    let cursor = (cursor + grapheme_count(insert)).min(grapheme_count(&out));
    (out, cursor)
}

/// Remove the grapheme before `cursor` (backspace).
#[must_use]
pub(crate) fn remove_before(text: &str, cursor: usize) -> Option<(String, usize)> {
    if cursor == 0 {
        return None;
    }
    let start = byte_index_at(text, cursor - 1);
    let end = byte_index_at(text, cursor);
    let mut out = text.to_string();
    out.replace_range(start..end, "");
    Some((out, cursor - 1))
}

/// Remove the grapheme at `cursor` (delete).
#[must_use]
pub(crate) fn remove_at(text: &str, cursor: usize) -> Option<String> {
    if cursor >= grapheme_count(text) {
        return None;
    }
    let start = byte_index_at(text, cursor);
    let end = byte_index_at(text, cursor + 1);
    let mut out = text.to_string();
    out.replace_range(start..end, "");
    Some(out)
}
