//! Text helpers

use std::borrow::Cow;

/// Number of characters of a description shown on a product card.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Marker appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Truncate a card description to [`DESCRIPTION_LIMIT`] characters.
///
/// Counts characters rather than bytes. Text at or under the limit is borrowed
/// unchanged.
pub fn truncate_description(text: &str) -> Cow<'_, str> {
    truncate_chars(text, DESCRIPTION_LIMIT)
}

/// Truncate `text` to `limit` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate_chars(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", text.get(..cut).unwrap_or(text))),
        None => Cow::Borrowed(text),
    }
}
