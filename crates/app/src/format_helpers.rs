//! Formatting utilities for the UI layer.

/// Normalize a server-supplied due date to `YYYY-MM-DD` for display.
///
/// Accepts both plain dates and full ISO-8601 timestamps
/// (e.g. "2025-01-01T00:00:00Z") and keeps only the date part.
/// Returns the input unchanged when it doesn't look like a date.
pub fn format_due_date(date_str: &str) -> String {
    // `get` keeps non-ASCII input on the unchanged path instead of slicing
    // through a char boundary.
    let Some(candidate) = date_str.get(..10) else {
        return date_str.to_string();
    };
    let looks_like_date = candidate
        .char_indices()
        .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if looks_like_date {
        candidate.to_string()
    } else {
        date_str.to_string()
    }
}
