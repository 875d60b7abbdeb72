//! Display truncation for free-text labels.
//!
//! Only the projected display string is shortened; the stored record is
//! borrowed and never modified.

/// Appended to any label that was cut
pub const TRUNCATION_MARKER: &str = "...";

/// Collapse whitespace and cut `text` to at most `budget` characters.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-glyph.
pub fn truncate_label(text: &str, budget: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let length = collapsed.chars().count();
    if length <= budget {
        return collapsed;
    }

    let marker_len = TRUNCATION_MARKER.chars().count();
    if budget <= marker_len {
        return collapsed.chars().take(budget).collect();
    }

    let kept: String = collapsed.chars().take(budget - marker_len).collect();
    format!("{}{}", kept.trim_end(), TRUNCATION_MARKER)
}

/// Truncate an optional field, mapping blanks to `None`
pub fn truncate_opt(text: Option<&str>, budget: usize) -> Option<String> {
    text.map(|t| truncate_label(t, budget))
        .filter(|t| !t.is_empty())
}
