//! Text comparison primitives used by the scorer.

/// Lower-cases and trims outer whitespace; inner spacing is left untouched.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Returns at most `max_chars` leading characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Character-level Levenshtein distance with unit costs.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Normalized edit-distance similarity in `[0, 1]`. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b).clamp(0.0, 1.0)
}

/// Counts segments produced by splitting on single spaces.
///
/// An empty string is one segment and consecutive spaces yield empty segments,
/// so `"a  b"` counts as three.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}
