//! Filtering a chapter down to a requested verse range.

use crate::verse::Verse;

/// Returns the verses selected by `verse_range`, preserving input order.
///
/// An empty range keeps the whole chapter; a single number ("16") keeps
/// the verse with that `verse_id`; a hyphenated pair ("28-30") keeps the
/// inclusive range. Sides that fail to parse as base-10 integers are
/// dropped rather than rejected, so `"3-"` behaves like `"3"`, and
/// anything without one or two numeric sides falls back to the whole
/// chapter unchanged.
///
/// Matching is by `verse_id` value, never by position: editions that omit
/// verses leave holes in the numbering, so the ids in a chapter are unique
/// and ordered but not necessarily contiguous from 1.
pub fn filter_verses(verses: &[Verse], verse_range: &str) -> Vec<Verse> {
    let bounds: Vec<u32> = verse_range
        .split('-')
        .filter_map(|part| part.parse().ok())
        .collect();

    match bounds.as_slice() {
        [verse] => verses
            .iter()
            .filter(|v| v.verse_id == *verse)
            .cloned()
            .collect(),
        [start, end] => verses
            .iter()
            .filter(|v| *start <= v.verse_id && v.verse_id <= *end)
            .cloned()
            .collect(),
        // no usable bounds
        _ => verses.to_vec(),
    }
}
