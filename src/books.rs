//! The canonical table of the sixty-six Bible books.
//!
//! Book names map to stable positive identifiers (Genesis=1 through
//! Revelation=66), matching the ids used by the verse API. The table is
//! immutable, built once on first access, and matched exactly: no case
//! folding, no abbreviation expansion, no fuzzy matching.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::error::VerseError;

/// Number of books in the canon.
pub const BOOK_COUNT: u32 = 66;

/// Canonical English book names, in canonical order. Index 0 is Genesis.
static BOOK_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

lazy_static! {
    /// Name-to-id index over [`BOOK_NAMES`].
    static ref BOOK_INDEX: HashMap<&'static str, u32> = {
        let mut m = HashMap::with_capacity(BOOK_NAMES.len());
        for (i, name) in BOOK_NAMES.iter().enumerate() {
            m.insert(*name, i as u32 + 1);
        }
        m
    };
}

/// Resolves a canonical book name to its identifier.
///
/// The match is exact and case-sensitive; an unrecognized name yields
/// [`VerseError::InvalidBook`]. This is the one explicit error condition
/// in the parsing core.
pub fn book_id(name: &str) -> Result<u32, VerseError> {
    BOOK_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| VerseError::InvalidBook(name.to_string()))
}

/// Returns the canonical name for a book identifier, or `None` when the
/// id falls outside 1..=66.
pub fn book_name(id: u32) -> Option<&'static str> {
    if id == 0 {
        return None;
    }
    BOOK_NAMES.get(id as usize - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_anchors() {
        assert_eq!(book_id("Genesis").unwrap(), 1);
        assert_eq!(book_id("Malachi").unwrap(), 39);
        assert_eq!(book_id("Matthew").unwrap(), 40);
        assert_eq!(book_id("John").unwrap(), 43);
        assert_eq!(book_id("Revelation").unwrap(), 66);
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(book_id("Song of Solomon").unwrap(), 22);
        assert_eq!(book_id("1 Corinthians").unwrap(), 46);
        assert_eq!(book_id("2 Thessalonians").unwrap(), 53);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(matches!(
            book_id("genesis"),
            Err(VerseError::InvalidBook(_))
        ));
        assert!(matches!(
            book_id("SONG OF SOLOMON"),
            Err(VerseError::InvalidBook(_))
        ));
    }

    #[test]
    fn test_unknown_name_reports_input() {
        match book_id("Hezekiah") {
            Err(VerseError::InvalidBook(name)) => assert_eq!(name, "Hezekiah"),
            other => panic!("expected InvalidBook, got {:?}", other),
        }
    }

    #[test]
    fn test_book_name_round_trip() {
        for id in 1..=BOOK_COUNT {
            let name = book_name(id).unwrap();
            assert_eq!(book_id(name).unwrap(), id);
        }
        assert_eq!(book_name(0), None);
        assert_eq!(book_name(67), None);
    }
}
