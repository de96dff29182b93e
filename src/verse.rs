//! Verse data types: the domain value and the wire records returned by
//! the verse API.

use serde::{Deserialize, Serialize};

/// A single verse of a chapter.
///
/// Identity is `id`, assigned by the API. `verse_id` is the 1-based
/// verse number within the chapter and is the key used for range
/// filtering; within one chapter the values are unique and ordered but
/// not guaranteed contiguous from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// API-assigned verse identity.
    pub id: u32,
    /// Canonical book identifier (1..=66).
    pub book_id: u32,
    /// Chapter number within the book.
    pub chapter_id: u32,
    /// 1-based verse number within the chapter.
    pub verse_id: u32,
    /// Verse text in the requested translation.
    pub text: String,
}

/// The book object nested inside each API verse record.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    /// Canonical book identifier.
    pub id: u32,
    /// Canonical English book name.
    #[serde(default)]
    pub name: String,
    /// Testament label, e.g. `OT` or `NT`.
    #[serde(default)]
    pub testament: String,
}

/// One record of the JSON array returned by the chapter endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterVerseRecord {
    /// API-assigned verse identity.
    pub id: u32,
    /// The book this verse belongs to.
    pub book: BookRecord,
    /// Chapter number within the book.
    pub chapter_id: u32,
    /// 1-based verse number within the chapter.
    pub verse_id: u32,
    /// Verse text.
    pub verse: String,
}

impl From<ChapterVerseRecord> for Verse {
    fn from(record: ChapterVerseRecord) -> Self {
        Verse {
            id: record.id,
            book_id: record.book.id,
            chapter_id: record.chapter_id,
            verse_id: record.verse_id,
            text: record.verse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_chapter_record() {
        let json = r#"{
            "id": 43003016,
            "book": { "id": 43, "name": "John", "testament": "NT" },
            "chapterId": 3,
            "verseId": 16,
            "verse": "For God so loved the world..."
        }"#;

        let record: ChapterVerseRecord = serde_json::from_str(json).unwrap();
        let verse = Verse::from(record);
        assert_eq!(verse.id, 43003016);
        assert_eq!(verse.book_id, 43);
        assert_eq!(verse.chapter_id, 3);
        assert_eq!(verse.verse_id, 16);
        assert!(verse.text.starts_with("For God so loved"));
    }

    #[test]
    fn test_decode_tolerates_missing_book_labels() {
        // Only the book id is required; name and testament may be absent.
        let json = r#"{
            "id": 1001001,
            "book": { "id": 1 },
            "chapterId": 1,
            "verseId": 1,
            "verse": "In the beginning..."
        }"#;

        let record: ChapterVerseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.book.name, "");
        assert_eq!(record.book.testament, "");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let json = r#"{ "id": "not-a-number" }"#;
        assert!(serde_json::from_str::<ChapterVerseRecord>(json).is_err());
    }
}
