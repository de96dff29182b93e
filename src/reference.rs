//! Parsing of human-written verse references.
//!
//! A reference such as `"John 3:16"`, `"Romans 8:28-30"`, or
//! `"Song of Solomon 2"` is split into its book name, chapter, and verse
//! range. Parsing is total: malformed input degrades to empty chapter and
//! verse-range fields instead of failing, and the book name is never
//! checked against the canonical table here; rejecting an unresolved
//! book is the caller's job.

/// A reference split into its parts.
///
/// `chapter` is a decimal digit string or empty. `verse_range` is empty
/// (whole chapter), a single verse number, or two numbers joined by a
/// hyphen (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Book name as written, with surrounding whitespace collapsed.
    pub book: String,
    /// Chapter number as a string, or empty when absent.
    pub chapter: String,
    /// Requested verse subset, or empty for the whole chapter.
    pub verse_range: String,
}

/// Splits a free-text reference into book, chapter, and verse range.
///
/// Book names may contain spaces ("Song of Solomon"), so the leading
/// tokens up to the first colon-bearing token form the book. A trailing
/// `chapter:verses` token supplies the remaining fields; a bare trailing
/// number ("John 3") is pulled back out of the book by a final
/// disambiguation pass. That pass always runs last and overwrites any
/// chapter assigned earlier; keep that order, since it is what resolves a
/// colon-free "<book> <chapter>" input.
pub fn parse(reference: &str) -> ParsedReference {
    let tokens: Vec<&str> = reference.split_whitespace().collect();

    let mut book = tokens
        .iter()
        .take_while(|token| !token.contains(':'))
        .copied()
        .collect::<Vec<&str>>()
        .join(" ");
    let mut chapter = String::new();
    let mut verse_range = String::new();

    if let Some(last) = tokens.last() {
        if last.contains(':') {
            // "3:16" or "3:16:junk"; anything past the second part is dropped.
            let mut parts = last.split(':');
            chapter = parts.next().unwrap_or_default().to_string();
            verse_range = parts.next().unwrap_or_default().to_string();
        } else if tokens.len() > 1 {
            chapter = last.to_string();
        }
    }

    // The book may have swallowed a trailing chapter number ("John 3" has
    // no colon token, so step one consumed the "3"). Move it back out.
    if let Some(pos) = book.rfind(' ') {
        let tail = &book[pos + 1..];
        if tail.parse::<u32>().is_ok() {
            chapter = tail.to_string();
            book.truncate(pos);
        }
    }

    ParsedReference {
        book,
        chapter,
        verse_range,
    }
}
