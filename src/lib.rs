//! Lookup of Bible passages from human-written references.
//!
//! This crate provides the pieces needed to turn free text like
//! `"John 3:16"` or `"Romans 8:28-30"` into verse text:
//!
//! 1. **[`reference::parse`]**: splits a reference into book name,
//!    chapter, and verse range. Total: malformed input degrades to
//!    empty fields instead of failing.
//! 2. **[`books::book_id`]**: resolves a canonical English book name to
//!    its 1..=66 identifier (exact, case-sensitive match).
//! 3. **[`VerseClient`]**: fetches a chapter from the remote verse API
//!    in a chosen [`Translation`] and decodes it into [`Verse`] values.
//! 4. **[`filter::filter_verses`]**: reduces a chapter to the requested
//!    verse subset, matching on verse number, inclusive at both ends.
//!
//! Parsing, lookup, and filtering are pure and synchronous; only the
//! chapter fetch is async. The crate installs no retry, caching, or
//! UI behavior; a host drives [`VerseClient::lookup_passage`] from
//! whatever event layer it likes.
//!
//! # Usage
//!
//! ```no_run
//! use scriptura::{VerseClient, VerseError};
//!
//! # async fn example() -> Result<(), VerseError> {
//! let client = VerseClient::default();
//! let verses = client.lookup_passage("Romans 8:28-30").await?;
//! for verse in &verses {
//!     println!("{} {}", verse.verse_id, verse.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The parsing core works without any network access:
//!
//! ```
//! use scriptura::reference;
//!
//! let parsed = reference::parse("Song of Solomon 2:1");
//! assert_eq!(parsed.book, "Song of Solomon");
//! assert_eq!(parsed.chapter, "2");
//! assert_eq!(parsed.verse_range, "1");
//! ```

pub mod books;
pub mod client;
pub mod error;
pub mod filter;
pub mod reference;
pub mod translation;
pub mod verse;

pub use client::{VerseClient, VerseClientConfig};
pub use error::VerseError;
pub use filter::filter_verses;
pub use reference::{parse, ParsedReference};
pub use translation::Translation;
pub use verse::Verse;
