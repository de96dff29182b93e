//! Async client for the remote verse-lookup API.
//!
//! The client issues one GET per chapter request and decodes the JSON
//! array of verse records. It never retries, backs off, or caches; a
//! failed request surfaces its error to the caller directly. On top of
//! the raw chapter fetch it offers [`VerseClient::lookup_passage`], the
//! single parse-resolve-fetch-filter call a host event layer drives.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::books;
use crate::error::VerseError;
use crate::filter::filter_verses;
use crate::reference;
use crate::translation::Translation;
use crate::verse::{ChapterVerseRecord, Verse};

/// Chapters are addressed as non-empty decimal digit strings; anything
/// else would interpolate into a malformed request path.
static CHAPTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Configuration for a [`VerseClient`].
#[derive(Debug, Clone)]
pub struct VerseClientConfig {
    /// Base URL of the verse API.
    pub server_url: String,
    /// API version prefix (e.g. `v1`).
    pub api_version: String,
    /// Translation requested for chapter text.
    pub translation: Translation,
}

impl Default for VerseClientConfig {
    fn default() -> Self {
        Self {
            server_url: "https://bible-go-api.rkeplin.com".to_string(),
            api_version: "v1".to_string(),
            translation: Translation::Niv,
        }
    }
}

/// HTTP client for the verse API.
#[derive(Debug, Clone)]
pub struct VerseClient {
    /// Client configuration.
    config: VerseClientConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl Default for VerseClient {
    fn default() -> Self {
        Self::new(VerseClientConfig::default())
    }
}

impl VerseClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: VerseClientConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Fetches all verses of one chapter.
    ///
    /// `chapter` must be a non-empty decimal digit string; anything else
    /// fails with [`VerseError::InvalidUrl`] before a request is made.
    pub async fn get_chapter(
        &self,
        book_id: u32,
        chapter: &str,
    ) -> Result<Vec<Verse>, VerseError> {
        if !CHAPTER_RE.is_match(chapter) {
            return Err(VerseError::InvalidUrl {
                book_id,
                chapter: chapter.to_string(),
            });
        }

        let url = format!(
            "{}/{}/books/{}/chapters/{}?translation={}",
            self.config.server_url,
            self.config.api_version,
            book_id,
            chapter,
            self.config.translation.code()
        );
        debug!(%url, "fetching chapter");

        let resp = self.client.get(&url).send().await?.error_for_status()?;
        let text = resp.text().await?;

        let records: Vec<ChapterVerseRecord> = serde_json::from_str(&text).map_err(|err| {
            warn!(%err, "chapter response did not match the verse-record shape");
            err
        })?;
        Ok(records.into_iter().map(Verse::from).collect())
    }

    /// Resolves a free-text reference end to end: parse, look the book
    /// up, fetch its chapter, and filter to the requested verse range.
    pub async fn lookup_passage(&self, text: &str) -> Result<Vec<Verse>, VerseError> {
        let parsed = reference::parse(text);
        let book_id = books::book_id(&parsed.book)?;
        let verses = self.get_chapter(book_id, &parsed.chapter).await?;
        Ok(filter_verses(&verses, &parsed.verse_range))
    }
}
