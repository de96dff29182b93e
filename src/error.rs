//! Error types for verse lookup operations.

/// Errors that can occur while resolving a reference against the verse API.
///
/// Reference parsing and verse filtering never fail; they degrade to
/// empty or unchanged output on malformed input. All hard failures live
/// on the lookup and fetch path and are reported through this enum.
#[derive(Debug, thiserror::Error)]
pub enum VerseError {
    /// The book name did not match any entry in the canonical table.
    #[error("unknown book: {0:?}")]
    InvalidBook(String),

    /// The book id or chapter string would produce a malformed request URL.
    #[error("invalid request for book {book_id}, chapter {chapter:?}")]
    InvalidUrl {
        /// Canonical book identifier (1..=66).
        book_id: u32,
        /// The chapter string that failed validation.
        chapter: String,
    },

    /// HTTP transport failure or non-success response status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected verse-record shape.
    #[error("decoding error: {0}")]
    Decoding(#[from] serde_json::Error),
}
