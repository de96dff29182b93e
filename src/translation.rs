//! Recognized Bible translations.
//!
//! The verse API serves a fixed set of English translations addressed by
//! short code. Requests default to NIV unless the caller overrides the
//! translation in its client configuration.

use std::fmt;

/// A translation recognized by the verse API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Translation {
    /// New International Version.
    #[default]
    Niv,
    /// King James Version.
    Kjv,
    /// New Living Translation.
    Nlt,
    /// American Standard Version.
    Asv,
    /// English Standard Version.
    Esv,
}

impl Translation {
    /// All recognized translations, in display order.
    pub fn all() -> &'static [Translation] {
        &[
            Translation::Niv,
            Translation::Kjv,
            Translation::Nlt,
            Translation::Asv,
            Translation::Esv,
        ]
    }

    /// The short code used in API request URLs.
    pub fn code(self) -> &'static str {
        match self {
            Translation::Niv => "NIV",
            Translation::Kjv => "KJV",
            Translation::Nlt => "NLT",
            Translation::Asv => "ASV",
            Translation::Esv => "ESV",
        }
    }

    /// The full English display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Translation::Niv => "New International Version",
            Translation::Kjv => "King James Version",
            Translation::Nlt => "New Living Translation",
            Translation::Asv => "American Standard Version",
            Translation::Esv => "English Standard Version",
        }
    }

    /// Resolves a short code to its translation. The match is exact;
    /// unrecognized codes yield `None`.
    pub fn from_code(code: &str) -> Option<Translation> {
        Translation::all()
            .iter()
            .copied()
            .find(|t| t.code() == code)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_niv() {
        assert_eq!(Translation::default(), Translation::Niv);
    }

    #[test]
    fn test_code_round_trip() {
        for &t in Translation::all() {
            assert_eq!(Translation::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Translation::from_code("niv"), None);
        assert_eq!(Translation::from_code("RSV"), None);
        assert_eq!(Translation::from_code(""), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Translation::Kjv.display_name(), "King James Version");
        assert_eq!(Translation::Esv.display_name(), "English Standard Version");
        assert_eq!(Translation::Niv.to_string(), "NIV");
    }
}
