//! The active document the engine scans.

use huelight_scan::{is_supported, language_from_path};
use std::path::Path;

/// A snapshot of the host's currently active document.
///
/// Holds only what scanning needs: the language id (which gates whether the
/// engine runs at all) and the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    language_id: String,
    text: String,
}

impl ActiveDocument {
    /// Creates a document with an explicit language id.
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    /// Creates a document classified by its file path's extension.
    ///
    /// Returns `None` for paths that do not map to a style-sheet language.
    pub fn for_path(path: impl AsRef<Path>, text: impl Into<String>) -> Option<Self> {
        language_from_path(path).map(|language_id| Self::new(language_id, text))
    }

    /// The document's language id.
    #[inline]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// The full document text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the document text, keeping the language id.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns true if this document's language is in the allow-list.
    pub fn is_supported(&self) -> bool {
        is_supported(&self.language_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_gating() {
        assert!(ActiveDocument::new("css", "").is_supported());
        assert!(ActiveDocument::new("tailwindcss", "").is_supported());
        assert!(!ActiveDocument::new("rust", "").is_supported());
    }

    #[test]
    fn test_for_path() {
        let doc = ActiveDocument::for_path("theme/dark.scss", "a {}").unwrap();
        assert_eq!(doc.language_id(), "scss");
        assert_eq!(doc.text(), "a {}");
        assert!(ActiveDocument::for_path("src/main.rs", "").is_none());
    }

    #[test]
    fn test_set_text() {
        let mut doc = ActiveDocument::new("css", "old");
        doc.set_text("new");
        assert_eq!(doc.text(), "new");
        assert_eq!(doc.language_id(), "css");
    }
}
