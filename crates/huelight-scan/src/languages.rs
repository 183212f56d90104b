//! Supported-language registry.
//!
//! The highlighter only runs over style-sheet documents. The host gates
//! scans on the document's language id; path and extension lookups are
//! provided for hosts that classify files themselves.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::path::Path;

/// Language ids the highlighter runs for.
pub const SUPPORTED_LANGUAGES: &[&str] = &["css", "scss", "less", "postcss", "tailwindcss"];

/// File extension to language id mapping.
static EXTENSION_MAP: Lazy<AHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = AHashMap::new();
    m.insert("css", "css");
    m.insert("scss", "scss");
    m.insert("sass", "scss");
    m.insert("less", "less");
    m.insert("pcss", "postcss");
    m.insert("postcss", "postcss");
    m
});

/// Returns true if the given language id is in the allow-list.
///
/// # Examples
///
/// ```
/// use huelight_scan::is_supported;
///
/// assert!(is_supported("scss"));
/// assert!(!is_supported("rust"));
/// ```
pub fn is_supported(language_id: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language_id)
}

/// Looks up the language id for a file extension.
pub fn language_from_extension(extension: &str) -> Option<&'static str> {
    EXTENSION_MAP.get(extension).copied()
}

/// Looks up the language id for a file path by its extension.
pub fn language_from_path(path: impl AsRef<Path>) -> Option<&'static str> {
    let path = path.as_ref();
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_from_extension)
}
