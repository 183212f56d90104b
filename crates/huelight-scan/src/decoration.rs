//! Decoration request types and whole-document scanning.
//!
//! A [`Decoration`] is the value handed to a rendering host: a line-local
//! byte range plus the background and foreground colors to paint it with.
//! [`DecorationSet`] is the ordered result of scanning a document; scanning
//! the same text twice produces an equal set.

use crate::matcher::{find_color_triples, ByteRange};
use huelight_color::TextColor;
use smallvec::SmallVec;
use tracing::debug;

/// A request to paint one matched color value.
///
/// The range covers exactly the matched numeric triple; its length equals
/// the length of the matched substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Zero-based line number within the document.
    pub line: usize,
    /// Byte range of the triple within that line.
    pub range: ByteRange,
    /// CSS background color string, e.g. `hsl(120, 100%, 50%)`.
    pub background: String,
    /// Foreground text color chosen for legibility.
    pub foreground: TextColor,
}

impl Decoration {
    /// Returns the length of the decorated range in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Returns true if the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// The ordered set of decorations produced by one document scan.
///
/// Ordered by line, then left to right within a line (the scan order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            decorations: Vec::new(),
        }
    }

    /// Returns the decorations in scan order.
    #[inline]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Returns the number of decorations.
    #[inline]
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Appends a decoration.
    #[inline]
    pub fn push(&mut self, decoration: Decoration) {
        self.decorations.push(decoration);
    }

    /// Returns an iterator over the decorations.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter()
    }
}

impl FromIterator<Decoration> for DecorationSet {
    fn from_iter<T: IntoIterator<Item = Decoration>>(iter: T) -> Self {
        Self {
            decorations: iter.into_iter().collect(),
        }
    }
}

/// Computes the decorations for a single line.
///
/// Most lines carry at most a handful of color values, so the result is
/// collected inline.
pub fn decorate_line(line: usize, text: &str) -> SmallVec<[Decoration; 4]> {
    find_color_triples(text)
        .map(|m| Decoration {
            line,
            range: m.range.clone(),
            background: m.css_background(),
            foreground: TextColor::for_background(m.hsl),
        })
        .collect()
}

/// Scans every line of a document and collects the decoration set.
///
/// Pure over the input text: no state survives between calls, so scanning
/// unchanged text twice yields identical sets.
pub fn decorate_document(text: &str) -> DecorationSet {
    let mut set = DecorationSet::new();
    for (line, content) in text.lines().enumerate() {
        for decoration in decorate_line(line, content) {
            set.push(decoration);
        }
    }
    debug!(decorations = set.len(), "document scan complete");
    set
}
