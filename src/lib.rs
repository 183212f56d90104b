//! Huelight: inline HSL color highlighting for style-sheet documents.
//!
//! This crate ties together the three member crates:
//! - Pure HSL/RGB color math and WCAG contrast resolution
//! - Regex-based detection of HSL triples in lines of text
//! - A host-facing engine with debounced rescans and an ANSI preview
//!
//! # Example
//!
//! ```
//! use huelight::prelude::*;
//!
//! let css = "--accent: 120 100% 50%;\nbody { color: hsl(240, 50%, 50%); }\n";
//! let decorations = decorate_document(css);
//! assert_eq!(decorations.len(), 2);
//!
//! let first = decorations.iter().next().unwrap();
//! assert_eq!(first.background, "hsl(120, 100%, 50%)");
//! assert_eq!(first.foreground, TextColor::Black);
//! ```

pub use huelight_color as color;
pub use huelight_engine as engine;
pub use huelight_scan as scan;

pub mod prelude {
    //! Commonly used types, re-exported in one place.
    pub use huelight_color::{contrast_ratio, Hsl, HslParseError, Rgb, TextColor};
    pub use huelight_engine::{
        render_document, ActiveDocument, DecorationHost, HighlightEngine, PreviewHost,
        RescanScheduler,
    };
    pub use huelight_scan::{
        decorate_document, decorate_line, find_color_triples, is_supported, ByteRange,
        ColorMatch, Decoration, DecorationSet,
    };
}
