//! HSL triple detection and decoration computation.
//!
//! This crate locates HSL color values inside lines of style-sheet text and
//! turns them into decoration requests a host can render:
//!
//! - [`matcher`]: the triple-detecting regex and the lazy per-line
//!   [`ColorMatch`] iterator
//! - [`decoration`]: [`Decoration`] / [`DecorationSet`] value types and
//!   whole-document scanning
//! - [`languages`]: the supported-language allow-list and file-extension
//!   lookup
//!
//! # Example
//!
//! ```
//! use huelight_scan::find_color_triples;
//!
//! let line = "--accent: 120 100% 50%;";
//! let m = find_color_triples(line).next().unwrap();
//! assert_eq!(m.text, "120 100% 50%");
//! assert_eq!(&line[m.range.clone()], "120 100% 50%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod decoration;
pub mod languages;
pub mod matcher;

// Re-export commonly used types at the crate root for convenience
pub use decoration::{decorate_document, decorate_line, Decoration, DecorationSet};
pub use languages::{is_supported, language_from_extension, language_from_path, SUPPORTED_LANGUAGES};
pub use matcher::{find_color_triples, ByteRange, ColorMatch, Matches};
