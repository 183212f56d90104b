//! Host-facing highlight engine.
//!
//! Everything in this crate is glue between the pure scanning/color logic
//! and whatever surface renders the decorations:
//!
//! - [`host`]: the [`DecorationHost`] capability trait
//! - [`document`]: the active document value the engine scans
//! - [`debounce`]: the single-slot cancel-and-replace rescan timer
//! - [`engine`]: the [`HighlightEngine`] driving immediate and debounced
//!   rescans
//! - [`preview`]: an ANSI terminal renderer and a retaining host
//!   implementation
//!
//! The engine owns no decoration resources itself; each rescan asks the
//! host to drop the previous set before applying the fresh one, so repeated
//! scans never accumulate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod debounce;
pub mod document;
pub mod engine;
pub mod host;
pub mod preview;

// Re-export commonly used types at the crate root for convenience
pub use debounce::{RescanScheduler, EDIT_DEBOUNCE_MS};
pub use document::ActiveDocument;
pub use engine::HighlightEngine;
pub use host::DecorationHost;
pub use preview::{render_document, PreviewHost};
