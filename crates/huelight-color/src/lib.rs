//! Color math for inline HSL highlighting.
//!
//! This crate provides the pure, total functions the highlighter is built on:
//!
//! - [`hsl`]: the [`Hsl`] value type and the standard HSL→RGB conversion
//! - [`rgb`]: the [`Rgb`] value type, WCAG relative luminance, hex and ANSI
//!   escape formatting
//! - [`contrast`]: the black-or-white foreground decision and the WCAG
//!   contrast ratio helper
//! - [`error`]: parse errors for textual HSL values
//!
//! Every function here is total over its finite numeric domain: out-of-range
//! hue, saturation, or lightness values are computed through the formulas
//! as-is, never rejected.
//!
//! # Examples
//!
//! ```
//! use huelight_color::{Hsl, TextColor};
//!
//! let green = Hsl::new(120.0, 100.0, 50.0);
//! assert_eq!(green.to_rgb().to_hex(), "#00FF00");
//!
//! // A bright background needs black text.
//! assert_eq!(TextColor::for_background(green), TextColor::Black);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod contrast;
pub mod error;
pub mod hsl;
pub mod rgb;

// Re-export commonly used types at the crate root for convenience
pub use contrast::{contrast_ratio, TextColor, LUMINANCE_THRESHOLD};
pub use error::HslParseError;
pub use hsl::Hsl;
pub use rgb::Rgb;
