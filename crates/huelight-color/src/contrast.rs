//! Foreground text color resolution against HSL backgrounds.
//!
//! Decides whether black or white text is legible on a given background
//! color. The decision is a relative-luminance threshold: backgrounds at or
//! below the threshold get white text, brighter backgrounds get black text.
//! The full WCAG contrast ratio is also exposed for callers that want to
//! compare candidates explicitly, but the threshold form is canonical.

use crate::hsl::Hsl;
use crate::rgb::Rgb;
use std::fmt;

/// Relative-luminance breakpoint between white-on-dark and black-on-light.
///
/// Chosen empirically to sit at WCAG's mid-gray contrast crossover point.
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

/// The foreground text color chosen for a highlighted background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Black text, for light backgrounds.
    Black,
    /// White text, for dark backgrounds.
    White,
}

impl TextColor {
    /// Picks the legible text color for the given background.
    ///
    /// White iff the background's relative luminance is at or below
    /// [`LUMINANCE_THRESHOLD`]. Total over all finite inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelight_color::{Hsl, TextColor};
    ///
    /// // Black background needs white text.
    /// assert_eq!(
    ///     TextColor::for_background(Hsl::new(0.0, 0.0, 0.0)),
    ///     TextColor::White
    /// );
    /// // White background needs black text.
    /// assert_eq!(
    ///     TextColor::for_background(Hsl::new(0.0, 0.0, 100.0)),
    ///     TextColor::Black
    /// );
    /// ```
    pub fn for_background(background: Hsl) -> Self {
        if background.to_rgb().relative_luminance() > LUMINANCE_THRESHOLD {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Returns the hex form, `#000000` or `#FFFFFF`.
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }

    /// Returns the color as an [`Rgb`] value.
    pub const fn to_rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::BLACK,
            Self::White => Rgb::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/// Computes the WCAG contrast ratio between two colors.
///
/// Defined as `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter of the two
/// relative luminances. Ranges from 1.0 (identical) to 21.0 (black on white).
///
/// An alternate revision of the foreground decision compared this ratio
/// against both pure black and pure white and picked the larger; that form
/// is near-equivalent to the threshold in [`TextColor::for_background`] but
/// not bit-identical at the boundary, so it is provided only as a helper.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
