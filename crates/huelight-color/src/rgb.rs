//! 8-bit RGB color representation.
//!
//! [`Rgb`] values are derived deterministically from HSL inputs and carry no
//! identity beyond their channel values. Alongside the channels this module
//! provides the WCAG 2.0 relative luminance computation, hex formatting, and
//! 24-bit ANSI escape generation for terminal rendering.

use std::fmt;

/// sRGB linearization breakpoint from the WCAG 2.0 definition.
const SRGB_LINEAR_CUTOFF: f64 = 0.03928;

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

// ============================================================================
// Constructors and constants
// ============================================================================

impl Rgb {
    /// Opaque black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Opaque white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ============================================================================
// Luminance
// ============================================================================

impl Rgb {
    /// Computes the WCAG 2.0 relative luminance of this color.
    ///
    /// Each channel is normalized to the unit interval, linearized with the
    /// sRGB transfer function (`v <= 0.03928 ? v / 12.92 :
    /// ((v + 0.055) / 1.055)^2.4`), and the results are weighted
    /// 0.2126 / 0.7152 / 0.0722.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelight_color::Rgb;
    ///
    /// assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
    /// assert_eq!(Rgb::WHITE.relative_luminance(), 1.0);
    /// ```
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// Linearizes a single sRGB channel per the WCAG 2.0 formula.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= SRGB_LINEAR_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl Rgb {
    /// Formats the color as an uppercase `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Generates the ANSI escape sequence for setting this color as
    /// foreground, using 24-bit true color format: `\x1b[38;2;R;G;Bm`.
    pub fn to_ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Generates the ANSI escape sequence for setting this color as
    /// background, using 24-bit true color format: `\x1b[48;2;R;G;Bm`.
    pub fn to_ansi_bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_endpoints() {
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_channel_weights() {
        // Green dominates perceived brightness.
        let g = Rgb::new(0, 255, 0).relative_luminance();
        let r = Rgb::new(255, 0, 0).relative_luminance();
        let b = Rgb::new(0, 0, 255).relative_luminance();
        assert!(g > r && r > b);
        assert!((g - 0.7152).abs() < 1e-9);
        assert!((r - 0.2126).abs() < 1e-9);
        assert!((b - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_linear_segment() {
        // Channel value 1/255 ≈ 0.0039 is below the linear cutoff.
        let lum = Rgb::new(1, 0, 0).relative_luminance();
        let expected = 0.2126 * (1.0 / 255.0) / 12.92;
        assert!((lum - expected).abs() < 1e-12);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_ansi_escapes() {
        let c = Rgb::new(255, 128, 64);
        assert_eq!(c.to_ansi_fg(), "\x1b[38;2;255;128;64m");
        assert_eq!(c.to_ansi_bg(), "\x1b[48;2;255;128;64m");
    }
}
