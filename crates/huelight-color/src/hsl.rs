//! The HSL color value type and its conversion to RGB.
//!
//! Hue is measured in degrees (nominally 0-360), saturation and lightness as
//! percentages (nominally 0-100). Values outside those ranges are accepted
//! everywhere and fed through the formulas unchanged; the conversion saturates
//! at the 8-bit channel boundary instead of failing.

use crate::error::HslParseError;
use crate::rgb::Rgb;
use std::fmt;
use std::str::FromStr;

/// An HSL color: hue in degrees, saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees (0-360).
    pub h: f64,
    /// Saturation as a percentage (0-100).
    pub s: f64,
    /// Lightness as a percentage (0-100).
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL color.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to RGB using the standard colorimetric formula.
    ///
    /// With `s == 0` the color is achromatic and all three channels equal the
    /// lightness. Otherwise the hue2rgb helper is evaluated at offsets
    /// `h + 1/3`, `h`, and `h - 1/3` for red, green, and blue respectively.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelight_color::Hsl;
    ///
    /// let red = Hsl::new(0.0, 100.0, 50.0).to_rgb();
    /// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    ///
    /// let gray = Hsl::new(0.0, 0.0, 50.0).to_rgb();
    /// assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
    /// ```
    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let (r, g, b) = if s == 0.0 {
            // Achromatic
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(scale_channel(r), scale_channel(g), scale_channel(b))
    }

    /// Formats the color as a CSS `hsl()` function string.
    ///
    /// ```
    /// use huelight_color::Hsl;
    ///
    /// assert_eq!(Hsl::new(240.0, 50.0, 50.0).css(), "hsl(240, 50%, 50%)");
    /// ```
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// Maps a wrapped fractional hue offset to a single channel value.
///
/// The piecewise mapping over the six 1/6-width hue sectors. `t` is wrapped
/// into the unit interval with a single adjustment step, matching the
/// conventional formulation.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scales a unit-interval channel to 8 bits, rounding to nearest.
///
/// The `as` cast saturates, so out-of-range HSL inputs still produce a
/// channel in 0-255.
#[inline]
fn scale_channel(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl FromStr for Hsl {
    type Err = HslParseError;

    /// Parses either surface syntax of a single HSL value.
    ///
    /// Accepts the functional form `hsl(240, 50%, 50%)` and the bare
    /// custom-property form `120 100% 50%`. Percent signs on saturation and
    /// lightness are optional here; the matcher is stricter.
    ///
    /// ```
    /// use huelight_color::Hsl;
    ///
    /// let a: Hsl = "hsl(240, 50%, 50%)".parse().unwrap();
    /// let b: Hsl = "240 50% 50%".parse().unwrap();
    /// assert_eq!(a, b);
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HslParseError::EmptyInput);
        }

        let body = trimmed
            .strip_prefix("hsl(")
            .map(|rest| rest.strip_suffix(')').unwrap_or(rest))
            .unwrap_or(trimmed);

        let components: Vec<&str> = body
            .split([',', ' ', '\t'])
            .filter(|token| !token.is_empty())
            .collect();

        if components.len() != 3 {
            return Err(HslParseError::ComponentCount(components.len()));
        }

        let parse = |token: &str| -> Result<f64, HslParseError> {
            token
                .trim_end_matches('%')
                .parse::<f64>()
                .map_err(|_| HslParseError::InvalidComponent(token.to_string()))
        };

        Ok(Self::new(
            parse(components[0])?,
            parse(components[1])?,
            parse(components[2])?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_achromatic_mid_gray() {
        assert_eq!(Hsl::new(0.0, 0.0, 50.0).to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_achromatic_ignores_hue() {
        // With zero saturation every hue collapses to the same gray.
        for h in [0.0, 33.3, 120.0, 240.0, 359.9, 720.0] {
            let rgb = Hsl::new(h, 0.0, 25.0).to_rgb();
            let expected = (0.25_f64 * 255.0).round() as u8;
            assert_eq!(rgb, Rgb::new(expected, expected, expected), "hue {h}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
        // Full lightness washes out any hue.
        assert_eq!(
            Hsl::new(255.0, 100.0, 100.0).to_rgb(),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn test_out_of_range_inputs_do_not_panic() {
        // The conversion is total; it saturates instead of failing.
        let _ = Hsl::new(-90.0, 250.0, 180.0).to_rgb();
        let _ = Hsl::new(9999.0, -40.0, -10.0).to_rgb();
    }

    #[test]
    fn test_css_formatting() {
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).css(), "hsl(120, 100%, 50%)");
        assert_eq!(Hsl::new(0.5, 33.3, 66.6).css(), "hsl(0.5, 33.3%, 66.6%)");
    }

    #[test]
    fn test_parse_functional_form() {
        let hsl: Hsl = "hsl(240, 50%, 50%)".parse().unwrap();
        assert_eq!(hsl, Hsl::new(240.0, 50.0, 50.0));
    }

    #[test]
    fn test_parse_bare_form() {
        let hsl: Hsl = "120 100% 50%".parse().unwrap();
        assert_eq!(hsl, Hsl::new(120.0, 100.0, 50.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Hsl>(), Err(HslParseError::EmptyInput));
        assert_eq!(
            "120 100%".parse::<Hsl>(),
            Err(HslParseError::ComponentCount(2))
        );
        assert_eq!(
            "a b% c%".parse::<Hsl>(),
            Err(HslParseError::InvalidComponent("a".to_string()))
        );
    }
}
