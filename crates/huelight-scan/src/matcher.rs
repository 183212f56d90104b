//! Detection of HSL numeric triples in lines of text.
//!
//! Two surface syntaxes are recognized:
//!
//! 1. Space-separated custom-property style: `120 100% 50%`, optionally
//!    preceded by `hsl(` or a `--custom-property:` prefix.
//! 2. Comma-separated functional style: `hsl(240, 50%, 50%)`.
//!
//! The reported range covers exactly the three numeric/percentage tokens,
//! never the `hsl(` or custom-property prefix. No range validation is done
//! on the numbers; out-of-range hue or percentages pass through to the
//! contrast resolver unchanged.

use huelight_color::Hsl;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::trace;

/// A byte range within a single line of text.
pub type ByteRange = Range<usize>;

/// Matches an optional `hsl(` or `--name:` prefix followed by three numeric
/// tokens, the last two percent-suffixed, separated by whitespace or commas.
static HSL_TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:hsl\(|--[\w-]+:\s*)?([\d.]+)[,\s]+([\d.]+)%[,\s]+([\d.]+)%")
        .expect("HSL triple pattern is valid")
});

/// A single HSL triple found in a line of text.
///
/// Borrows from the scanned line; produced fresh per scan and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch<'a> {
    /// The exact matched triple text, prefix excluded (e.g. `120 100% 50%`
    /// or `240, 50%, 50%`).
    pub text: &'a str,
    /// Raw hue token as written in the source.
    pub hue: &'a str,
    /// Raw saturation token, without the `%` suffix.
    pub saturation: &'a str,
    /// Raw lightness token, without the `%` suffix.
    pub lightness: &'a str,
    /// The parsed color value.
    pub hsl: Hsl,
    /// Byte range of the triple within the line.
    pub range: ByteRange,
}

impl ColorMatch<'_> {
    /// Reconstructs the CSS `hsl()` background string from the raw tokens.
    ///
    /// Uses the tokens as written rather than re-formatted floats, so
    /// `hsl(120.0, ...)` never appears where the source said `120`.
    pub fn css_background(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }

    /// Returns the length of the matched triple in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Returns true if the match is empty (never the case for real matches).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lazy iterator over the HSL triples in one line.
///
/// Yields matches left to right with standard global-regex semantics: the
/// scan position advances past each match, so reported matches never
/// overlap.
pub struct Matches<'a> {
    line: &'a str,
    inner: regex::CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = ColorMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let caps = self.inner.next()?;
            // Groups 1-3 always participate when the pattern matches.
            let hue = caps.get(1)?;
            let saturation = caps.get(2)?;
            let lightness = caps.get(3)?;

            // `[\d.]+` can still fail to parse (e.g. `1.2.3`); skip such
            // matches rather than surfacing an error, a malformed document
            // must never destabilize the host.
            let parsed = (
                hue.as_str().parse::<f64>(),
                saturation.as_str().parse::<f64>(),
                lightness.as_str().parse::<f64>(),
            );
            let (Ok(h), Ok(s), Ok(l)) = parsed else {
                trace!(matched = caps.get(0).map(|m| m.as_str()), "skipping unparseable triple");
                continue;
            };

            // The triple starts at the hue token, which excludes any
            // `hsl(` or custom-property prefix from the range.
            let start = hue.start();
            let end = caps.get(0)?.end();

            return Some(ColorMatch {
                text: &self.line[start..end],
                hue: hue.as_str(),
                saturation: saturation.as_str(),
                lightness: lightness.as_str(),
                hsl: Hsl::new(h, s, l),
                range: start..end,
            });
        }
    }
}

/// Finds every HSL triple in a line of text.
///
/// Returns a lazy iterator; nothing is scanned until it is polled.
///
/// # Examples
///
/// ```
/// use huelight_scan::find_color_triples;
///
/// let triples: Vec<_> = find_color_triples("hsl(0, 100%, 50%)").collect();
/// assert_eq!(triples.len(), 1);
/// assert_eq!(triples[0].hue, "0");
/// ```
pub fn find_color_triples(line: &str) -> Matches<'_> {
    Matches {
        line,
        inner: HSL_TRIPLE.captures_iter(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triples(line: &str) -> Vec<(String, String, String)> {
        find_color_triples(line)
            .map(|m| {
                (
                    m.hue.to_string(),
                    m.saturation.to_string(),
                    m.lightness.to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_three_matches_in_order() {
        let line = "hsl(0, 100%, 50%); --custom-color: 120 100% 50%; hsl(240, 50%, 50%)";
        assert_eq!(
            triples(line),
            vec![
                ("0".into(), "100".into(), "50".into()),
                ("120".into(), "100".into(), "50".into()),
                ("240".into(), "50".into(), "50".into()),
            ]
        );
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(find_color_triples("color: red;").count(), 0);
        assert_eq!(find_color_triples("").count(), 0);
    }

    #[test]
    fn test_custom_property_prefix_excluded_from_range() {
        let line = "--foo: 120 100% 50%;";
        let m = find_color_triples(line).next().unwrap();
        assert_eq!(m.text, "120 100% 50%");
        assert_eq!(&line[m.range.clone()], "120 100% 50%");
        assert_eq!(m.len(), "120 100% 50%".len());
    }

    #[test]
    fn test_functional_prefix_excluded_from_range() {
        let line = "background: hsl(240, 50%, 50%);";
        let m = find_color_triples(line).next().unwrap();
        assert_eq!(m.text, "240, 50%, 50%");
        assert_eq!(&line[m.range.clone()], "240, 50%, 50%");
    }

    #[test]
    fn test_separator_styles_produce_different_lengths() {
        let spaced = find_color_triples("10 20% 30%").next().unwrap();
        let comma = find_color_triples("hsl(10, 20%, 30%)").next().unwrap();
        assert_eq!(spaced.len(), "10 20% 30%".len());
        assert_eq!(comma.len(), "10, 20%, 30%".len());
        assert_eq!(spaced.hsl, comma.hsl);
    }

    #[test]
    fn test_decimal_tokens() {
        let m = find_color_triples("217.2 32.6% 17.5%").next().unwrap();
        assert_eq!(m.hsl, Hsl::new(217.2, 32.6, 17.5));
        assert_eq!(m.css_background(), "hsl(217.2, 32.6%, 17.5%)");
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        // The matcher does no range validation.
        let m = find_color_triples("999 250% 150%").next().unwrap();
        assert_eq!(m.hsl, Hsl::new(999.0, 250.0, 150.0));
    }

    #[test]
    fn test_unparseable_token_is_skipped() {
        // `1.2.3` matches the character class but is not a number.
        assert_eq!(find_color_triples("1.2.3 100% 50%").count(), 0);
        // A later well-formed triple on the same line still matches.
        let line = "1.2.3 100% 50%; hsl(10, 20%, 30%)";
        let found: Vec<_> = find_color_triples(line).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hue, "10");
    }

    #[test]
    fn test_css_background_uses_raw_tokens() {
        let m = find_color_triples("--accent: 120 100% 50%;").next().unwrap();
        assert_eq!(m.css_background(), "hsl(120, 100%, 50%)");
    }

    #[test]
    fn test_matches_are_lazy_and_resumable() {
        let line = "0 1% 2% and 3 4% 5%";
        let mut it = find_color_triples(line);
        assert_eq!(it.next().unwrap().hue, "0");
        assert_eq!(it.next().unwrap().hue, "3");
        assert!(it.next().is_none());
    }
}
