//! ANSI terminal preview rendering.
//!
//! Paints decorated ranges with 24-bit SGR escape sequences so the
//! highlighting pipeline can be seen (and tested) without an editor.

use crate::host::DecorationHost;
use huelight_color::Hsl;
use huelight_scan::{Decoration, DecorationSet};
use parking_lot::Mutex;

/// SGR reset sequence.
const RESET: &str = "\x1b[0m";

/// Renders a document with its decorations as an ANSI-escaped string.
///
/// Each decorated range is painted with its HSL background and the chosen
/// foreground. Undecorated text passes through untouched. A decoration
/// whose background string fails to parse is rendered as plain text
/// (skipped, never an error).
pub fn render_document(text: &str, decorations: &DecorationSet) -> String {
    let mut out = String::with_capacity(text.len());
    for (line_no, line) in text.lines().enumerate() {
        if line_no > 0 {
            out.push('\n');
        }
        render_line(&mut out, line_no, line, decorations);
    }
    // Keep the trailing-newline presence of the source.
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Renders one line, relying on the set's scan order (left to right).
fn render_line(out: &mut String, line_no: usize, line: &str, decorations: &DecorationSet) {
    let mut pos = 0;
    for decoration in decorations.iter().filter(|d| d.line == line_no) {
        if decoration.range.start < pos
            || decoration.range.end > line.len()
            || !line.is_char_boundary(decoration.range.start)
            || !line.is_char_boundary(decoration.range.end)
        {
            // Stale set for this text; leave the rest of the line plain.
            break;
        }
        out.push_str(&line[pos..decoration.range.start]);
        paint(out, decoration, &line[decoration.range.clone()]);
        pos = decoration.range.end;
    }
    out.push_str(&line[pos..]);
}

/// Paints one matched triple, falling back to plain text when the
/// background string does not parse back to an HSL value.
fn paint(out: &mut String, decoration: &Decoration, text: &str) {
    match decoration.background.parse::<Hsl>() {
        Ok(background) => {
            out.push_str(&background.to_rgb().to_ansi_bg());
            out.push_str(&decoration.foreground.to_rgb().to_ansi_fg());
            out.push_str(text);
            out.push_str(RESET);
        }
        Err(_) => out.push_str(text),
    }
}

/// A [`DecorationHost`] that retains the last applied set.
///
/// Doubles as the bridge between the engine and [`render_document`]: after
/// a rescan, ask it for the current set and render. Also convenient as a
/// test double.
#[derive(Debug, Default)]
pub struct PreviewHost {
    current: Mutex<Option<DecorationSet>>,
}

impl PreviewHost {
    /// Creates an empty preview host.
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    /// The most recently applied decoration set, if any.
    pub fn current(&self) -> Option<DecorationSet> {
        self.current.lock().clone()
    }

    /// Renders the given text with the current decoration set.
    pub fn render(&self, text: &str) -> String {
        match self.current.lock().as_ref() {
            Some(decorations) => render_document(text, decorations),
            None => text.to_string(),
        }
    }
}

impl DecorationHost for PreviewHost {
    fn apply_decorations(&self, decorations: &DecorationSet) {
        *self.current.lock() = Some(decorations.clone());
    }

    fn clear_decorations(&self) {
        *self.current.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huelight_scan::decorate_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_paints_matched_range() {
        let text = "--accent: 120 100% 50%;\n";
        let rendered = render_document(text, &decorate_document(text));
        assert_eq!(
            rendered,
            "--accent: \x1b[48;2;0;255;0m\x1b[38;2;0;0;0m120 100% 50%\x1b[0m;\n"
        );
    }

    #[test]
    fn test_render_dark_background_gets_white_foreground() {
        let text = "--ink: 0 0% 0%;\n";
        let rendered = render_document(text, &decorate_document(text));
        assert!(rendered.contains("\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m0 0% 0%\x1b[0m"));
    }

    #[test]
    fn test_plain_lines_unchanged() {
        let text = "body { color: red; }\n";
        let rendered = render_document(text, &decorate_document(text));
        assert_eq!(rendered, text);
    }

    #[test]
    fn test_stale_set_over_multibyte_text_renders_plain() {
        // The set was computed for different text; its range boundaries
        // land inside the multibyte characters of the new text.
        let set = decorate_document("--x: 9 9% 9%");
        let text = "ééζ9 9% 9%xx";
        assert_eq!(render_document(text, &set), text);
    }

    #[test]
    fn test_render_preserves_trailing_newline_presence() {
        let text = "--a: 120 100% 50%;";
        let rendered = render_document(text, &decorate_document(text));
        assert!(!rendered.ends_with('\n'));

        // Both host branches agree on undecorated text.
        let host = PreviewHost::new();
        host.apply_decorations(&decorate_document("abc"));
        assert_eq!(host.render("abc"), "abc");
        host.clear_decorations();
        assert_eq!(host.render("abc"), "abc");
    }

    #[test]
    fn test_preview_host_tracks_engine_protocol() {
        let host = PreviewHost::new();
        let text = "--a: 240 50% 50%;";
        let set = decorate_document(text);

        host.clear_decorations();
        host.apply_decorations(&set);
        assert_eq!(host.current(), Some(set));

        let rendered = host.render(text);
        assert!(rendered.contains("240 50% 50%"));
        assert!(rendered.contains("\x1b[48;2;"));

        host.clear_decorations();
        assert_eq!(host.current(), None);
        assert_eq!(host.render(text), text);
    }
}
