//! The capability interface a rendering host implements.

use huelight_scan::DecorationSet;

/// A surface that can render decorations over the active document.
///
/// The engine drives this trait and nothing else; implementations own all
/// rendering resources. `clear_decorations` is always called before a fresh
/// `apply_decorations`, and once more on shutdown, so a host that disposes
/// its previous overlays in `clear_decorations` never leaks them.
pub trait DecorationHost: Send + Sync {
    /// Renders the given decoration set over the active document.
    fn apply_decorations(&self, decorations: &DecorationSet);

    /// Drops all decorations previously applied by this host.
    fn clear_decorations(&self);
}
