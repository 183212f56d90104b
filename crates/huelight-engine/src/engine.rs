//! The highlight engine driving immediate and debounced rescans.

use crate::debounce::RescanScheduler;
use crate::document::ActiveDocument;
use crate::host::DecorationHost;
use huelight_scan::decorate_document;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Drives rescans of the active document and hands decorations to the host.
///
/// Lifecycle mapping for a hosting editor:
/// - active document changed → [`open_document`](Self::open_document)
///   (immediate rescan)
/// - document text changed → [`edit_document`](Self::edit_document)
///   (debounced rescan, last edit wins)
/// - extension deactivated → [`shutdown`](Self::shutdown)
///
/// Cloning is cheap and shares the same engine state.
#[derive(Debug)]
pub struct HighlightEngine<H: DecorationHost> {
    inner: Arc<EngineInner<H>>,
}

impl<H: DecorationHost> Clone for HighlightEngine<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct EngineInner<H> {
    host: H,
    document: RwLock<Option<ActiveDocument>>,
    scheduler: RescanScheduler,
}

impl<H: DecorationHost + 'static> HighlightEngine<H> {
    /// Creates an engine with the default edit debounce delay.
    pub fn new(host: H) -> Self {
        Self::with_debounce(host, Duration::from_millis(crate::debounce::EDIT_DEBOUNCE_MS))
    }

    /// Creates an engine with a custom edit debounce delay.
    pub fn with_debounce(host: H, delay: Duration) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                host,
                document: RwLock::new(None),
                scheduler: RescanScheduler::new(delay),
            }),
        }
    }

    /// Access to the underlying host.
    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Replaces the active document and rescans immediately.
    ///
    /// Any rescan still pending for the previous document is cancelled
    /// first; switching documents is never debounced.
    pub fn open_document(&self, document: ActiveDocument) {
        self.inner.scheduler.cancel();
        *self.inner.document.write() = Some(document);
        self.inner.rescan();
    }

    /// Replaces the active document's text and schedules a debounced rescan.
    ///
    /// A newer edit arriving before the timer fires cancels and replaces the
    /// pending rescan. No-op when no document is open.
    ///
    /// Must be called from within a tokio runtime.
    pub fn edit_document(&self, text: impl Into<String>) {
        {
            let mut document = self.inner.document.write();
            let Some(document) = document.as_mut() else {
                trace!("edit with no open document, ignoring");
                return;
            };
            document.set_text(text);
        }

        let inner = Arc::clone(&self.inner);
        self.inner.scheduler.schedule(async move {
            inner.rescan();
        });
    }

    /// Rescans the active document right now, cancelling any pending timer.
    pub fn rescan_now(&self) {
        self.inner.scheduler.cancel();
        self.inner.rescan();
    }

    /// Returns true if an edit-triggered rescan is still pending.
    pub fn has_pending_rescan(&self) -> bool {
        self.inner.scheduler.has_pending()
    }

    /// Cancels pending work and asks the host to drop all decorations.
    pub fn shutdown(&self) {
        self.inner.scheduler.cancel();
        self.inner.host.clear_decorations();
    }
}

impl<H: DecorationHost> EngineInner<H> {
    /// Scans the active document and replaces the host's decorations.
    ///
    /// Skips entirely when no document is open or its language is not in
    /// the allow-list. The previous set is always cleared before the fresh
    /// one is applied, so decorations never accumulate across scans.
    fn rescan(&self) {
        let document = self.document.read();
        let Some(document) = document.as_ref() else {
            return;
        };
        if !document.is_supported() {
            trace!(
                language = document.language_id(),
                "language not supported, skipping scan"
            );
            return;
        }

        let decorations = decorate_document(document.text());
        debug!(
            language = document.language_id(),
            decorations = decorations.len(),
            "rescan complete"
        );

        self.host.clear_decorations();
        self.host.apply_decorations(&decorations);
    }
}
