//! Clipboard sink for exported code and the timed "Copied!" acknowledgement

use anyhow::{anyhow, Result};
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::codegen::Dialect;

/// Where copied text goes
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
///
/// The handle is kept for the life of the app; on X11 the copied text is
/// only served while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| anyhow!("failed to access clipboard: {e}"))?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text)
            .map_err(|e| anyhow!("failed to copy: {e}"))
    }
}

/// Tracks which tab was copied last and for how long to say so
pub struct CopyFeedback {
    copied: Option<(Dialect, Instant)>,
    window: Duration,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self { copied: None, window }
    }

    /// Copy `text`; failures are logged and leave the acknowledgement untouched
    pub fn copy(&mut self, sink: &mut dyn ClipboardSink, dialect: Dialect, text: &str, now: Instant) -> bool {
        match sink.set_text(text) {
            Ok(()) => {
                info!(format = %dialect, bytes = text.len(), "Copied export to clipboard");
                self.copied = Some((dialect, now));
                true
            }
            Err(err) => {
                error!(error = ?err, format = %dialect, "Failed to copy text");
                false
            }
        }
    }

    pub fn is_copied(&self, dialect: Dialect, now: Instant) -> bool {
        matches!(self.copied, Some((copied, at)) if copied == dialect && now.duration_since(at) < self.window)
    }

    /// Time until the acknowledgement reverts, if one is showing
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, at) = self.copied?;
        self.window.checked_sub(now.duration_since(at)).filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_acknowledges_for_window() {
        let mut sink = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        let start = Instant::now();

        assert!(feedback.copy(&mut sink, Dialect::Css, "a {}", start));
        assert_eq!(sink.contents.as_deref(), Some("a {}"));
        assert!(feedback.is_copied(Dialect::Css, start + Duration::from_millis(1999)));
        assert!(!feedback.is_copied(Dialect::Html, start));
        assert!(!feedback.is_copied(Dialect::Css, start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_failed_copy_shows_nothing() {
        let mut sink = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        let now = Instant::now();

        assert!(!feedback.copy(&mut sink, Dialect::Html, "<div></div>", now));
        assert!(!feedback.is_copied(Dialect::Html, now));
        assert_eq!(feedback.remaining(now), None);
    }

    #[test]
    fn test_newer_copy_replaces_older() {
        let mut sink = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        let now = Instant::now();

        feedback.copy(&mut sink, Dialect::Html, "one", now);
        feedback.copy(&mut sink, Dialect::React, "two", now);
        assert!(!feedback.is_copied(Dialect::Html, now));
        assert!(feedback.is_copied(Dialect::React, now));
        assert_eq!(sink.contents.as_deref(), Some("two"));
    }

    #[test]
    fn test_remaining() {
        let mut sink = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        let start = Instant::now();
        assert_eq!(feedback.remaining(start), None);

        feedback.copy(&mut sink, Dialect::Properties, "gap: 10", start);
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(feedback.remaining(start + Duration::from_millis(2500)), None);
    }
}
