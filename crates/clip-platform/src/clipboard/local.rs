use super::common::CommonClipboardImpl;
use anyhow::{anyhow, Result};
use clip_core::ports::SystemClipboardPort;
use clip_core::ClipEntry;
use clipboard_rs::ClipboardContext;
use std::sync::{Arc, Mutex};
use tracing::{debug, debug_span};

/// System clipboard implementation using clipboard-rs
///
/// The platform context is opened on first access, so actions that never
/// touch the clipboard (clearing the history, pasting from an empty one) work
/// without a display.
pub struct LocalClipboard {
    inner: Arc<Mutex<Option<ClipboardContext>>>,
}

impl LocalClipboard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    fn with_context<T>(&self, f: impl FnOnce(&mut ClipboardContext) -> Result<T>) -> Result<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;

        if guard.is_none() {
            let context = ClipboardContext::new()
                .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
            debug!("Opened system clipboard context");
            *guard = Some(context);
        }

        match guard.as_mut() {
            Some(ctx) => f(ctx),
            None => Err(anyhow!("clipboard context unavailable")),
        }
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.inner.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }
}

impl Default for LocalClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_entry(&self) -> Result<Option<ClipEntry>> {
        let span = debug_span!("platform.clipboard.read");
        span.in_scope(|| {
            let entry = self.with_context(|ctx| CommonClipboardImpl::read_entry(ctx))?;

            match &entry {
                Some(entry) => debug!(
                    type_tag = %entry.type_tag(),
                    size_bytes = entry.size_bytes(),
                    "Read system clipboard"
                ),
                None => debug!("System clipboard is empty"),
            }

            Ok(entry)
        })
    }

    fn write_entry(&self, entry: &ClipEntry) -> Result<()> {
        let span = debug_span!(
            "platform.clipboard.write",
            type_tag = %entry.type_tag(),
            size_bytes = entry.size_bytes(),
        );
        span.in_scope(|| {
            self.with_context(|ctx| CommonClipboardImpl::write_entry(ctx, entry))?;

            debug!("Wrote entry to system clipboard");
            Ok(())
        })
    }
}
