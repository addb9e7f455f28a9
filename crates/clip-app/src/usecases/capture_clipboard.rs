use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::info;

use clip_core::ports::{HistoryStorePort, KeystrokePort, SystemClipboardPort};

use super::COPY_SETTLE_DELAY;
use crate::outcome::ActionOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Emit the copy shortcut first, then wait for the clipboard to settle.
    WithCopyShortcut,
    /// Store whatever the clipboard already holds.
    ClipboardOnly,
}

/// Appends the current clipboard content to the history.
///
/// An empty clipboard is not an error: nothing is stored.
pub struct CaptureClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    keystroke: Arc<dyn KeystrokePort>,
    history: Arc<dyn HistoryStorePort>,
}

impl CaptureClipboard {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        keystroke: Arc<dyn KeystrokePort>,
        history: Arc<dyn HistoryStorePort>,
    ) -> Self {
        Self {
            clipboard,
            keystroke,
            history,
        }
    }

    #[tracing::instrument(name = "usecase.capture_clipboard.execute", skip(self))]
    pub async fn execute(&self, mode: CaptureMode) -> Result<ActionOutcome> {
        if mode == CaptureMode::WithCopyShortcut {
            self.keystroke
                .emit_copy()
                .context("failed to emit copy shortcut")?;
            sleep(COPY_SETTLE_DELAY).await;
        }

        let entry = match self.clipboard.read_entry().context("failed to read clipboard")? {
            Some(entry) if !entry.is_empty() => entry,
            _ => {
                info!("Clipboard is empty, nothing to capture");
                return Ok(ActionOutcome::NothingToCapture);
            }
        };

        self.history.append(&entry).await?;

        info!(
            type_tag = %entry.type_tag(),
            size_bytes = entry.size_bytes(),
            "Captured clipboard entry"
        );
        Ok(ActionOutcome::Captured)
    }
}
