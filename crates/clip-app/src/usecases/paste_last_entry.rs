use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::info;

use clip_core::ports::{HistoryStorePort, KeystrokePort, SystemClipboardPort};
use clip_core::ClipEntry;

use super::PASTE_SETTLE_DELAY;
use crate::outcome::ActionOutcome;

/// Writes `entry` to the clipboard, waits for it to settle and emits the paste shortcut.
pub(crate) async fn restore_and_paste(
    clipboard: &dyn SystemClipboardPort,
    keystroke: &dyn KeystrokePort,
    entry: &ClipEntry,
) -> Result<()> {
    clipboard
        .write_entry(entry)
        .context("failed to write clipboard")?;
    sleep(PASTE_SETTLE_DELAY).await;
    keystroke
        .emit_paste()
        .context("failed to emit paste shortcut")?;
    Ok(())
}

/// Pastes the most recently captured entry.
pub struct PasteLastEntry {
    clipboard: Arc<dyn SystemClipboardPort>,
    keystroke: Arc<dyn KeystrokePort>,
    history: Arc<dyn HistoryStorePort>,
}

impl PasteLastEntry {
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

    #[tracing::instrument(name = "usecase.paste_last_entry.execute", skip(self))]
    pub async fn execute(&self) -> Result<ActionOutcome> {
        let Some(entry) = self.history.last().await? else {
            info!("History is empty, nothing to paste");
            return Ok(ActionOutcome::NothingToPaste);
        };

        restore_and_paste(self.clipboard.as_ref(), self.keystroke.as_ref(), &entry).await?;

        info!(type_tag = %entry.type_tag(), "Pasted last history entry");
        Ok(ActionOutcome::Pasted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClipboard, MemoryHistory, MockKeystroke};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn pastes_newest_entry_after_settle_delay() {
        let clipboard = Arc::new(FakeClipboard::default());
        let history = Arc::new(MemoryHistory::with_entries(vec![
            ClipEntry::text("old"),
            ClipEntry::text("new"),
        ]));
        let mut keys = MockKeystroke::new();
        keys.expect_emit_paste().times(1).returning(|| Ok(()));

        let started = Instant::now();
        let outcome = PasteLastEntry::new(clipboard.clone(), Arc::new(keys), history)
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Pasted);
        assert!(started.elapsed() >= PASTE_SETTLE_DELAY);
        assert_eq!(clipboard.writes(), vec![ClipEntry::text("new")]);
    }

    #[tokio::test]
    async fn empty_history_is_a_no_op() {
        let clipboard = Arc::new(FakeClipboard::default());
        let mut keys = MockKeystroke::new();
        keys.expect_emit_paste().never();

        let outcome = PasteLastEntry::new(
            clipboard.clone(),
            Arc::new(keys),
            Arc::new(MemoryHistory::default()),
        )
        .execute()
        .await
        .unwrap();

        assert_eq!(outcome, ActionOutcome::NothingToPaste);
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn unreadable_history_is_an_error() {
        let clipboard = Arc::new(FakeClipboard::default());

        let result = PasteLastEntry::new(
            clipboard.clone(),
            Arc::new(MockKeystroke::new()),
            Arc::new(MemoryHistory::broken()),
        )
        .execute()
        .await;

        assert!(result.is_err());
        assert!(clipboard.writes().is_empty());
    }
}
