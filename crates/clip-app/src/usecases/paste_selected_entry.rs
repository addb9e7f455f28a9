use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use clip_core::ports::{HistoryStorePort, KeystrokePort, SystemClipboardPort};

use super::paste_last_entry::restore_and_paste;
use crate::outcome::ActionOutcome;
use crate::selection::SelectionController;

/// Lets the user pick a history entry in the chooser, then pastes it.
///
/// A cancelled or unusable selection leaves the clipboard untouched.
pub struct PasteSelectedEntry {
    clipboard: Arc<dyn SystemClipboardPort>,
    keystroke: Arc<dyn KeystrokePort>,
    history: Arc<dyn HistoryStorePort>,
    selection: SelectionController,
}

impl PasteSelectedEntry {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        keystroke: Arc<dyn KeystrokePort>,
        history: Arc<dyn HistoryStorePort>,
        selection: SelectionController,
    ) -> Self {
        Self {
            clipboard,
            keystroke,
            history,
            selection,
        }
    }

    #[tracing::instrument(name = "usecase.paste_selected_entry.execute", skip(self))]
    pub async fn execute(&self) -> Result<ActionOutcome> {
        let entries = self.history.load().await?;
        if entries.is_empty() {
            info!("History is empty, nothing to choose from");
            return Ok(ActionOutcome::NothingToPaste);
        }

        let entry = match self.selection.select(entries).await {
            Ok(entry) => entry,
            Err(e) => {
                info!(reason = %e, "Selection aborted");
                return Ok(ActionOutcome::SelectionAborted);
            }
        };

        restore_and_paste(self.clipboard.as_ref(), self.keystroke.as_ref(), &entry).await?;

        info!(type_tag = %entry.type_tag(), "Pasted selected history entry");
        Ok(ActionOutcome::Pasted)
    }
}
