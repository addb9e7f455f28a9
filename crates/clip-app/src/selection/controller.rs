use std::sync::Arc;

use clip_core::ports::{ChooserError, ChooserPort};
use clip_core::{render_preview, ClipEntry};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no history entries to choose from")]
    EmptyHistory,

    #[error(transparent)]
    Chooser(#[from] ChooserError),

    #[error("chooser response {0:?} does not start with an entry index")]
    MalformedResponse(String),

    #[error("selected index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Negotiates a single history selection with the external chooser.
///
/// Entries are offered newest first, each labelled with its index in load
/// order, so `0` always names the oldest entry whatever the display order.
/// The chooser is asked exactly once; any failure aborts the selection.
pub struct SelectionController {
    chooser: Arc<dyn ChooserPort>,
}

impl SelectionController {
    pub fn new(chooser: Arc<dyn ChooserPort>) -> Self {
        Self { chooser }
    }

    /// Build the chooser request: `"<index>: <preview>"`, newest entry first.
    pub fn request_lines(entries: &[ClipEntry]) -> Vec<String> {
        entries
            .iter()
            .enumerate()
            .rev()
            .map(|(index, entry)| format!("{index}: {}", render_preview(entry)))
            .collect()
    }

    /// Extract the load-order index from a chooser response line.
    pub fn parse_selection(response: &str, len: usize) -> Result<usize, SelectionError> {
        let response = response.trim();
        let prefix = response
            .split_once(':')
            .map_or(response, |(prefix, _)| prefix)
            .trim();

        let index: usize = prefix
            .parse()
            .map_err(|_| SelectionError::MalformedResponse(response.to_string()))?;

        if index >= len {
            return Err(SelectionError::IndexOutOfRange { index, len });
        }
        Ok(index)
    }

    /// Let the user pick one of `entries` and return it.
    #[tracing::instrument(
        name = "selection.select",
        skip(self, entries),
        fields(entries = entries.len())
    )]
    pub async fn select(&self, mut entries: Vec<ClipEntry>) -> Result<ClipEntry, SelectionError> {
        if entries.is_empty() {
            return Err(SelectionError::EmptyHistory);
        }

        let request = Self::request_lines(&entries);
        let response = self.chooser.choose(&request).await?;
        let index = Self::parse_selection(&response, entries.len())?;

        debug!(index, "Chooser selected history entry");
        Ok(entries.swap_remove(index))
    }
}
