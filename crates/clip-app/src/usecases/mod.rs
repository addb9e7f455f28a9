//! Business logic use cases, one per CLI action.
//!
//! ```text
//! [Keystroke copy] → CaptureClipboard   → HistoryStore.append
//! PasteLastEntry     ← HistoryStore.last → [Clipboard write] → [Keystroke paste]
//! PasteSelectedEntry ← HistoryStore.load → SelectionController → [Clipboard write] → [Keystroke paste]
//! ClearHistory       → HistoryStore.clear
//! ```

use std::time::Duration;

pub mod capture_clipboard;
pub mod clear_history;
pub mod paste_last_entry;
pub mod paste_selected_entry;

pub use capture_clipboard::{CaptureClipboard, CaptureMode};
pub use clear_history::ClearHistory;
pub use paste_last_entry::PasteLastEntry;
pub use paste_selected_entry::PasteSelectedEntry;

/// Wait after emitting the copy shortcut before reading the clipboard.
pub const COPY_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Wait after writing the clipboard before emitting the paste shortcut.
pub const PASTE_SETTLE_DELAY: Duration = Duration::from_millis(100);
