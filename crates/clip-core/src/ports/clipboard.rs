//! Clipboard port - abstracts local clipboard access
//!
//! This port defines the interface for reading the current clipboard content
//! as a history entry and writing a stored entry back.

use crate::clipboard::ClipEntry;
use anyhow::Result;

/// Clipboard port - abstracts local clipboard access
///
/// This trait provides a platform-agnostic interface to clipboard functionality,
/// allowing use cases to interact with the clipboard without depending on
/// platform-specific implementations.
pub trait SystemClipboardPort: Send + Sync {
    /// Read current clipboard content
    ///
    /// Returns `None` when the clipboard holds nothing that can be captured.
    fn read_entry(&self) -> Result<Option<ClipEntry>>;

    /// Replace the clipboard content with a single entry.
    fn write_entry(&self, entry: &ClipEntry) -> Result<()>;
}
