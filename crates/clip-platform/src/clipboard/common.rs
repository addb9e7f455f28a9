use anyhow::{anyhow, Result};
use clip_core::{ClipEntry, TypeTag};
use clipboard_rs::{Clipboard, ContentFormat};

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Read the clipboard as a single entry.
    ///
    /// UTF-8 text wins when present; otherwise the first advertised format
    /// with a non-empty buffer is taken verbatim under its platform name.
    pub fn read_entry(ctx: &mut impl Clipboard) -> Result<Option<ClipEntry>> {
        if ctx.has(ContentFormat::Text) {
            if let Ok(text) = ctx.get_text() {
                if !text.is_empty() {
                    return Ok(Some(ClipEntry::text(text)));
                }
            }
        }

        let available = map_clipboard_err(ctx.available_formats())?;
        for format_id in available {
            if let Ok(buf) = ctx.get_buffer(&format_id) {
                if !buf.is_empty() {
                    return Ok(Some(ClipEntry::new(format_id, buf)));
                }
            }
        }

        Ok(None)
    }

    /// Replace the clipboard content with `entry`.
    ///
    /// Text tags go through the platform text API so every application sees
    /// them; other tags are restored as raw buffers under the same name.
    pub fn write_entry(ctx: &mut impl Clipboard, entry: &ClipEntry) -> Result<()> {
        let tag: &TypeTag = entry.type_tag();

        if tag.is_plain_text() {
            if let Ok(text) = std::str::from_utf8(entry.payload()) {
                return map_clipboard_err(ctx.set_text(text.to_string()));
            }
        }

        map_clipboard_err(ctx.set_buffer(tag.as_str(), entry.payload().to_vec()))
    }
}
