use super::ClipEntry;

/// Maximum number of characters kept from a text preview before truncation.
pub const PREVIEW_MAX_CHARS: usize = 80;

const NEWLINE_MARKER: &str = "↵ ";
const TAB_MARKER: &str = "→ ";
const TRUNCATION_MARKER: &str = "...";

/// Render a single-line, human-readable label for an entry.
///
/// Text entries have newlines and tabs replaced by visible markers and are cut
/// to [`PREVIEW_MAX_CHARS`] characters followed by `...`. Anything else is
/// summarized as `[<basename of tag>] <N> bytes`.
pub fn render_preview(entry: &ClipEntry) -> String {
    if entry.type_tag().is_plain_text() {
        render_text_preview(entry.payload())
    } else {
        format!(
            "[{}] {} bytes",
            entry.type_tag().basename(),
            entry.size_bytes()
        )
    }
}

fn render_text_preview(payload: &[u8]) -> String {
    let text = String::from_utf8_lossy(payload)
        .replace('\n', NEWLINE_MARKER)
        .replace('\t', TAB_MARKER);

    if text.chars().count() > PREVIEW_MAX_CHARS {
        let mut truncated: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    } else {
        text
    }
}
