//! Clipboard domain models.
mod entry;
mod preview;
mod type_tag;

pub use entry::ClipEntry;
pub use preview::{render_preview, PREVIEW_MAX_CHARS};
pub use type_tag::TypeTag;
