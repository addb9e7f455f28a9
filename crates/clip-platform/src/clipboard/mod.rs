mod common;
mod local;

pub use local::LocalClipboard;
