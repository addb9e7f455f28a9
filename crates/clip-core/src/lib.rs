//! # clip-core
//!
//! Core domain models and ports for Clipper.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ports;

// Re-export commonly used types at the crate root
pub use app_dirs::AppDirs;
pub use clipboard::{render_preview, ClipEntry, TypeTag};
pub use config::{ChooserConfig, ClipperConfig};
