//! # clip-platform
//!
//! Platform-specific implementations for Clipper.
//!
//! This crate contains the adapters that interact with the operating system:
//! the system clipboard, keystroke simulation, the external chooser process
//! and per-user directories.

pub mod app_dirs;
pub mod chooser;
pub mod clipboard;
pub mod keystroke;
