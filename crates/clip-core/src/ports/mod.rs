//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core logic to remain independent of the system
//! clipboard, the file system and external processes.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `clip-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a capability the use cases depend on?**
//! 2. **Will it be depended upon by more than one action?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `clip-core/ports`.

pub mod app_dirs;
pub mod chooser;
pub mod clipboard;
pub mod errors;
pub mod history;
pub mod keystroke;

pub use app_dirs::AppDirsPort;
pub use chooser::{ChooserError, ChooserPort};
pub use clipboard::SystemClipboardPort;
pub use errors::AppDirsError;
pub use history::{HistoryStoreError, HistoryStorePort};
pub use keystroke::KeystrokePort;
