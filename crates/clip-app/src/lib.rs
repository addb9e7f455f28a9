//! Clipper Application Orchestration Layer
//!
//! This crate contains the use cases behind each CLI action and the
//! dispatcher that runs exactly one of them per invocation.

pub mod deps;
pub mod dispatcher;
pub mod outcome;
pub mod selection;
pub mod usecases;

pub use deps::AppDeps;
pub use dispatcher::{Action, ActionDispatcher, UnknownAction};
pub use outcome::ActionOutcome;
pub use selection::{SelectionController, SelectionError};

#[cfg(test)]
pub(crate) mod testing;
