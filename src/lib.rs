//! Process bootstrap and command line surface for the `clipper` binary.

pub mod bootstrap;
pub mod cli;
