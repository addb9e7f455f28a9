mod controller;

pub use controller::{SelectionController, SelectionError};
