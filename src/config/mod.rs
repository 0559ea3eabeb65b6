//! Engine and match configuration.

mod settings;

pub use settings::*;
