//! Configuration handling for the controller host

mod settings;

pub use settings::*;
