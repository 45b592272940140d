//! User-facing surfaces: the control-surface seam and the CLI

pub mod cli;
pub mod surface;

pub use cli::{Args, Cli};
pub use surface::{ControlSurface, PlayPauseIcon, TermSurface};
