pub mod config;
pub mod core;
pub mod utils;

pub use config::{CommandSpec, LaunchConfig, DEFAULT_PORT, PORT_VAR};
pub use core::{BuildSteps, Launcher, NodeProject};
pub use utils::error::{LaunchError, Result};
