pub mod launcher;
pub mod node_project;

pub use crate::utils::error::Result;
pub use launcher::{BuildSteps, Launcher};
pub use node_project::NodeProject;
