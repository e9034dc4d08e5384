use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("dependency install failed: {message}")]
    InstallFailed { message: String, code: Option<i32> },

    #[error("application build failed: {message}")]
    BuildFailed { message: String, code: Option<i32> },

    #[error("failed to hand off to the server process: {source}")]
    HandoffFailed {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid configuration for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;

impl LaunchError {
    /// Exit status for the launcher process when this error aborts the launch.
    ///
    /// A failed build step passes through the child's own exit code where the OS
    /// reports one (signal death reports none), so the platform sees the same
    /// status it would have seen running the step directly.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::InstallFailed { code, .. } | LaunchError::BuildFailed { code, .. } => {
                code.unwrap_or(1)
            }
            LaunchError::HandoffFailed { .. } => 1,
            LaunchError::InvalidConfigValueError { .. } => 2,
        }
    }
}
