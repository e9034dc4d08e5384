use crate::config::{CommandSpec, LaunchConfig, PORT_VAR};
use crate::core::launcher::BuildSteps;
use crate::utils::error::{LaunchError, Result};
use std::convert::Infallible;
use std::io;
use std::process::{Command, ExitStatus};

/// Lockfile the reproducible install needs. Checked before spawning the
/// installer so a directory without a buildable project gets a direct
/// diagnostic instead of whatever the installer prints.
const LOCKFILE: &str = "package-lock.json";

/// Production [`BuildSteps`] implementation driving the package manager and the
/// runtime as external commands.
pub struct NodeProject {
    config: LaunchConfig,
}

impl NodeProject {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Runs one build step to completion, stdio inherited so its output lands
    /// in the launcher's own streams.
    fn run_step(&self, spec: &CommandSpec) -> io::Result<ExitStatus> {
        Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&self.config.root)
            .status()
    }
}

impl BuildSteps for NodeProject {
    fn install(&mut self) -> Result<()> {
        let lockfile = self.config.root.join(LOCKFILE);
        if !lockfile.exists() {
            return Err(LaunchError::InstallFailed {
                message: format!("no {} found in {}", LOCKFILE, self.config.root.display()),
                code: None,
            });
        }

        tracing::debug!("Running install step: {}", self.config.install);
        match self.run_step(&self.config.install) {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(LaunchError::InstallFailed {
                message: format!("{} exited with {}", self.config.install, status),
                code: status.code(),
            }),
            Err(e) => Err(LaunchError::InstallFailed {
                message: format!("could not run {}: {}", self.config.install, e),
                code: None,
            }),
        }
    }

    fn build(&mut self) -> Result<()> {
        tracing::debug!("Running build step: {}", self.config.build);
        match self.run_step(&self.config.build) {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(LaunchError::BuildFailed {
                message: format!("{} exited with {}", self.config.build, status),
                code: status.code(),
            }),
            Err(e) => Err(LaunchError::BuildFailed {
                message: format!("could not run {}: {}", self.config.build, e),
                code: None,
            }),
        }
    }

    fn serve(&mut self, port: u16) -> Result<Infallible> {
        let spec = &self.config.server;
        tracing::debug!("Handing off to server: {}", spec);

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&self.config.root)
            // The inherited PORT value may be absent or unparseable, so the
            // resolved port is written back for the server to bind.
            .env(PORT_VAR, port.to_string());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // exec replaces the process image and only returns on failure.
            Err(LaunchError::HandoffFailed {
                source: command.exec(),
            })
        }

        #[cfg(not(unix))]
        {
            // No native process replacement: run the server to completion and
            // adopt its exit status.
            let status = command.status()?;
            std::process::exit(status.code().unwrap_or(1));
        }
    }
}
