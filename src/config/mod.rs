use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Listening port the hosting platform expects when no override is present.
pub const DEFAULT_PORT: u16 = 7860;

/// Environment variable holding the port override.
pub const PORT_VAR: &str = "PORT";

/// An external command the launcher runs, program plus fixed arguments.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Directory holding the buildable project; the lockfile lives here and the
    /// build commands run here.
    pub root: PathBuf,
    pub port: u16,
    pub install: CommandSpec,
    pub build: CommandSpec,
    pub server: CommandSpec,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            port: DEFAULT_PORT,
            install: CommandSpec::new("npm", &["ci"]),
            build: CommandSpec::new("npm", &["run", "build"]),
            server: CommandSpec::new("node", &["dist/index.js"]),
        }
    }
}

impl LaunchConfig {
    /// Builds the configuration from the ambient environment. The port override
    /// is the only recognized variable; everything else is fixed convention.
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(env::var(PORT_VAR).ok().as_deref()),
            ..Self::default()
        }
    }
}

impl Validate for LaunchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("install.program", &self.install.program)?;
        validate_non_empty_string("build.program", &self.build.program)?;
        validate_non_empty_string("server.program", &self.server.program)?;
        Ok(())
    }
}

/// Resolves the listening port from an optional override value.
///
/// A missing or unusable override falls back to [`DEFAULT_PORT`] rather than
/// aborting the launch; an unusable value gets a warning so the fallback is
/// visible in the platform logs. Port 0 counts as unusable: it would ask the
/// kernel for an arbitrary port the hosting platform cannot discover.
pub fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.trim().parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                tracing::warn!(
                    "Ignoring unusable {} value {:?}, falling back to {}",
                    PORT_VAR,
                    value,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_port_defaults_when_unset() {
        assert_eq!(resolve_port(None), 7860);
    }

    #[test]
    fn test_resolve_port_honors_override() {
        assert_eq!(resolve_port(Some("8080")), 8080);
        assert_eq!(resolve_port(Some(" 3000 ")), 3000);
    }

    #[test]
    fn test_resolve_port_falls_back_on_garbage() {
        assert_eq!(resolve_port(Some("not-a-number")), 7860);
        assert_eq!(resolve_port(Some("")), 7860);
        assert_eq!(resolve_port(Some("-1")), 7860);
        assert_eq!(resolve_port(Some("70000")), 7860);
    }

    #[test]
    fn test_resolve_port_falls_back_on_zero() {
        assert_eq!(resolve_port(Some("0")), 7860);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(LaunchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_program() {
        let mut config = LaunchConfig::default();
        config.server.program = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_command_spec_display() {
        assert_eq!(CommandSpec::new("npm", &["run", "build"]).to_string(), "npm run build");
        assert_eq!(CommandSpec::new("node", &[]).to_string(), "node");
    }
}
