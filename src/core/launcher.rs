use crate::utils::error::Result;
use std::convert::Infallible;

/// The external-process interactions of a launch, behind a seam so the engine's
/// ordering and fail-fast behavior can be tested without spawning anything.
pub trait BuildSteps {
    /// Lockfile-driven dependency install. Non-zero exit is fatal.
    fn install(&mut self) -> Result<()>;

    /// Compile/bundle the project into its runnable artifact. Non-zero exit is
    /// fatal.
    fn build(&mut self) -> Result<()>;

    /// One-way transfer of the process to the application server. Only ever
    /// returns if the hand-off itself fails; nothing runs after a success.
    fn serve(&mut self, port: u16) -> Result<Infallible>;
}

pub struct Launcher<S: BuildSteps> {
    steps: S,
    port: u16,
}

impl<S: BuildSteps> Launcher<S> {
    pub fn new(steps: S, port: u16) -> Self {
        Self { steps, port }
    }

    /// Runs the launch sequence: install, build, then hand the process over to
    /// the server. Strictly sequential with no retries; the first failing step
    /// aborts the whole launch.
    pub fn run(&mut self) -> Result<Infallible> {
        println!("Installing dependencies...");
        self.steps.install()?;

        println!("Building the application...");
        self.steps.build()?;

        println!("Starting the server on port {}...", self.port);
        self.steps.serve(self.port)
    }
}
