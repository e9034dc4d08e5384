use space_launcher::utils::{logger, validation::Validate};
use space_launcher::{LaunchConfig, Launcher, NodeProject};

fn main() {
    logger::init_logger();

    let config = LaunchConfig::from_env();
    tracing::debug!("Launch config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let port = config.port;
    let project = NodeProject::new(config);
    let mut launcher = Launcher::new(project, port);

    match launcher.run() {
        // serve never returns on success; the server owns the process by then.
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!("Launch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
