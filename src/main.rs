use std::io;

use tracing::{error, info};

use vfs::{Config, Namespace, Shell};

/// Default configuration file, overridable with `VFS_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() {
    let config_path =
        std::env::var("VFS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration
    let mut config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        eprintln!("Falling back to UTC.");
        config.shell.timezone = "UTC".to_string();
    }

    // Initialize logging
    if let Err(e) = vfs::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        vfs::logging::init_console_only(&config.logging.level);
    }

    info!("VFS - Virtual File System");

    let mut namespace = Namespace::new();
    let mut shell = Shell::new(&mut namespace, &config.shell);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if let Err(e) = shell.run(stdin.lock(), &mut stdout, &mut stderr) {
        error!("Shell terminated: {}", e);
        std::process::exit(1);
    }
}
