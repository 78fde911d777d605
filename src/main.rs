//! OneHealth Doctor Fees server binary
//!
//! ```sh
//! # Run with default config (~/.config/doctor-fees-service/config.toml)
//! doctor-fees-service
//!
//! # Custom config path and port
//! doctor-fees-service --config /etc/doctor-fees/config.toml --port 8081
//!
//! # Validate config without starting
//! doctor-fees-service --check
//!
//! # Write a starter config file and exit
//! doctor-fees-service --init-config --port 8081
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use doctor_fees::config::{AppConfig, CONFIG_ENV};
use doctor_fees::server::{init_tracing, ServerHandle, ServerOptions};

/// Doctor fee records REST service.
#[derive(Parser, Debug)]
#[command(name = "doctor-fees-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Write the default configuration (with any CLI overrides) to the
    /// config path and exit. Refuses to overwrite an existing file.
    #[arg(long, conflicts_with = "check")]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(doctor_fees::default_config_path);

    if cli.init_config {
        if config_path.exists() {
            return Err(format!("config file already exists: {}", config_path.display()).into());
        }
        let mut config = AppConfig::default();
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(level) = cli.log_level {
            config.logging.level = level;
        }
        config.save(&config_path)?;
        println!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    let load_failed = load_error.is_some();

    // Tracing is initialised after overrides so --log-level applies
    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if load_failed {
            return Err(format!("invalid configuration: {}", config_path.display()).into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
