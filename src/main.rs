//! # joy2rc
//!
//! Reads normalized joystick samples and publishes 8-channel RC command
//! frames for an autopilot flight controller.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber
//!    - Load and validate configuration; any configuration error is fatal
//!      before a single command is produced
//!
//! 2. **Main Loop**
//!    - Map each inbound joystick sample to one RC command frame
//!    - Drop malformed or out-of-bounds samples with a warning
//!    - Handle Ctrl+C for graceful shutdown
//!
//! The configuration path may be given as the first argument. Without one,
//! `config/default.toml` is used if present, otherwise the compiled-in
//! defaults.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use joy2rc::bridge;
use joy2rc::config::Config;
use joy2rc::mapper::Mapper;
use joy2rc::transport::{StdinSource, StdoutSink};

/// Configuration file consulted when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("joy2rc v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    info!(
        "Axis assignments: roll={} pitch={} throttle={} yaw={}, mode button={}",
        config.mapping.axis_roll,
        config.mapping.axis_pitch,
        config.mapping.axis_throttle,
        config.mapping.axis_yaw,
        config.mapping.mode_select
    );

    let mapper = Mapper::new(config.mapping);
    let mut source = StdinSource::new();
    let mut sink = StdoutSink::new();

    info!("Processing joystick samples, press Ctrl+C to exit");

    tokio::select! {
        result = bridge::run(&mut source, &mut sink, &mapper) => {
            result.context("session aborted")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}

/// Loads the configuration, failing fast on any invalid value.
fn load_config() -> Result<Config> {
    match std::env::args().nth(1) {
        Some(path) => {
            let config = Config::load(&path)
                .with_context(|| format!("failed to load configuration from {}", path))?;
            info!("Configuration loaded from {}", path);
            Ok(config)
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            let config = Config::load(DEFAULT_CONFIG_PATH).with_context(|| {
                format!("failed to load configuration from {}", DEFAULT_CONFIG_PATH)
            })?;
            info!("Configuration loaded from {}", DEFAULT_CONFIG_PATH);
            Ok(config)
        }
        None => {
            info!("No configuration file found, using built-in defaults");
            Ok(Config::default())
        }
    }
}
