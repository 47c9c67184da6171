//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vitalwatch using clap.

pub mod commands;

use crate::config::{load_config, load_config_or_default, VitalwatchConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "vitalwatch.toml";

/// Vitalwatch - simulated vital-signs monitor
#[derive(Parser, Debug)]
#[command(name = "vitalwatch")]
#[command(version, about, long_about = None)]
#[command(author = "Vitalwatch Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to vitalwatch.toml if present)
    #[arg(short, long, env = "VITALWATCH_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VITALWATCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a monitoring session, appending readings to the store
    Monitor(commands::monitor::MonitorArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show what the record store contains
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Load configuration for a command
///
/// An explicitly named file must exist; without one, `vitalwatch.toml` is used
/// when present and defaults otherwise.
pub fn resolve_config(config_path: Option<&str>) -> Result<VitalwatchConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
}
