//! Validate config command implementation

use crate::cli::{resolve_config, DEFAULT_CONFIG_PATH};
use crate::core::monitor::MonitorSettings;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        let config = match resolve_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let cycles = MonitorSettings::new(
            config.monitor.interval_seconds,
            config.monitor.duration_minutes,
        )
        .map(|s| s.cycles())
        .unwrap_or(0);

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Interval: {}s", config.monitor.interval_seconds);
        println!("  Duration: {} min", config.monitor.duration_minutes);
        println!("  Cycles per run: {cycles}");
        println!("  Store: {}", config.store.path);
        println!("  Sync writes: {}", config.store.sync_writes);
        println!(
            "  File logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}
