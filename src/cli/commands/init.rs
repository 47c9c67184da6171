//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "vitalwatch.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: vitalwatch validate-config");
                println!("  3. Start monitoring: vitalwatch monitor");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Commented sample configuration
pub fn sample_config() -> &'static str {
    r#"# Vitalwatch Configuration File
# Simulated vital-signs monitor

[application]
# trace | debug | info | warn | error
log_level = "info"

[monitor]
# Seconds between readings (positive integer)
interval_seconds = 10
# Run length in minutes (positive integer)
duration_minutes = 1

[store]
# Append-only CSV file; the header is written when the file is empty
path = "health_data.csv"
# fsync each row before it is reported
sync_writes = true

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
}
