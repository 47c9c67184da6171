//! Status command implementation
//!
//! Reports what the record store currently holds.

use crate::cli::resolve_config;
use crate::core::store::{RecordStore, StoreStats};
use crate::domain::record::TIMESTAMP_FORMAT;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// CSV store path (overrides store.path)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let path = self.store.clone().unwrap_or(config.store.path);
        tracing::info!(store = %path, "Inspecting record store");

        let stats = match RecordStore::new(&path).inspect() {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read record store");
                eprintln!("❌ Failed to read record store {path}: {e}");
                return Ok(5);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print!("{}", render_stats(&stats));
        }

        Ok(0)
    }
}

fn render_stats(stats: &StoreStats) -> String {
    if !stats.exists {
        return format!("📭 No record store at {} yet\n", stats.path);
    }

    let last = stats
        .last_timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "📊 Record Store: {}\n  Header: {}\n  Records: {}\n  Last Reading: {}\n",
        stats.path,
        if stats.has_header { "present" } else { "missing" },
        stats.records,
        last
    )
}
