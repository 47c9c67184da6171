//! Monitor command implementation
//!
//! Terminal front end for a monitoring session: prints the status indicator,
//! streams each summary line as it is logged, and reports how the run ended.

use crate::cli::resolve_config;
use crate::core::monitor::MonitorSettings;
use crate::core::session::MonitoringSession;
use crate::core::store::RecordStore;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the monitor command
#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Seconds between readings (overrides monitor.interval_seconds)
    #[arg(short, long, allow_hyphen_values = true)]
    pub interval: Option<String>,

    /// Run length in minutes (overrides monitor.duration_minutes)
    #[arg(short, long, allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// CSV store path (overrides store.path)
    #[arg(short, long)]
    pub store: Option<String>,
}

impl MonitorArgs {
    /// Execute the monitor command
    pub async fn execute(
        &self,
        config_path: Option<&str>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        if let Some(store) = &self.store {
            tracing::info!(store = %store, "Overriding store path from CLI");
            config.store.path = store.clone();
        }

        let interval = self
            .interval
            .clone()
            .unwrap_or_else(|| config.monitor.interval_seconds.to_string());
        let duration = self
            .duration
            .clone()
            .unwrap_or_else(|| config.monitor.duration_minutes.to_string());

        let store = RecordStore::new(&config.store.path).with_sync(config.store.sync_writes);
        let mut session = MonitoringSession::new(store);
        println!("{}", session.status());

        let settings = match MonitorSettings::parse(&interval, &duration) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected monitoring settings");
                eprintln!("❌ Invalid Input: {e}");
                return Ok(e.exit_code());
            }
        };

        let run = match session.start(settings, shutdown_signal) {
            Ok(run) => run,
            Err(e) => {
                tracing::error!(error = %e, "Failed to start monitoring");
                eprintln!("❌ {e}");
                return Ok(e.exit_code());
            }
        };

        println!("{}", session.status());
        println!(
            "  Interval: {}s, Duration: {} min, Cycles: {}, Store: {}",
            settings.interval_seconds(),
            settings.duration_minutes(),
            settings.cycles(),
            config.store.path
        );
        println!();

        let outcome = session.drive(run, |line| println!("{line}")).await;

        println!();
        let exit_code = match outcome {
            Ok(summary) if summary.interrupted => {
                println!("⚠️  {}", session.status());
                println!(
                    "   {} of {} records written before shutdown.",
                    summary.records_written, summary.cycles_planned
                );
                130
            }
            Ok(summary) => {
                println!("✅ {}", session.status());
                println!(
                    "   {} records written in {:.2}s.",
                    summary.records_written,
                    summary.duration.as_secs_f64()
                );
                0
            }
            Err(e) => {
                eprintln!("❌ {}", session.status());
                eprintln!(
                    "   {} records were written before the failure.",
                    session.log().len()
                );
                e.exit_code()
            }
        };

        Ok(exit_code)
    }
}
