//! ## botsim-cli
//! **Operational interface for the order-fulfillment simulator**
//!
//! Runs either the fixed demo script or a YAML scenario replay and prints
//! the resulting transcript to stdout.

use clap::Parser;

use botsim_config::BotsimConfig;
use botsim_telemetry::logging::EventLogger;
use botsim_telemetry::metrics::MetricsRecorder;

mod commands;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = BotsimConfig::load()?;
    EventLogger::init(&config.telemetry.log_level);

    let metrics = MetricsRecorder::new();
    let cli = Cli::parse();

    commands::run_command(cli, &config, &metrics)
}
