use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use botsim_config::BotsimConfig;
use botsim_engine::{run_demo_mode, run_scenario_mode};
use botsim_telemetry::metrics::MetricsRecorder;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the fixed demo script
    Demo,
    /// Replay a YAML scenario file
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scenario file to replay
    #[arg(short, long)]
    pub scenario: PathBuf,
}

pub fn run_command(
    cli: Cli,
    config: &BotsimConfig,
    metrics: &MetricsRecorder,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let transcript = match cli.command {
        Commands::Demo => run_demo_mode(config, metrics)?,
        Commands::Run(run_args) => run_scenario_mode(&run_args.scenario, config, metrics)?,
    };

    println!("{}", transcript);
    debug!("{}", metrics.gather_metrics()?);
    Ok(())
}
