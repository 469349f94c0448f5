/*!
# Runtime Engine

Shared entry points for the simulator frontends: the fixed demo script and
scenario replay. Both build a fresh engine around a transcript sink, drive
it to completion, record throughput metrics, and hand the rendered
transcript back to the caller.
*/

use std::path::Path;

use chrono::Timelike;
use opentelemetry::KeyValue;
use tracing::{info, instrument};

use botsim_config::BotsimConfig;
use botsim_core::OrderClass;
use botsim_telemetry::logging::EventLogger;
use botsim_telemetry::metrics::MetricsRecorder;
use botsim_telemetry::{EventSink, Transcript};

use crate::scenario::Scenario;
use crate::scheduler::SchedulingEngine;

/// Runs the fixed demo script with transcript timestamps anchored to the
/// local wall clock, matching an operator watching the run live.
#[instrument(level = "info", skip(config, metrics))]
pub fn run_demo_mode(
    config: &BotsimConfig,
    metrics: &MetricsRecorder,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let base = seconds_since_midnight();
    run_demo_with_base(config, metrics, base)
}

/// Replays a scenario file. Scenario transcripts use a zero base time so
/// replays of the same file are byte-identical.
#[instrument(level = "info", skip(config, metrics))]
pub fn run_scenario_mode<P: AsRef<Path> + std::fmt::Debug>(
    scenario_path: P,
    config: &BotsimConfig,
    metrics: &MetricsRecorder,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let scenario = Scenario::load_from_file(scenario_path)?;
    info!(steps = scenario.steps.len(), "replaying scenario");

    let mut engine = SchedulingEngine::new(&config.simulation, Transcript::new());
    scenario.apply(&mut engine)?;

    record_run(&engine, metrics, "scenario_complete");
    Ok(engine.sink().render())
}

fn run_demo_with_base(
    config: &BotsimConfig,
    metrics: &MetricsRecorder,
    base_time_secs: u64,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let mut engine = SchedulingEngine::new(
        &config.simulation,
        Transcript::with_base_time(base_time_secs),
    );

    engine.sink_mut().record(0, "System initialized with 0 bots");

    engine.advance_to(1)?;
    engine.create_order(OrderClass::Normal)?;

    engine.advance_to(2)?;
    engine.create_order(OrderClass::Vip)?;
    engine.create_order(OrderClass::Normal)?;

    engine.advance_to(3)?;
    engine.add_bot()?;

    engine.advance_to(4)?;
    engine.add_bot()?;

    engine.advance_to(15)?;
    engine.create_order(OrderClass::Vip)?;

    engine.advance_to(25)?;
    engine.remove_bot()?;

    engine.finalize()?;

    record_run(&engine, metrics, "demo_complete");
    Ok(engine.sink().render())
}

fn record_run(
    engine: &SchedulingEngine<Transcript>,
    metrics: &MetricsRecorder,
    event_type: &str,
) {
    let stats = engine.stats();
    metrics.orders_created.inc_by(stats.total_created() as f64);
    metrics
        .orders_completed
        .inc_by(stats.total_completed() as f64);

    EventLogger::log_event(
        event_type,
        vec![
            KeyValue::new("orders_created", stats.total_created().to_string()),
            KeyValue::new("orders_completed", stats.total_completed().to_string()),
            KeyValue::new("final_time_secs", engine.now_secs().to_string()),
        ],
    );
}

fn seconds_since_midnight() -> u64 {
    chrono::Local::now().num_seconds_from_midnight() as u64
}
