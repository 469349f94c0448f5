//! ## botsim-telemetry
//! **Event sink, structured logging and metrics**
//!
//! ### Components:
//! - `sink/`: the `EventSink` contract the engine reports through, plus the
//!   transcript sink that renders the human-readable simulation log
//! - `logging/`: tracing subscriber setup and structured event logging
//! - `metrics/`: Prometheus counters for order throughput

#![warn(unsafe_code)]

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{EventSink, Transcript};
