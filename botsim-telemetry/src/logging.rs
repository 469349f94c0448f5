//! Structured logging setup with tracing.

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global fmt subscriber. Honors `RUST_LOG`, defaulting to
    /// the given level.
    pub fn init(default_level: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level.to_string())),
            )
            .init()
    }

    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!("simulation_event", event_type = event_type);
        let _guard = span.enter();
        tracing::info!(metadata = ?metadata, "Simulation event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        EventLogger::log_event("test", vec![KeyValue::new("key", "value")]);
        assert!(logs_contain("Simulation event"));
    }
}
