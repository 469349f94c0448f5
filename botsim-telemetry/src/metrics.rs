//! Prometheus counters for order throughput.

use prometheus::{Counter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub orders_created: Counter,
    pub orders_completed: Counter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let orders_created =
            Counter::new("botsim_orders_created_total", "Total orders created").unwrap();
        let orders_completed =
            Counter::new("botsim_orders_completed_total", "Total orders completed").unwrap();

        registry.register(Box::new(orders_created.clone())).unwrap();
        registry
            .register(Box::new(orders_completed.clone()))
            .unwrap();

        Self {
            registry,
            orders_created,
            orders_completed,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}
