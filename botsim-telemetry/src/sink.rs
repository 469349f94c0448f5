//! Event sink contract and the transcript implementation.
//!
//! The engine never formats output itself: it hands every state change to
//! an [`EventSink`] and relies only on call order being preserved. The
//! [`Transcript`] sink accumulates entries and renders them with wall-clock
//! style `[HH:MM:SS]` timestamps.

/// Receives human-readable notifications from the scheduling engine.
///
/// `record` takes the logical time in seconds; `append_line` emits an
/// untimed line (used for the final summary). Implementations must keep
/// entries in call order.
pub trait EventSink {
    fn record(&mut self, time_secs: u64, message: &str);
    fn append_line(&mut self, text: &str);
}

/// Accumulating sink that timestamps entries relative to a base time.
///
/// The base time shifts logical seconds into a time of day, so a demo run
/// started at 14:03:00 logs its t=5 events as `[14:03:05]`.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<String>,
    base_time_secs: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_time(base_time_secs: u64) -> Self {
        Self {
            entries: Vec::new(),
            base_time_secs,
        }
    }

    pub fn render(&self) -> String {
        self.entries.join("\n")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn format_time(&self, time_secs: u64) -> String {
        let total = self.base_time_secs + time_secs;
        let hours = (total / 3600) % 24;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl EventSink for Transcript {
    fn record(&mut self, time_secs: u64, message: &str) {
        let stamped = format!("[{}] {}", self.format_time(time_secs), message);
        tracing::debug!(time_secs, %message, "sim event");
        self.entries.push(stamped);
    }

    fn append_line(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }
}
