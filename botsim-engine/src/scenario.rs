//! YAML-scripted operation sequences.
//!
//! A scenario is an ordered list of engine operations with explicit logical
//! times, replayed deterministically against a fresh engine. The order
//! class is kept as a string in the file format so a malformed scenario
//! surfaces the engine's invalid-input error instead of a decode error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use botsim_core::{EngineError, OrderClass};
use botsim_telemetry::EventSink;

use crate::scheduler::SchedulingEngine;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

/// One scripted operation. A missing `time` means "at the current clock".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AdvanceTo { time: u64 },
    CreateOrder { class: String, time: Option<u64> },
    AddBot { time: Option<u64> },
    RemoveBot { time: Option<u64> },
    Finalize { time: Option<u64> },
}

impl Scenario {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    pub fn apply<S: EventSink>(
        &self,
        engine: &mut SchedulingEngine<S>,
    ) -> Result<(), EngineError> {
        for step in &self.steps {
            step.apply(engine)?;
        }
        Ok(())
    }
}

impl Step {
    pub fn apply<S: EventSink>(&self, engine: &mut SchedulingEngine<S>) -> Result<(), EngineError> {
        match self {
            Step::AdvanceTo { time } => engine.advance_to(*time),
            Step::CreateOrder { class, time } => {
                let class: OrderClass = class.parse()?;
                match time {
                    Some(t) => engine.create_order_at(class, *t),
                    None => engine.create_order(class),
                }
                .map(|_| ())
            }
            Step::AddBot { time } => match time {
                Some(t) => engine.add_bot_at(*t),
                None => engine.add_bot(),
            }
            .map(|_| ()),
            Step::RemoveBot { time } => match time {
                Some(t) => engine.remove_bot_at(*t),
                None => engine.remove_bot(),
            }
            .map(|_| ()),
            Step::Finalize { time } => match time {
                Some(t) => engine.finalize_at(*t),
                None => engine.finalize(),
            },
        }
    }
}
