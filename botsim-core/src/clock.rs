//! The logical simulation clock.
//!
//! A single owned counter of whole seconds, advanced only by explicit
//! engine operations. Each simulation instance owns its clock, so
//! independent simulations never observe each other's time.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    now_secs: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now_secs(&self) -> u64 {
        self.now_secs
    }

    /// Moves the clock forward to `target`. Time never runs backwards:
    /// a target before the current instant is an ordering violation.
    pub fn advance_to(&mut self, target: u64) -> Result<(), EngineError> {
        if target < self.now_secs {
            return Err(EngineError::TimeReversal {
                current: self.now_secs,
                requested: target,
            });
        }
        self.now_secs = target;
        Ok(())
    }
}
