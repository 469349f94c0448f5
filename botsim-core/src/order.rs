//! Order entity and its status transitions.
//!
//! Status moves strictly forward (PENDING -> PROCESSING -> COMPLETE) with
//! one backward edge: removing a bot mid-processing reverts its order to
//! PENDING. The transition helpers below own the timestamp bookkeeping so
//! the engine never touches `started_at`/`completed_at` directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Monotonically increasing order identifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority class of an order. VIP is always served before Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderClass {
    Vip,
    Normal,
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderClass::Vip => write!(f, "VIP"),
            OrderClass::Normal => write!(f, "Normal"),
        }
    }
}

impl FromStr for OrderClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vip" => Ok(OrderClass::Vip),
            "normal" => Ok(OrderClass::Normal),
            _ => Err(EngineError::UnknownOrderClass(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Complete,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Processing => write!(f, "PROCESSING"),
            OrderStatus::Complete => write!(f, "COMPLETE"),
        }
    }
}

/// A unit of work moving through the simulation.
///
/// Invariant: `started_at` is Some iff status is Processing or Complete;
/// `completed_at` is Some iff status is Complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub class: OrderClass,
    pub status: OrderStatus,
    pub created_at: u64,
    pub started_at: Option<u64>,
    pub completed_at: Option<u64>,
}

impl Order {
    pub fn new(id: OrderId, class: OrderClass, created_at: u64) -> Self {
        Self {
            id,
            class,
            status: OrderStatus::Pending,
            created_at,
            started_at: None,
            completed_at: None,
        }
    }

    /// Reverts the order to PENDING, clearing both progress timestamps.
    /// Only reachable through removal of the bot holding this order.
    pub fn mark_pending(&mut self) {
        self.status = OrderStatus::Pending;
        self.started_at = None;
        self.completed_at = None;
    }

    pub fn mark_processing(&mut self, started_at: u64) {
        self.status = OrderStatus::Processing;
        self.started_at = Some(started_at);
        self.completed_at = None;
    }

    pub fn mark_complete(&mut self, completed_at: u64) {
        self.status = OrderStatus::Complete;
        self.completed_at = Some(completed_at);
    }

    /// Seconds spent processing, measured from `started_at`. Falls back to 0
    /// when `started_at` is absent, which cannot happen under correct engine
    /// usage.
    pub fn processing_duration(&self, completed_at: u64) -> u64 {
        match self.started_at {
            Some(started_at) => completed_at.saturating_sub(started_at),
            None => 0,
        }
    }
}
