//! Bot entity and its Idle/Processing lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::order::OrderId;

/// Monotonically increasing bot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BotId(pub u64);

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotStatus {
    Idle,
    Processing,
}

/// A worker unit. Holds at most one order at a time and processes it at a
/// fixed duration.
///
/// `current_order` and `busy_until` are Some iff status is Processing.
/// `last_idle_announcement` records the logical instant of the most recent
/// idle notification so repeated announcements within one instant are
/// suppressed; it resets whenever the bot picks up work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    pub status: BotStatus,
    pub current_order: Option<OrderId>,
    pub busy_until: Option<u64>,
    pub created_at: u64,
    pub last_idle_announcement: Option<u64>,
}

impl Bot {
    pub fn new(id: BotId, created_at: u64) -> Self {
        Self {
            id,
            status: BotStatus::Idle,
            current_order: None,
            busy_until: None,
            created_at,
            last_idle_announcement: None,
        }
    }

    pub fn begin_processing(&mut self, order_id: OrderId, busy_until: u64) {
        self.status = BotStatus::Processing;
        self.current_order = Some(order_id);
        self.busy_until = Some(busy_until);
        self.last_idle_announcement = None;
    }

    pub fn reset_to_idle(&mut self) {
        self.status = BotStatus::Idle;
        self.current_order = None;
        self.busy_until = None;
    }

    pub fn is_idle(&self) -> bool {
        self.status == BotStatus::Idle
    }

    pub fn is_processing(&self) -> bool {
        self.status == BotStatus::Processing
    }
}
