//! Per-class creation and completion counters.

use serde::{Deserialize, Serialize};

use crate::order::OrderClass;

/// Aggregate order counters, owned by the engine and read-only outside it.
/// All fields are monotonically increasing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub created_vip: u64,
    pub created_normal: u64,
    pub completed_vip: u64,
    pub completed_normal: u64,
}

impl OrderStats {
    pub fn record_created(&mut self, class: OrderClass) {
        match class {
            OrderClass::Vip => self.created_vip += 1,
            OrderClass::Normal => self.created_normal += 1,
        }
    }

    pub fn record_completed(&mut self, class: OrderClass) {
        match class {
            OrderClass::Vip => self.completed_vip += 1,
            OrderClass::Normal => self.completed_normal += 1,
        }
    }

    pub fn total_created(&self) -> u64 {
        self.created_vip + self.created_normal
    }

    pub fn total_completed(&self) -> u64 {
        self.completed_vip + self.completed_normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_split_by_class() {
        let mut stats = OrderStats::default();
        stats.record_created(OrderClass::Vip);
        stats.record_created(OrderClass::Normal);
        stats.record_created(OrderClass::Normal);
        stats.record_completed(OrderClass::Normal);

        assert_eq!(stats.created_vip, 1);
        assert_eq!(stats.created_normal, 2);
        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_completed(), 1);
    }
}
