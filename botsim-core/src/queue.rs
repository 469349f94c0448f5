//! The VIP-first pending order queue.
//!
//! Two insertion-ordered tiers; the VIP tier is always drained before the
//! Normal tier. Orders reverted by bot removal re-enter at the FRONT of
//! their tier so they keep precedence over later arrivals of the same
//! class. Unbounded: this domain has no backpressure.

use std::collections::VecDeque;

use crate::order::{OrderClass, OrderId};

#[derive(Debug, Default, Clone)]
pub struct PendingQueue {
    vip: VecDeque<OrderId>,
    normal: VecDeque<OrderId>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, class: OrderClass, id: OrderId) {
        self.tier_mut(class).push_back(id);
    }

    /// Front insertion, used exclusively for orders reverted by bot removal.
    pub fn enqueue_front(&mut self, class: OrderClass, id: OrderId) {
        self.tier_mut(class).push_front(id);
    }

    pub fn dequeue(&mut self) -> Option<OrderId> {
        self.vip.pop_front().or_else(|| self.normal.pop_front())
    }

    pub fn is_empty(&self) -> bool {
        self.vip.is_empty() && self.normal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vip.len() + self.normal.len()
    }

    pub fn vip(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.vip.iter().copied()
    }

    pub fn normal(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.normal.iter().copied()
    }

    fn tier_mut(&mut self, class: OrderClass) -> &mut VecDeque<OrderId> {
        match class {
            OrderClass::Vip => &mut self.vip,
            OrderClass::Normal => &mut self.normal,
        }
    }
}
