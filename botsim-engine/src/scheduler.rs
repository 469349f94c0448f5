//! The scheduling engine.
//!
//! Every public operation follows the same advance-then-act-then-assign
//! sequence: fast-forward the clock to the operation's time (resolving any
//! completions due on the way, in deterministic order), apply the
//! operation's own effect, then offer pending orders to idle bots and
//! announce idleness once the queues are drained.
//!
//! The engine is single-threaded and synchronous. All state lives in this
//! struct, so independent simulations are fully isolated from each other.

use botsim_config::SimulationConfig;
use botsim_core::{
    Bot, BotId, EngineError, Order, OrderClass, OrderId, OrderStats, OrderStatus, PendingQueue,
    SimClock,
};
use botsim_telemetry::EventSink;

pub struct SchedulingEngine<S: EventSink> {
    clock: SimClock,
    /// Append-only registry of every order ever created, in creation order.
    orders: Vec<Order>,
    /// Live bots in creation order. Removal pops from the back (LIFO).
    bots: Vec<Bot>,
    pending: PendingQueue,
    stats: OrderStats,
    next_order_id: u64,
    next_bot_id: u64,
    processing_secs: u64,
    sink: S,
}

impl<S: EventSink> SchedulingEngine<S> {
    pub fn new(config: &SimulationConfig, sink: S) -> Self {
        Self {
            clock: SimClock::new(),
            orders: Vec::new(),
            bots: Vec::new(),
            pending: PendingQueue::new(),
            stats: OrderStats::default(),
            next_order_id: config.first_order_id,
            next_bot_id: config.first_bot_id,
            processing_secs: config.processing_time_seconds,
            sink,
        }
    }

    pub fn now_secs(&self) -> u64 {
        self.clock.now_secs()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn stats(&self) -> &OrderStats {
        &self.stats
    }

    /// Pending VIP orders in queue order.
    pub fn pending_vip(&self) -> Vec<Order> {
        self.snapshot_orders(self.pending.vip().collect())
    }

    /// Pending Normal orders in queue order.
    pub fn pending_normal(&self) -> Vec<Order> {
        self.snapshot_orders(self.pending.normal().collect())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Direct sink access for drivers that interleave their own lines with
    /// engine notifications (the demo script's init line).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Moves the simulation forward to `target`, resolving every completion
    /// due at or before it in chronological order. Ties on completion time
    /// resolve by ascending bot id, so overlapping completions are always
    /// totally ordered.
    pub fn advance_to(&mut self, target: u64) -> Result<(), EngineError> {
        // Validate up front: a backward target must not resolve anything.
        if target < self.clock.now_secs() {
            return Err(EngineError::TimeReversal {
                current: self.clock.now_secs(),
                requested: target,
            });
        }

        while let Some((idx, due)) = self.next_completing_bot() {
            if due > target {
                break;
            }
            self.clock.advance_to(due)?;
            self.complete_order(idx, due);
            let bot_id = self.bots[idx].id;
            self.assign_orders(due, &[bot_id]);
        }

        self.clock.advance_to(target)
    }

    /// Creates an order at the current instant.
    pub fn create_order(&mut self, class: OrderClass) -> Result<OrderId, EngineError> {
        self.create_order_at(class, self.clock.now_secs())
    }

    pub fn create_order_at(&mut self, class: OrderClass, time: u64) -> Result<OrderId, EngineError> {
        self.advance_to(time)?;
        let now = self.clock.now_secs();

        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;

        self.orders.push(Order::new(id, class, now));
        self.stats.record_created(class);
        self.pending.enqueue(class, id);

        self.sink.record(
            now,
            &format!(
                "Created {} Order #{} - Status: {}",
                class,
                id,
                OrderStatus::Pending
            ),
        );

        self.assign_orders(now, &[]);
        Ok(id)
    }

    /// Adds a bot at the current instant.
    pub fn add_bot(&mut self) -> Result<BotId, EngineError> {
        self.add_bot_at(self.clock.now_secs())
    }

    pub fn add_bot_at(&mut self, time: u64) -> Result<BotId, EngineError> {
        self.advance_to(time)?;
        let now = self.clock.now_secs();

        let id = BotId(self.next_bot_id);
        self.next_bot_id += 1;
        self.bots.push(Bot::new(id, now));

        self.sink
            .record(now, &format!("Bot #{} created - Status: ACTIVE", id));

        // A fresh idle bot immediately picks up pending work.
        self.assign_orders(now, &[]);
        Ok(id)
    }

    /// Removes the most recently added bot at the current instant.
    pub fn remove_bot(&mut self) -> Result<Option<Bot>, EngineError> {
        self.remove_bot_at(self.clock.now_secs())
    }

    /// Removes the most recently added bot (LIFO) and hands it back to the
    /// caller. An order in flight on it reverts to PENDING and re-enters
    /// the FRONT of its priority tier.
    pub fn remove_bot_at(&mut self, time: u64) -> Result<Option<Bot>, EngineError> {
        self.advance_to(time)?;
        let now = self.clock.now_secs();

        let Some(bot) = self.bots.pop() else {
            self.sink.record(now, "No bots available to destroy");
            return Ok(None);
        };

        match bot.current_order {
            Some(order_id) if bot.is_processing() => {
                let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
                    return Ok(Some(bot));
                };
                order.mark_pending();
                let class = order.class;
                self.pending.enqueue_front(class, order_id);
                self.sink.record(
                    now,
                    &format!(
                        "Bot #{} destroyed while PROCESSING {} Order #{} - Returned to PENDING",
                        bot.id, class, order_id
                    ),
                );
            }
            _ => {
                self.sink
                    .record(now, &format!("Bot #{} destroyed while IDLE", bot.id));
            }
        }

        self.assign_orders(now, &[]);
        Ok(Some(bot))
    }

    /// Drains all in-flight work at the current instant, then summarizes.
    pub fn finalize(&mut self) -> Result<(), EngineError> {
        self.finalize_at(self.clock.now_secs())
    }

    /// Advances to `time`, then keeps jumping to the next completion until
    /// no bot is processing, however far forward that pushes the clock.
    pub fn finalize_at(&mut self, time: u64) -> Result<(), EngineError> {
        self.advance_to(time)?;

        while let Some((_, due)) = self.next_completing_bot() {
            self.advance_to(due)?;
        }

        let total = self.stats.total_completed();
        self.sink.append_line("");
        self.sink.append_line("Final Status:");
        self.sink.append_line(&format!(
            "- Total Orders Processed: {} ({} VIP, {} Normal)",
            total, self.stats.completed_vip, self.stats.completed_normal
        ));
        self.sink
            .append_line(&format!("- Orders Completed: {}", total));
        self.sink
            .append_line(&format!("- Active Bots: {}", self.bots.len()));
        self.sink
            .append_line(&format!("- Pending Orders: {}", self.pending.len()));
        Ok(())
    }

    /// Offers pending orders to idle bots (lowest id first, VIP tier first),
    /// then handles idle announcements for `announce_idle_for` once the
    /// queue is drained. When the whole fleet has gone quiet the
    /// announcement set widens to every idle bot. A bot is announced at most
    /// once per logical instant.
    fn assign_orders(&mut self, time: u64, announce_idle_for: &[BotId]) {
        let mut idle: Vec<usize> = (0..self.bots.len())
            .filter(|&i| self.bots[i].is_idle())
            .collect();
        idle.sort_by_key(|&i| self.bots[i].id);

        for idx in idle {
            let Some(order_id) = self.pending.dequeue() else {
                break;
            };
            self.start_processing(idx, order_id, time);
        }

        if !self.pending.is_empty() || announce_idle_for.is_empty() {
            return;
        }

        let any_processing = self.bots.iter().any(Bot::is_processing);
        let mut to_announce: Vec<BotId> = announce_idle_for.to_vec();
        if !any_processing {
            for bot in &self.bots {
                if bot.is_idle() && !to_announce.contains(&bot.id) {
                    to_announce.push(bot.id);
                }
            }
        }

        for bot_id in to_announce {
            let Some(bot) = self.bots.iter_mut().find(|b| b.id == bot_id) else {
                continue;
            };
            if bot.is_idle() && bot.last_idle_announcement != Some(time) {
                bot.last_idle_announcement = Some(time);
                self.sink.record(
                    time,
                    &format!("Bot #{} is now IDLE - No pending orders", bot_id),
                );
            }
        }
    }

    fn start_processing(&mut self, bot_idx: usize, order_id: OrderId, time: u64) {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return;
        };
        order.mark_processing(time);
        let class = order.class;

        let busy_until = time + self.processing_secs;
        let bot = &mut self.bots[bot_idx];
        bot.begin_processing(order_id, busy_until);
        let bot_id = bot.id;

        self.sink.record(
            time,
            &format!(
                "Bot #{} picked up {} Order #{} - Status: {}",
                bot_id,
                class,
                order_id,
                OrderStatus::Processing
            ),
        );
    }

    /// Invoked only when the bot's `busy_until` equals `time`.
    fn complete_order(&mut self, bot_idx: usize, time: u64) {
        let Some(order_id) = self.bots[bot_idx].current_order else {
            return;
        };
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return;
        };

        order.mark_complete(time);
        let class = order.class;
        let duration = order.processing_duration(time);
        self.stats.record_completed(class);

        let bot_id = self.bots[bot_idx].id;
        self.sink.record(
            time,
            &format!(
                "Bot #{} completed {} Order #{} - Status: {} (Processing time: {}s)",
                bot_id,
                class,
                order_id,
                OrderStatus::Complete,
                duration
            ),
        );

        self.bots[bot_idx].reset_to_idle();
    }

    /// The processing bot with the earliest completion; ties resolve to the
    /// smallest bot id.
    fn next_completing_bot(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64, BotId)> = None;
        for (idx, bot) in self.bots.iter().enumerate() {
            if !bot.is_processing() {
                continue;
            }
            let Some(due) = bot.busy_until else {
                continue;
            };
            let better = match best {
                None => true,
                Some((_, best_due, best_id)) => due < best_due || (due == best_due && bot.id < best_id),
            };
            if better {
                best = Some((idx, due, bot.id));
            }
        }
        best.map(|(idx, due, _)| (idx, due))
    }

    fn snapshot_orders(&self, ids: Vec<OrderId>) -> Vec<Order> {
        ids.iter()
            .filter_map(|id| self.orders.iter().find(|o| o.id == *id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botsim_core::BotStatus;
    use botsim_telemetry::Transcript;

    fn engine() -> SchedulingEngine<Transcript> {
        SchedulingEngine::new(&SimulationConfig::default(), Transcript::new())
    }

    fn entries(engine: &SchedulingEngine<Transcript>) -> Vec<String> {
        engine.sink().entries().to_vec()
    }

    #[test]
    fn vip_orders_are_processed_before_normal_orders() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        let vip = engine.create_order_at(OrderClass::Vip, 0).unwrap();
        engine.add_bot_at(0).unwrap();

        let bot = &engine.bots()[0];
        assert_eq!(bot.status, BotStatus::Processing);
        assert_eq!(bot.current_order, Some(vip));
    }

    #[test]
    fn removing_a_processing_bot_returns_its_order_to_pending() {
        let mut engine = engine();
        let order = engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        assert_eq!(engine.bots()[0].current_order, Some(order));

        let removed = engine.remove_bot_at(5).unwrap();
        assert!(removed.is_some());
        assert!(engine.bots().is_empty());

        let reverted = &engine.orders()[0];
        assert_eq!(reverted.status, OrderStatus::Pending);
        assert_eq!(reverted.started_at, None);
        assert_eq!(engine.pending_normal().len(), 1);
    }

    #[test]
    fn reverted_order_re_enters_the_front_of_its_tier() {
        let mut engine = engine();
        let first = engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        let second = engine.create_order_at(OrderClass::Normal, 0).unwrap();

        engine.remove_bot_at(5).unwrap();

        let pending: Vec<OrderId> = engine.pending_normal().iter().map(|o| o.id).collect();
        assert_eq!(pending, vec![first, second]);
    }

    #[test]
    fn bot_continues_with_the_next_order_after_completing() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.advance_to(10).unwrap();
        let complete = |e: &SchedulingEngine<Transcript>| {
            e.orders()
                .iter()
                .filter(|o| o.status == OrderStatus::Complete)
                .count()
        };
        assert_eq!(complete(&engine), 1);

        engine.advance_to(20).unwrap();
        assert_eq!(complete(&engine), 2);
    }

    #[test]
    fn simultaneous_completions_resolve_in_bot_id_order() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.advance_to(10).unwrap();

        let completions: Vec<String> = entries(&engine)
            .into_iter()
            .filter(|line| line.contains("completed"))
            .collect();
        assert_eq!(completions.len(), 2);
        assert!(completions[0].contains("Bot #1"));
        assert!(completions[1].contains("Bot #2"));
    }

    #[test]
    fn backward_time_is_rejected_without_mutation() {
        let mut engine = engine();
        engine.advance_to(10).unwrap();

        let err = engine.advance_to(5).unwrap_err();
        assert_eq!(
            err,
            EngineError::TimeReversal {
                current: 10,
                requested: 5
            }
        );

        let err = engine.create_order_at(OrderClass::Vip, 3).unwrap_err();
        assert!(matches!(err, EngineError::TimeReversal { .. }));
        assert!(engine.orders().is_empty());
        assert_eq!(engine.now_secs(), 10);
    }

    #[test]
    fn advance_is_idempotent_without_intervening_mutation() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.advance_to(12).unwrap();
        let orders_before = engine.orders().to_vec();
        let log_before = entries(&engine);

        engine.advance_to(12).unwrap();
        assert_eq!(engine.orders(), &orders_before[..]);
        assert_eq!(entries(&engine), log_before);
    }

    #[test]
    fn idle_announcement_happens_once_per_instant() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.advance_to(10).unwrap();
        engine.advance_to(30).unwrap();

        let idle_lines: Vec<String> = entries(&engine)
            .into_iter()
            .filter(|line| line.contains("is now IDLE"))
            .collect();
        assert_eq!(idle_lines.len(), 1);
        assert!(idle_lines[0].starts_with("[00:00:10]"));
    }

    #[test]
    fn idle_announcement_recurs_at_a_later_instant() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        engine.advance_to(10).unwrap();

        engine.create_order_at(OrderClass::Normal, 20).unwrap();
        engine.advance_to(40).unwrap();

        let idle_lines: Vec<String> = entries(&engine)
            .into_iter()
            .filter(|line| line.contains("is now IDLE"))
            .collect();
        assert_eq!(idle_lines.len(), 2);
        assert!(idle_lines[0].starts_with("[00:00:10]"));
        assert!(idle_lines[1].starts_with("[00:00:30]"));
    }

    #[test]
    fn whole_fleet_going_quiet_announces_every_idle_bot() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.advance_to(10).unwrap();

        let idle_lines: Vec<String> = entries(&engine)
            .into_iter()
            .filter(|line| line.contains("is now IDLE"))
            .collect();
        // Bot 1 finished the only order; bot 2 never worked. Both announce.
        assert_eq!(idle_lines.len(), 2);
        assert!(idle_lines[0].contains("Bot #1"));
        assert!(idle_lines[1].contains("Bot #2"));
    }

    #[test]
    fn removing_without_bots_reports_and_returns_none() {
        let mut engine = engine();
        assert_eq!(engine.remove_bot_at(3).unwrap(), None);
        assert!(entries(&engine)
            .iter()
            .any(|line| line.contains("No bots available to destroy")));
    }

    #[test]
    fn removal_is_lifo() {
        let mut engine = engine();
        engine.add_bot_at(0).unwrap();
        let second = engine.add_bot_at(0).unwrap();

        assert_eq!(engine.remove_bot_at(0).unwrap().map(|b| b.id), Some(second));
        assert_eq!(engine.bots().len(), 1);
        assert_eq!(engine.bots()[0].id, BotId(1));
    }

    #[test]
    fn processing_bot_count_matches_processing_orders() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Vip, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        engine.add_bot_at(0).unwrap();

        let processing_bots = engine.bots().iter().filter(|b| b.is_processing()).count();
        let processing_orders = engine
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Processing)
            .count();
        assert_eq!(processing_bots, 2);
        assert_eq!(processing_bots, processing_orders);
    }

    #[test]
    fn finalize_drains_in_flight_work() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Vip, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();

        engine.finalize_at(5).unwrap();

        // One bot, two sequential orders: the clock lands on the second
        // completion even though finalize was requested at t=5.
        assert_eq!(engine.now_secs(), 20);
        assert_eq!(engine.stats().total_completed(), 2);

        let log = entries(&engine);
        assert!(log.contains(&"Final Status:".to_string()));
        assert!(log.contains(&"- Total Orders Processed: 2 (1 VIP, 1 Normal)".to_string()));
        assert!(log.contains(&"- Active Bots: 1".to_string()));
        assert!(log.contains(&"- Pending Orders: 0".to_string()));
    }

    #[test]
    fn finalize_with_nothing_in_flight_is_a_safe_no_op() {
        let mut engine = engine();
        engine.finalize_at(7).unwrap();
        engine.finalize_at(7).unwrap();
        assert_eq!(engine.now_secs(), 7);
    }

    #[test]
    fn order_ids_start_at_the_configured_base() {
        let mut engine = engine();
        let first = engine.create_order_at(OrderClass::Normal, 0).unwrap();
        let second = engine.create_order_at(OrderClass::Vip, 0).unwrap();
        assert_eq!(first, OrderId(1001));
        assert_eq!(second, OrderId(1002));
    }

    #[test]
    fn stats_track_creations_and_completions_by_class() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Vip, 0).unwrap();
        engine.create_order_at(OrderClass::Normal, 0).unwrap();
        engine.add_bot_at(0).unwrap();
        engine.advance_to(30).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.created_vip, 1);
        assert_eq!(stats.created_normal, 1);
        assert_eq!(stats.completed_vip, 1);
        assert_eq!(stats.completed_normal, 1);
    }

    #[test]
    fn completion_timestamps_respect_the_started_instant() {
        let mut engine = engine();
        engine.create_order_at(OrderClass::Normal, 3).unwrap();
        engine.add_bot_at(7).unwrap();
        engine.advance_to(30).unwrap();

        let order = &engine.orders()[0];
        assert_eq!(order.created_at, 3);
        assert_eq!(order.started_at, Some(7));
        assert_eq!(order.completed_at, Some(17));
    }
}
