//! ## botsim-core
//! **Domain primitives for the order-fulfillment simulation**
//!
//! ### Key Submodules:
//! - `order/`: `Order` entity, priority classes and status transitions
//! - `bot/`: `Bot` entity and its Idle/Processing lifecycle
//! - `queue/`: `PendingQueue`, the VIP-first two-tier FIFO
//! - `clock/`: `SimClock`, the logical simulation clock
//! - `stats/`: per-class creation/completion counters
//!
//! Everything here is plain owned state: the engine crate is the sole
//! mutator, and each simulation instance carries its own copies so
//! independent simulations never share anything.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bot;
pub mod clock;
pub mod error;
pub mod order;
pub mod queue;
pub mod stats;

pub use bot::{Bot, BotId, BotStatus};
pub use clock::SimClock;
pub use error::EngineError;
pub use order::{Order, OrderClass, OrderId, OrderStatus};
pub use queue::PendingQueue;
pub use stats::OrderStats;
