/*!
# Botsim Engine

The discrete-event core of the order-fulfillment simulator. Orders of two
priority classes arrive, a pool of identical bots processes them one at a
time at a fixed duration, and the simulation advances in discrete jumps to
requested timestamps or the next scheduled completion.

## Key Components:
- **SchedulingEngine:** owns the logical clock, registries, and the pending
  queue; the sole mutator of all simulation state.
- **Scenario:** YAML-scripted operation sequences for deterministic replay.
- **Runtime:** shared entry points (demo script, scenario replay) so
  different frontends reuse the same implementation.
*/

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod runtime;
pub mod scenario;
pub mod scheduler;

pub use runtime::{run_demo_mode, run_scenario_mode};
pub use scenario::{Scenario, ScenarioError, Step};
pub use scheduler::SchedulingEngine;
