use thiserror::Error;

/// Errors raised by the scheduling engine.
///
/// Both kinds are validation failures detected before any state is touched,
/// so a failed operation never leaves the engine partially mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot move backwards in time (current: {current}, requested: {requested})")]
    TimeReversal { current: u64, requested: u64 },

    #[error("unsupported order class: {0}")]
    UnknownOrderClass(String),
}
