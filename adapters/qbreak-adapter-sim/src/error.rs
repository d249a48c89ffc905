//! Error types for the simulator.

use thiserror::Error;

/// Errors raised while simulating a gate sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// The statevector would be larger than the simulator allows.
    #[error("Circuit has {wires} wires but the simulator supports at most {max}")]
    TooManyWires {
        /// Wires requested.
        wires: usize,
        /// Configured limit.
        max: usize,
    },

    /// An operation addresses a wire the state does not have.
    #[error("Operation uses wire {wire} but the state has {wires} wires")]
    WireOutOfRange {
        /// Wire addressed.
        wire: usize,
        /// Wires in the state.
        wires: usize,
    },

    /// A swap operation without its second wire.
    #[error("Swap on wire {wire} has no partner")]
    MissingPartner {
        /// Target wire of the swap.
        wire: usize,
    },
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
