//! Error types for the editor crate.

use qbreak_grid::{EffectiveKind, GridError};
use thiserror::Error;

/// Errors and diagnostics produced by editing commands.
///
/// Every variant except [`EditError::Grid`] is recoverable: the grid is left
/// exactly as it was before the command.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EditError {
    /// The target cell is not free.
    #[error("Cannot place on wire {wire}, column {column}: cell holds {found}")]
    InvalidPlacement {
        /// Wire that was probed.
        wire: usize,
        /// Column that was probed.
        column: usize,
        /// What the cell held.
        found: EffectiveKind,
    },

    /// Neither neighbouring wire can take a control.
    #[error("Cannot place control for gate on wire {wire}, column {column}")]
    ControlUnavailable {
        /// Wire of the gate.
        wire: usize,
        /// Column of the gate.
        column: usize,
    },

    /// Command text could not be parsed.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Grid accessor failure.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

impl EditError {
    /// Whether the command was rejected without touching the grid.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EditError::Grid(_))
    }
}

/// Result type for editing commands.
pub type EditResult<T> = Result<T, EditError>;
