//! Error types for the grid crate.

use thiserror::Error;

/// Errors that can occur in grid operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    /// A (wire, column) pair outside the grid was addressed.
    #[error("Cell (wire {wire}, column {column}) is outside the {wires}x{columns} grid")]
    OutOfRange {
        /// The requested wire.
        wire: usize,
        /// The requested column.
        column: usize,
        /// Number of wires in the grid.
        wires: usize,
        /// Number of columns in the grid.
        columns: usize,
    },

    /// A control or swap field names a wire the grid does not have.
    #[error("Wire {wire} referenced by a gate does not exist (grid has {wires} wires)")]
    WireOutOfRange {
        /// The referenced wire.
        wire: usize,
        /// Number of wires in the grid.
        wires: usize,
    },

    /// A swap gate was stored without its partner wire.
    #[error("Swap gate at wire {wire}, column {column} has no partner wire")]
    MissingSwapPartner {
        /// Wire holding the swap gate.
        wire: usize,
        /// Column holding the swap gate.
        column: usize,
    },

    /// The grid dimensions are unusable.
    #[error("Invalid grid dimensions {wires}x{columns}")]
    InvalidDimensions {
        /// Requested number of wires.
        wires: usize,
        /// Requested number of columns.
        columns: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
