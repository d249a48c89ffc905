//! Boundary to the simulation engine that executes compiled grids.
//!
//! The grid crate does not simulate anything. A [`Simulator`] receives the
//! output of [`Grid::compile`](crate::Grid::compile) and answers with either
//! the probability of every basis state or one sampled basis state.
//!
//! Basis states are indexed with wire `i` as bit `i`, so a grid with `n` wires
//! has `2^n` outcomes.

use crate::op::GateOp;

/// An engine that runs compiled gate sequences.
pub trait Simulator {
    /// Error produced by the engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the engine.
    fn name(&self) -> &str;

    /// Probability of measuring each basis state, indexed by basis state.
    ///
    /// The returned vector has length `2^wires`.
    fn probabilities(&self, wires: usize, ops: &[GateOp]) -> Result<Vec<f64>, Self::Error>;

    /// Run the sequence once and measure every wire.
    fn sample(&self, wires: usize, ops: &[GateOp]) -> Result<usize, Self::Error>;
}

/// Most likely basis state in a probability vector, ties going to the lower index.
pub fn most_likely(probabilities: &[f64]) -> Option<usize> {
    probabilities
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((idx, p)),
        })
        .map(|(idx, _)| idx)
}

/// Render a basis state as a bitstring with wire 0 on the right.
pub fn basis_label(state: usize, wires: usize) -> String {
    format!("{state:0wires$b}")
}
