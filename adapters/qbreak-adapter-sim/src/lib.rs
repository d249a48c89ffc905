//! qbreak Local Statevector Simulator
//!
//! This crate runs compiled qbreak grids on a local statevector. It implements
//! the [`qbreak_grid::Simulator`] boundary: the probability of every basis
//! state, for shading each outcome, and single-shot measurement.
//!
//! # Features
//!
//! - **Exact Probabilities**: full statevector, no sampling noise
//! - **Every Compiled Gate**: all [`qbreak_grid::StandardGate`]s, controlled
//!   variants included
//! - **Reproducible Sampling**: optional fixed seed
//!
//! # Memory
//!
//! | Wires | Statevector |
//! |-------|-------------|
//! | 3 | 128 B |
//! | 10 | ~16 KB |
//! | 20 | ~16 MB |
//!
//! # Example
//!
//! ```rust
//! use qbreak_adapter_sim::StatevectorSimulator;
//! use qbreak_grid::{GateKind, Grid, GridNode, Simulator};
//!
//! let mut grid = Grid::new(2, 2).unwrap();
//! grid.set(0, 0, GridNode::gate(GateKind::Hadamard)).unwrap();
//! grid.set(1, 1, GridNode::gate(GateKind::PauliX).with_control(0)).unwrap();
//!
//! let sim = StatevectorSimulator::with_seed(7);
//! let probs = sim.probabilities(grid.wires(), &grid.compile().unwrap()).unwrap();
//!
//! // Expect 50% |00⟩ and 50% |11⟩
//! assert!((probs[0b00] - 0.5).abs() < 1e-10);
//! assert!((probs[0b11] - 0.5).abs() < 1e-10);
//! ```

mod error;
mod simulator;
mod statevector;

pub use error::{SimError, SimResult};
pub use simulator::StatevectorSimulator;
pub use statevector::Statevector;
