//! qbreak Circuit Grid
//!
//! This crate holds the grid model behind the qbreak circuit editor: a fixed
//! `wires × columns` matrix of nodes, the derivation that tells what each cell
//! represents, and the compiler that linearizes the grid into gate operations
//! for a simulation engine.
//!
//! # Core Components
//!
//! - **Kinds**: [`GateKind`] for the gates a cell can own, [`NodeKind`] for
//!   stored content and [`EffectiveKind`] for derived content
//! - **Nodes**: [`GridNode`], one cell with its rotation and links
//! - **Grid**: [`Grid`] with [`Grid::effective_kind`] and [`Grid::compile`]
//! - **Operations**: [`GateOp`] and [`StandardGate`], the compiled output
//! - **Backend boundary**: [`Simulator`], implemented by adapter crates
//!
//! # Example: A Controlled-X
//!
//! ```rust
//! use qbreak_grid::{EffectiveKind, GateKind, Grid, GridNode, StandardGate, WireId};
//!
//! let mut grid = Grid::new(4, 8).unwrap();
//! grid.set(3, 0, GridNode::gate(GateKind::PauliX).with_control(1)).unwrap();
//!
//! // The control marker on wire 1 is derived, never stored.
//! assert_eq!(grid.effective_kind(1, 0).unwrap(), EffectiveKind::Control);
//! assert!(grid.get(1, 0).unwrap().is_empty());
//!
//! let ops = grid.compile().unwrap();
//! assert_eq!(ops.len(), 1);
//! assert_eq!(ops[0].gate, StandardGate::CX);
//! assert_eq!(ops[0].controls, vec![WireId(1)]);
//! assert_eq!(ops[0].target, WireId(3));
//! ```
//!
//! # Gate Mapping
//!
//! | Cell | Controls | Operation |
//! |------|----------|-----------|
//! | `X` | none / a / a+b | `x` / `cx` / `ccx` |
//! | `X` rotated | ignored | `rx` |
//! | `Y` | none / a | `y` / `cy` |
//! | `Y` rotated | ignored | `ry` |
//! | `Z` | none / a | `z` / `cz` |
//! | `Z` rotated | none / a | `rz` / `crz` |
//! | `H` | none / a | `h` / `ch` |
//! | `S`, `Sdg`, `T`, `Tdg`, `I` | ignored | fixed single-wire gate |
//! | `Swap` | none / a | `swap` / `cswap` |

pub mod backend;
pub mod error;
pub mod gate;
pub mod grid;
pub mod node;
pub mod op;
pub mod wire;

pub use backend::{Simulator, basis_label, most_likely};
pub use error::{GridError, GridResult};
pub use gate::{EffectiveKind, GateKind, NodeKind};
pub use grid::{Grid, GridConfig, LinkSide, MAX_COLUMNS, MAX_WIRES, derive_kind};
pub use node::{GridNode, normalize_angle};
pub use op::{GateOp, StandardGate};
pub use wire::WireId;
