//! qbreak Grid Editor
//!
//! A cursor-driven command processor over a [`qbreak_grid::Grid`]. Commands
//! are applied one at a time; each either mutates the grid and cursor or
//! leaves both untouched. The editor keeps the structural invariant the grid
//! itself does not check: a gate's control wires are never occupied by
//! another gate.
//!
//! # Example: A Bell Pair
//!
//! ```rust
//! use qbreak_editor::{Command, CommandParser, Editor};
//! use qbreak_grid::{Grid, StandardGate};
//!
//! let mut editor = Editor::new(Grid::new(2, 4).unwrap());
//! for command in CommandParser::default().parse_script("h d s x c").unwrap() {
//!     editor.apply(command).unwrap();
//! }
//!
//! let ops = editor.grid().compile().unwrap();
//! assert_eq!(ops[0].gate, StandardGate::H);
//! assert_eq!(ops[1].gate, StandardGate::CX);
//! ```

pub mod command;
pub mod editor;
pub mod error;

pub use command::{Command, CommandParser, DEFAULT_ROTATION_STEP, Direction};
pub use editor::{Cursor, Editor, Outcome};
pub use error::{EditError, EditResult};
