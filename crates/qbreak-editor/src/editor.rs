//! Cursor-driven editing of a [`Grid`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

use qbreak_grid::{EffectiveKind, GateKind, Grid, GridNode, NodeKind, normalize_angle};

use crate::command::{Command, Direction};
use crate::error::{EditError, EditResult};

/// Whether a command changed the grid or cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The grid or the cursor changed.
    Changed,
    /// The command did not apply here and nothing changed.
    Unchanged,
}

impl Outcome {
    /// Whether anything changed.
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }
}

/// Position of the editing cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Selected wire.
    pub wire: usize,
    /// Selected column.
    pub column: usize,
}

/// Result of trying to put a control on a wire.
enum Placement {
    Placed,
    OutOfBounds,
    Blocked(EffectiveKind),
}

/// Applies edit commands to a grid it exclusively owns.
///
/// The cursor is always inside the grid, so the editor never addresses a
/// cell out of range. Commands that do not fit the cell under the cursor are
/// no-ops; recoverable rejections come back as [`EditError`] diagnostics and
/// leave the grid untouched.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    cursor: Cursor,
}

impl Editor {
    /// Start editing `grid` with the cursor on wire 0, column 0.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cursor: Cursor::default(),
        }
    }

    /// The grid being edited.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stop editing and hand back the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Start a new editing session: empty grid of the same size, cursor home.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.cursor = Cursor::default();
    }

    /// What the cell under the cursor represents.
    pub fn selected_kind(&self) -> EditResult<EffectiveKind> {
        Ok(self
            .grid
            .effective_kind(self.cursor.wire, self.cursor.column)?)
    }

    /// Apply one command.
    #[instrument(skip(self), fields(wire = self.cursor.wire, column = self.cursor.column))]
    pub fn apply(&mut self, command: Command) -> EditResult<Outcome> {
        match command {
            Command::NavigateLeft => Ok(self.navigate(Direction::Left)),
            Command::NavigateRight => Ok(self.navigate(Direction::Right)),
            Command::NavigateUp => Ok(self.navigate(Direction::Up)),
            Command::NavigateDown => Ok(self.navigate(Direction::Down)),
            Command::PlaceX => self.place_gate(GateKind::PauliX),
            Command::PlaceY => self.place_gate(GateKind::PauliY),
            Command::PlaceZ => self.place_gate(GateKind::PauliZ),
            Command::PlaceH => self.place_gate(GateKind::Hadamard),
            Command::Delete => self.delete(),
            Command::ToggleControl => self.toggle_control(),
            Command::MoveControlUp => self.move_control(Direction::Up),
            Command::MoveControlDown => self.move_control(Direction::Down),
            Command::RotateBy(radians) => self.rotate(radians),
        }
    }

    /// Move the cursor one step, clamped to the grid.
    pub fn navigate(&mut self, direction: Direction) -> Outcome {
        let Cursor { wire, column } = self.cursor;
        let next = match direction {
            Direction::Left if column > 0 => Cursor {
                wire,
                column: column - 1,
            },
            Direction::Right if column + 1 < self.grid.columns() => Cursor {
                wire,
                column: column + 1,
            },
            Direction::Up if wire > 0 => Cursor {
                wire: wire - 1,
                column,
            },
            Direction::Down if wire + 1 < self.grid.wires() => Cursor {
                wire: wire + 1,
                column,
            },
            _ => return Outcome::Unchanged,
        };
        self.cursor = next;
        Outcome::Changed
    }

    /// Place a fresh single-wire gate under the cursor if the cell is free.
    pub fn place_gate(&mut self, gate: GateKind) -> EditResult<Outcome> {
        let Cursor { wire, column } = self.cursor;
        let found = self.selected_kind()?;
        if found != EffectiveKind::Empty || !gate.is_single_wire() {
            debug!(%found, gate = gate.name(), "placement rejected");
            return Err(EditError::InvalidPlacement {
                wire,
                column,
                found,
            });
        }
        self.grid.set(wire, column, GridNode::gate(gate))?;
        debug!(gate = gate.name(), "gate placed");
        Ok(Outcome::Changed)
    }

    /// Delete the gate under the cursor, or the control link a control marker belongs to.
    pub fn delete(&mut self) -> EditResult<Outcome> {
        let Cursor { wire, column } = self.cursor;
        match self.selected_kind()? {
            EffectiveKind::Gate(gate) => {
                self.remove_controls(wire, column)?;
                self.grid.set(wire, column, GridNode::empty())?;
                debug!(gate = gate.name(), "gate deleted");
                Ok(Outcome::Changed)
            }
            EffectiveKind::Control => match self.grid.owning_wire_for_control(wire, column)? {
                Some(gate_wire) => {
                    debug!(gate_wire, "deleting control link");
                    self.remove_controls(gate_wire, column)
                }
                None => Ok(Outcome::Unchanged),
            },
            EffectiveKind::Empty | EffectiveKind::Trace | EffectiveKind::SwapPartner => {
                Ok(Outcome::Unchanged)
            }
        }
    }

    /// Add a control next to the gate under the cursor, or remove the one it has.
    pub fn toggle_control(&mut self) -> EditResult<Outcome> {
        let Cursor { wire, column } = self.cursor;
        let Some(mut node) = self.controllable_node()? else {
            return Ok(Outcome::Unchanged);
        };

        if let Some(control) = node.control_a {
            node.control_a = None;
            self.grid.set(wire, column, node)?;
            self.clear_traces_between(wire, control, column)?;
            debug!(control, "control removed");
            return Ok(Outcome::Changed);
        }

        if node.is_rotated() {
            return Ok(Outcome::Unchanged);
        }

        if wire > 0 {
            if let Placement::Placed = self.place_control(wire, wire - 1)? {
                return Ok(Outcome::Changed);
            }
        }
        if let Placement::Placed = self.place_control(wire, wire + 1)? {
            return Ok(Outcome::Changed);
        }

        warn!(wire, column, "cannot place control");
        Err(EditError::ControlUnavailable { wire, column })
    }

    /// Move the control of the gate under the cursor one wire up or down.
    ///
    /// The control steps over the gate's own wire. When the control moves away
    /// from the gate, the wire it leaves is marked as a trace if it is free.
    pub fn move_control(&mut self, direction: Direction) -> EditResult<Outcome> {
        let Cursor { wire, column } = self.cursor;
        let Some(node) = self.controllable_node()? else {
            return Ok(Outcome::Unchanged);
        };
        let Some(control) = node.control_a.filter(|&c| c < self.grid.wires()) else {
            return Ok(Outcome::Unchanged);
        };

        let candidate = match direction {
            Direction::Up => control
                .checked_sub(1)
                .and_then(|c| if c == wire { c.checked_sub(1) } else { Some(c) }),
            Direction::Down => Some(if control + 1 == wire { control + 2 } else { control + 1 }),
            Direction::Left | Direction::Right => None,
        };
        let Some(candidate) = candidate else {
            return Ok(Outcome::Unchanged);
        };

        match self.place_control(wire, candidate)? {
            Placement::OutOfBounds => Ok(Outcome::Unchanged),
            Placement::Blocked(found) => {
                warn!(candidate, %found, "control could not be moved");
                Err(EditError::InvalidPlacement {
                    wire: candidate,
                    column,
                    found,
                })
            }
            Placement::Placed => {
                let behind = match direction {
                    Direction::Up if candidate < wire => Some(candidate + 1),
                    Direction::Down if candidate > wire => Some(candidate - 1),
                    _ => None,
                };
                if let Some(trace_wire) = behind {
                    if self.grid.effective_kind(trace_wire, column)? == EffectiveKind::Empty {
                        self.grid.set(trace_wire, column, GridNode::trace())?;
                    }
                }
                Ok(Outcome::Changed)
            }
        }
    }

    /// Rotate the Pauli gate under the cursor, keeping the angle in `[0, 2π)`.
    pub fn rotate(&mut self, radians: f64) -> EditResult<Outcome> {
        let Cursor { wire, column } = self.cursor;
        let mut node = self.grid.get(wire, column)?;
        match node.kind {
            NodeKind::Gate(gate) if gate.is_rotatable() => {
                node.rotation = normalize_angle(node.rotation + radians);
                self.grid.set(wire, column, node)?;
                debug!(gate = gate.name(), rotation = node.rotation, "gate rotated");
                Ok(Outcome::Changed)
            }
            _ => Ok(Outcome::Unchanged),
        }
    }

    /// The node under the cursor if it owns a gate that accepts controls.
    fn controllable_node(&self) -> EditResult<Option<GridNode>> {
        let Cursor { wire, column } = self.cursor;
        let node = self.grid.get(wire, column)?;
        Ok(node
            .gate_kind()
            .filter(|g| g.is_controllable())
            .map(|_| node))
    }

    /// Point the gate's first control at `candidate` if that wire is free.
    fn place_control(&mut self, gate_wire: usize, candidate: usize) -> EditResult<Placement> {
        let column = self.cursor.column;
        if candidate >= self.grid.wires() {
            return Ok(Placement::OutOfBounds);
        }
        let found = self.grid.effective_kind(candidate, column)?;
        if !found.accepts_control() {
            debug!(candidate, %found, "cannot place control on wire");
            return Ok(Placement::Blocked(found));
        }

        let mut node = self.grid.get(gate_wire, column)?;
        node.control_a = Some(candidate);
        self.grid.set(gate_wire, column, node)?;
        self.grid.set(candidate, column, GridNode::empty())?;
        debug!(candidate, "control placed on wire");
        Ok(Placement::Placed)
    }

    /// Remove the control links of the gate at (`gate_wire`, `column`).
    ///
    /// Trace markers are cleared between the gate and its furthest control.
    /// When both controls are equally far the traces are left in place.
    fn remove_controls(&mut self, gate_wire: usize, column: usize) -> EditResult<Outcome> {
        let mut node = self.grid.get(gate_wire, column)?;
        if !node.has_controls() {
            return Ok(Outcome::Unchanged);
        }

        let distance = |c: Option<usize>| c.map_or(0, |c| c.abs_diff(gate_wire));
        let furthest = match distance(node.control_a).cmp(&distance(node.control_b)) {
            Ordering::Greater => node.control_a,
            Ordering::Less => node.control_b,
            Ordering::Equal => None,
        };

        match furthest {
            Some(control) => self.clear_traces_between(gate_wire, control, column)?,
            None => warn!(
                gate_wire,
                column, "controls are equidistant; trace markers left in place"
            ),
        }

        node.clear_controls();
        self.grid.set(gate_wire, column, node)?;
        Ok(Outcome::Changed)
    }

    /// Clear trace markers strictly between wires `a` and `b`.
    fn clear_traces_between(&mut self, a: usize, b: usize, column: usize) -> EditResult<()> {
        let (low, high) = (a.min(b), a.max(b).min(self.grid.wires()));
        for wire in low + 1..high {
            if self.grid.get(wire, column)?.kind == NodeKind::Trace {
                self.grid.set(wire, column, GridNode::empty())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(wires: usize, columns: usize) -> Editor {
        Editor::new(Grid::new(wires, columns).unwrap())
    }

    #[test]
    fn test_navigate_is_clamped() {
        let mut ed = editor(2, 2);
        assert_eq!(ed.navigate(Direction::Left), Outcome::Unchanged);
        assert_eq!(ed.navigate(Direction::Up), Outcome::Unchanged);
        assert_eq!(ed.navigate(Direction::Right), Outcome::Changed);
        assert_eq!(ed.navigate(Direction::Right), Outcome::Unchanged);
        assert_eq!(ed.navigate(Direction::Down), Outcome::Changed);
        assert_eq!(ed.navigate(Direction::Down), Outcome::Unchanged);
        assert_eq!(ed.cursor(), Cursor { wire: 1, column: 1 });
    }

    #[test]
    fn test_place_swap_rejected() {
        let mut ed = editor(2, 1);
        assert!(matches!(
            ed.place_gate(GateKind::Swap),
            Err(EditError::InvalidPlacement { .. })
        ));
        assert_eq!(ed.grid().gate_count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut ed = editor(2, 2);
        ed.apply(Command::PlaceH).unwrap();
        ed.apply(Command::NavigateRight).unwrap();
        ed.reset();
        assert_eq!(ed.cursor(), Cursor::default());
        assert_eq!(ed.grid().gate_count(), 0);
    }

    #[test]
    fn test_clear_traces_is_exclusive() {
        let mut ed = editor(4, 1);
        for w in 0..4 {
            ed.grid.set(w, 0, GridNode::trace()).unwrap();
        }
        ed.clear_traces_between(3, 0, 0).unwrap();
        assert_eq!(ed.grid().get(0, 0).unwrap().kind, NodeKind::Trace);
        assert!(ed.grid().get(1, 0).unwrap().is_empty());
        assert!(ed.grid().get(2, 0).unwrap().is_empty());
        assert_eq!(ed.grid().get(3, 0).unwrap().kind, NodeKind::Trace);
    }
}
