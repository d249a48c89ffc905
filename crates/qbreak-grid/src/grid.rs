//! The circuit grid: a fixed `wires × columns` matrix of nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{instrument, trace};

use crate::error::{GridError, GridResult};
use crate::gate::{EffectiveKind, GateKind, NodeKind};
use crate::node::GridNode;
use crate::op::{GateOp, StandardGate};
use crate::wire::WireId;

/// Largest number of wires a grid may have.
pub const MAX_WIRES: usize = 20;

/// Largest number of columns a grid may have.
pub const MAX_COLUMNS: usize = 256;

/// Dimensions of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of wires (qubits).
    pub wires: usize,
    /// Number of columns (time steps).
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            wires: 3,
            columns: 16,
        }
    }
}

/// Which side of its gate a control sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkSide {
    /// The control wire index is smaller than the gate's.
    Above,
    /// The control wire index is larger than the gate's.
    Below,
}

/// Derive what `wire` represents within one column.
///
/// An occupied cell always wins. Otherwise the first other node in the column
/// that names `wire` as a control yields [`EffectiveKind::Control`], or as its
/// swap partner yields [`EffectiveKind::SwapPartner`].
pub fn derive_kind(column: &[GridNode], wire: usize) -> EffectiveKind {
    let own = column[wire].kind;
    if own != NodeKind::Empty {
        return own.into();
    }

    for (other_wire, other) in column.iter().enumerate() {
        if other_wire == wire {
            continue;
        }
        if other.is_controlled_by(wire) {
            return EffectiveKind::Control;
        }
        if other.swap_partner == Some(wire) {
            return EffectiveKind::SwapPartner;
        }
    }

    EffectiveKind::Empty
}

/// A circuit grid.
///
/// Column index increases with time, wire index with qubit number. Nodes are
/// stored column-major so that one column is a contiguous slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    wires: usize,
    columns: usize,
    nodes: Vec<GridNode>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(wires: usize, columns: usize) -> GridResult<Self> {
        let cells = wires
            .checked_mul(columns)
            .filter(|_| wires > 0 && columns > 0 && wires <= MAX_WIRES && columns <= MAX_COLUMNS)
            .ok_or(GridError::InvalidDimensions { wires, columns })?;
        Ok(Self {
            wires,
            columns,
            nodes: vec![GridNode::empty(); cells],
        })
    }

    /// Create an empty grid from a configuration.
    pub fn from_config(config: &GridConfig) -> GridResult<Self> {
        Self::new(config.wires, config.columns)
    }

    /// Number of wires.
    pub fn wires(&self) -> usize {
        self.wires
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, wire: usize, column: usize) -> GridResult<usize> {
        if wire >= self.wires || column >= self.columns {
            return Err(GridError::OutOfRange {
                wire,
                column,
                wires: self.wires,
                columns: self.columns,
            });
        }
        Ok(column * self.wires + wire)
    }

    fn column_nodes(&self, column: usize) -> &[GridNode] {
        let start = column * self.wires;
        &self.nodes[start..start + self.wires]
    }

    /// Get a copy of the stored node.
    pub fn get(&self, wire: usize, column: usize) -> GridResult<GridNode> {
        let idx = self.index(wire, column)?;
        Ok(self.nodes[idx])
    }

    /// Overwrite the stored node. No structural validation is done here.
    pub fn set(&mut self, wire: usize, column: usize, node: GridNode) -> GridResult<()> {
        let idx = self.index(wire, column)?;
        self.nodes[idx] = node;
        Ok(())
    }

    /// Nodes of one column, ordered by wire.
    pub fn column(&self, column: usize) -> GridResult<&[GridNode]> {
        self.index(0, column)?;
        Ok(self.column_nodes(column))
    }

    /// What the cell represents, taking links from the rest of its column into account.
    pub fn effective_kind(&self, wire: usize, column: usize) -> GridResult<EffectiveKind> {
        self.index(wire, column)?;
        Ok(derive_kind(self.column_nodes(column), wire))
    }

    /// Find the wire of the gate that uses `control_wire` as a control in `column`.
    pub fn owning_wire_for_control(
        &self,
        control_wire: usize,
        column: usize,
    ) -> GridResult<Option<usize>> {
        self.index(control_wire, column)?;
        Ok(self
            .column_nodes(column)
            .iter()
            .enumerate()
            .find(|(wire, node)| *wire != control_wire && node.is_controlled_by(control_wire))
            .map(|(wire, _)| wire))
    }

    /// Side of its gate on which the control marker at (`wire`, `column`) sits.
    ///
    /// Returns `None` when the cell is not a control marker.
    pub fn control_side(&self, wire: usize, column: usize) -> GridResult<Option<LinkSide>> {
        Ok(self
            .owning_wire_for_control(wire, column)?
            .map(|gate_wire| {
                if wire < gate_wire {
                    LinkSide::Above
                } else {
                    LinkSide::Below
                }
            }))
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.nodes.fill(GridNode::empty());
    }

    /// Number of gate-owning cells.
    pub fn gate_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.gate_kind().is_some()).count()
    }

    /// Linearize the grid into gate operations.
    ///
    /// Columns are visited in ascending order and wires in ascending order
    /// within a column; each gate-owning cell yields exactly one operation.
    #[instrument(skip(self), fields(wires = self.wires, columns = self.columns))]
    pub fn compile(&self) -> GridResult<Vec<GateOp>> {
        let mut ops = Vec::new();
        for column in 0..self.columns {
            for (wire, node) in self.column_nodes(column).iter().enumerate() {
                let Some(gate) = node.gate_kind() else {
                    continue;
                };
                let op = self.lower(gate, node, wire, column)?;
                trace!(column, wire, op = %op, "emit");
                ops.push(op);
            }
        }
        Ok(ops)
    }

    fn link(&self, wire: Option<usize>) -> GridResult<Option<WireId>> {
        match wire {
            Some(w) if w >= self.wires => Err(GridError::WireOutOfRange {
                wire: w,
                wires: self.wires,
            }),
            Some(w) => Ok(Some(WireId::from(w))),
            None => Ok(None),
        }
    }

    fn lower(
        &self,
        gate: GateKind,
        node: &GridNode,
        wire: usize,
        column: usize,
    ) -> GridResult<GateOp> {
        let target = WireId::from(wire);
        let ctrl_a = self.link(node.control_a)?;
        let ctrl_b = self.link(node.control_b)?;
        let theta = node.rotation;
        let rotated = node.is_rotated();

        let op = match gate {
            GateKind::Identity => GateOp::single(StandardGate::I, target),
            GateKind::PauliX => match (rotated, ctrl_a, ctrl_b) {
                (true, _, _) => GateOp::single(StandardGate::Rx(theta), target),
                (false, Some(a), Some(b)) => GateOp::controlled(StandardGate::CCX, [a, b], target),
                (false, Some(a), None) => GateOp::controlled(StandardGate::CX, [a], target),
                (false, None, _) => GateOp::single(StandardGate::X, target),
            },
            GateKind::PauliY => match (rotated, ctrl_a) {
                (true, _) => GateOp::single(StandardGate::Ry(theta), target),
                (false, Some(a)) => GateOp::controlled(StandardGate::CY, [a], target),
                (false, None) => GateOp::single(StandardGate::Y, target),
            },
            GateKind::PauliZ => match (rotated, ctrl_a) {
                (true, Some(a)) => GateOp::controlled(StandardGate::CRz(theta), [a], target),
                (true, None) => GateOp::single(StandardGate::Rz(theta), target),
                (false, Some(a)) => GateOp::controlled(StandardGate::CZ, [a], target),
                (false, None) => GateOp::single(StandardGate::Z, target),
            },
            GateKind::S => GateOp::single(StandardGate::S, target),
            GateKind::SDagger => GateOp::single(StandardGate::Sdg, target),
            GateKind::T => GateOp::single(StandardGate::T, target),
            GateKind::TDagger => GateOp::single(StandardGate::Tdg, target),
            GateKind::Hadamard => match ctrl_a {
                Some(a) => GateOp::controlled(StandardGate::CH, [a], target),
                None => GateOp::single(StandardGate::H, target),
            },
            GateKind::Swap => {
                let partner = self
                    .link(node.swap_partner)?
                    .ok_or(GridError::MissingSwapPartner { wire, column })?;
                match ctrl_a {
                    Some(a) => GateOp::controlled_swap(a, target, partner),
                    None => GateOp::swap(target, partner),
                }
            }
        };
        Ok(op)
    }

    fn glyph(&self, wire: usize, column: usize) -> String {
        let node = &self.column_nodes(column)[wire];
        let label = match derive_kind(self.column_nodes(column), wire) {
            EffectiveKind::Empty => String::new(),
            EffectiveKind::Trace => "┼".into(),
            EffectiveKind::Control => "●".into(),
            EffectiveKind::SwapPartner | EffectiveKind::Gate(GateKind::Swap) => "×".into(),
            EffectiveKind::Gate(GateKind::PauliX) if !node.is_rotated() && node.has_controls() => {
                "⊕".into()
            }
            EffectiveKind::Gate(g) if g.is_rotatable() && node.is_rotated() => {
                format!("R{}", g.name())
            }
            EffectiveKind::Gate(g) => g.name().to_uppercase(),
        };
        format!("{label:─^5}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for wire in 0..self.wires {
            write!(f, "{:<4}", format!("q{wire}"))?;
            for column in 0..self.columns {
                f.write_str(&self.glyph(wire, column))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
