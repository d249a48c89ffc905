//! Gate, node and cell kinds.
//!
//! Three closed enums describe what a cell holds:
//!
//! - [`GateKind`]: the gates a node can own.
//! - [`NodeKind`]: what is physically stored in a cell (a gate, nothing, or a
//!   trace marker written by the editor).
//! - [`EffectiveKind`]: what a cell represents once control and swap links
//!   from other wires in the same column are taken into account.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gates a grid node can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X, or Rx when rotated.
    PauliX,
    /// Pauli-Y, or Ry when rotated.
    PauliY,
    /// Pauli-Z, or Rz when rotated.
    PauliZ,
    /// Hadamard gate.
    Hadamard,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    SDagger,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    TDagger,
    /// Identity gate.
    Identity,
    /// Two-wire swap; the other wire is the node's swap partner.
    Swap,
}

impl GateKind {
    /// Short name of the gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::PauliX => "x",
            GateKind::PauliY => "y",
            GateKind::PauliZ => "z",
            GateKind::Hadamard => "h",
            GateKind::S => "s",
            GateKind::SDagger => "sdg",
            GateKind::T => "t",
            GateKind::TDagger => "tdg",
            GateKind::Identity => "id",
            GateKind::Swap => "swap",
        }
    }

    /// Whether the gate carries a rotation angle.
    #[inline]
    pub fn is_rotatable(self) -> bool {
        matches!(self, GateKind::PauliX | GateKind::PauliY | GateKind::PauliZ)
    }

    /// Whether the editor may attach a control wire to this gate.
    #[inline]
    pub fn is_controllable(self) -> bool {
        matches!(
            self,
            GateKind::PauliX | GateKind::PauliY | GateKind::PauliZ | GateKind::Hadamard
        )
    }

    /// Whether the gate occupies a single wire on its own.
    #[inline]
    pub fn is_single_wire(self) -> bool {
        !matches!(self, GateKind::Swap)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content physically stored in a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// Nothing stored.
    #[default]
    Empty,
    /// The cell owns a gate.
    Gate(GateKind),
    /// Pass-through marker for a control link crossing this wire.
    Trace,
}

impl NodeKind {
    /// The owned gate, if any.
    #[inline]
    pub fn gate(self) -> Option<GateKind> {
        match self {
            NodeKind::Gate(g) => Some(g),
            NodeKind::Empty | NodeKind::Trace => None,
        }
    }
}

/// What a cell represents after derivation from its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveKind {
    /// Free cell.
    Empty,
    /// The cell owns a gate.
    Gate(GateKind),
    /// Stored pass-through marker.
    Trace,
    /// Another gate in the column uses this wire as a control.
    Control,
    /// Another swap gate in the column uses this wire as its partner.
    SwapPartner,
}

impl EffectiveKind {
    /// Whether a control may be placed on a cell of this kind.
    #[inline]
    pub fn accepts_control(self) -> bool {
        matches!(self, EffectiveKind::Empty | EffectiveKind::Trace)
    }
}

impl From<NodeKind> for EffectiveKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Empty => EffectiveKind::Empty,
            NodeKind::Gate(g) => EffectiveKind::Gate(g),
            NodeKind::Trace => EffectiveKind::Trace,
        }
    }
}

impl fmt::Display for EffectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveKind::Empty => f.write_str("empty"),
            EffectiveKind::Gate(g) => write!(f, "gate {g}"),
            EffectiveKind::Trace => f.write_str("trace"),
            EffectiveKind::Control => f.write_str("control"),
            EffectiveKind::SwapPartner => f.write_str("swap partner"),
        }
    }
}
