//! Compiled gate operations handed to a simulation backend.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire::WireId;

/// Gates a compiled grid can contain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-wire gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate.
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate.
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation around X.
    Rx(f64),
    /// Rotation around Y.
    Ry(f64),
    /// Rotation around Z.
    Rz(f64),

    // Controlled gates
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Y.
    CY,
    /// Controlled-Z.
    CZ,
    /// Controlled-Hadamard.
    CH,
    /// Controlled rotation around Z.
    CRz(f64),
    /// Toffoli (doubly-controlled X).
    CCX,

    // Swaps
    /// SWAP gate.
    Swap,
    /// Fredkin (controlled swap).
    CSwap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CH => "ch",
            StandardGate::CRz(_) => "crz",
            StandardGate::CCX => "ccx",
            StandardGate::Swap => "swap",
            StandardGate::CSwap => "cswap",
        }
    }

    /// Get the number of wires this gate acts on.
    #[inline]
    pub fn num_wires(&self) -> usize {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_) => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CH
            | StandardGate::CRz(_)
            | StandardGate::Swap => 2,

            StandardGate::CCX | StandardGate::CSwap => 3,
        }
    }

    /// The rotation angle, for parameterized gates.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rx(t) | StandardGate::Ry(t) | StandardGate::Rz(t) | StandardGate::CRz(t) => {
                Some(*t)
            }
            _ => None,
        }
    }
}

/// One compiled operation: a gate with its wires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOp {
    /// The gate applied.
    pub gate: StandardGate,
    /// Wire the gate targets.
    pub target: WireId,
    /// Control wires, in order (zero, one or two).
    pub controls: Vec<WireId>,
    /// Second target of a swap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<WireId>,
}

impl GateOp {
    /// An uncontrolled single-wire operation.
    pub fn single(gate: StandardGate, target: WireId) -> Self {
        Self {
            gate,
            target,
            controls: vec![],
            partner: None,
        }
    }

    /// A controlled operation.
    pub fn controlled(
        gate: StandardGate,
        controls: impl IntoIterator<Item = WireId>,
        target: WireId,
    ) -> Self {
        Self {
            gate,
            target,
            controls: controls.into_iter().collect(),
            partner: None,
        }
    }

    /// A swap between `target` and `partner`.
    pub fn swap(target: WireId, partner: WireId) -> Self {
        Self {
            gate: StandardGate::Swap,
            target,
            controls: vec![],
            partner: Some(partner),
        }
    }

    /// A swap between `target` and `partner` conditioned on `control`.
    pub fn controlled_swap(control: WireId, target: WireId, partner: WireId) -> Self {
        Self {
            gate: StandardGate::CSwap,
            target,
            controls: vec![control],
            partner: Some(partner),
        }
    }

    /// Get the name of the gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// The rotation angle, if any.
    pub fn angle(&self) -> Option<f64> {
        self.gate.angle()
    }

    /// All wires in operand order: controls, target, then partner.
    pub fn wires(&self) -> Vec<WireId> {
        let mut wires = self.controls.clone();
        wires.push(self.target);
        wires.extend(self.partner);
        wires
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if let Some(theta) = self.angle() {
            write!(f, "({theta:.4})")?;
        }
        let wires: Vec<String> = self.wires().iter().map(ToString::to_string).collect();
        write!(f, " {}", wires.join(", "))
    }
}
