//! Grid nodes: the authoritative content of one cell.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

use crate::gate::{GateKind, NodeKind};

/// Angles this close to 0 or 2π are snapped to 0.
const ANGLE_EPSILON: f64 = 1e-9;

/// Normalize an angle in radians into `[0, 2π)`.
///
/// Accumulated floating-point error around a full turn is snapped back to 0,
/// so sixteen rotations by π/8 on a Z gate land exactly on an unrotated gate.
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped < ANGLE_EPSILON || TAU - wrapped < ANGLE_EPSILON {
        0.0
    } else {
        wrapped
    }
}

/// One cell's stored content.
///
/// Control and swap-partner markers are never stored; they are derived from
/// the `control_a`, `control_b` and `swap_partner` fields of the gate that
/// owns them. An `Empty` node carries no rotation, controls or partner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridNode {
    /// What the cell stores.
    pub kind: NodeKind,
    /// Rotation in radians, meaningful only for Pauli gates.
    pub rotation: f64,
    /// First control wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_a: Option<usize>,
    /// Second control wire, only used by a doubly-controlled X.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_b: Option<usize>,
    /// Other wire of a swap gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_partner: Option<usize>,
}

impl GridNode {
    /// An empty node.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh gate node with no rotation, controls or partner.
    pub fn gate(gate: GateKind) -> Self {
        Self {
            kind: NodeKind::Gate(gate),
            ..Self::default()
        }
    }

    /// A pass-through trace marker.
    pub fn trace() -> Self {
        Self {
            kind: NodeKind::Trace,
            ..Self::default()
        }
    }

    /// A swap gate paired with `partner`.
    pub fn swap(partner: usize) -> Self {
        Self::gate(GateKind::Swap).with_swap_partner(partner)
    }

    /// Set the rotation angle (normalized into `[0, 2π)`).
    #[must_use]
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = normalize_angle(radians);
        self
    }

    /// Set the first control wire.
    #[must_use]
    pub fn with_control(mut self, wire: usize) -> Self {
        self.control_a = Some(wire);
        self
    }

    /// Set both control wires.
    #[must_use]
    pub fn with_controls(mut self, a: usize, b: usize) -> Self {
        self.control_a = Some(a);
        self.control_b = Some(b);
        self
    }

    /// Set the swap partner wire.
    #[must_use]
    pub fn with_swap_partner(mut self, wire: usize) -> Self {
        self.swap_partner = Some(wire);
        self
    }

    /// Whether the node stores nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind == NodeKind::Empty
    }

    /// The gate this node owns, if any.
    #[inline]
    pub fn gate_kind(&self) -> Option<GateKind> {
        self.kind.gate()
    }

    /// Whether the node carries a non-zero rotation.
    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }

    /// Whether `wire` is one of this node's control wires.
    #[inline]
    pub fn is_controlled_by(&self, wire: usize) -> bool {
        self.control_a == Some(wire) || self.control_b == Some(wire)
    }

    /// Whether the node has any control wire.
    #[inline]
    pub fn has_controls(&self) -> bool {
        self.control_a.is_some() || self.control_b.is_some()
    }

    /// Drop both control wires.
    pub fn clear_controls(&mut self) {
        self.control_a = None;
        self.control_b = None;
    }
}

impl fmt::Display for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Empty => f.write_str("type: empty")?,
            NodeKind::Trace => f.write_str("type: trace")?,
            NodeKind::Gate(g) => write!(f, "type: {g}")?,
        }
        if self.is_rotated() {
            write!(f, ", radians: {}", self.rotation)?;
        }
        if let Some(a) = self.control_a {
            write!(f, ", ctrl_a: {a}")?;
        }
        if let Some(b) = self.control_b {
            write!(f, ", ctrl_b: {b}")?;
        }
        if let Some(s) = self.swap_partner {
            write!(f, ", swap: {s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_node_has_no_links() {
        let node = GridNode::empty();
        assert!(node.is_empty());
        assert!(!node.is_rotated());
        assert!(!node.has_controls());
        assert!(node.swap_partner.is_none());
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_snaps_near_full_turn() {
        let mut angle = 0.0;
        for _ in 0..8 {
            angle = normalize_angle(angle + PI / 4.0);
        }
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_display() {
        let node = GridNode::gate(GateKind::PauliX).with_control(1);
        assert_eq!(format!("{node}"), "type: x, ctrl_a: 1");

        let node = GridNode::swap(4);
        assert_eq!(format!("{node}"), "type: swap, swap: 4");
    }
}
