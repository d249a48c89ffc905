//! End-to-end tests: grids compiled and run on the statevector simulator.

use proptest::prelude::*;
use std::f64::consts::PI;

use qbreak_adapter_sim::StatevectorSimulator;
use qbreak_grid::{GateKind, Grid, GridNode, Simulator};

fn probabilities(grid: &Grid) -> Vec<f64> {
    let ops = grid.compile().unwrap();
    StatevectorSimulator::new()
        .probabilities(grid.wires(), &ops)
        .unwrap()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-10, "state {i}: {a} != {e}");
    }
}

#[test]
fn empty_grid_stays_in_ground_state() {
    let grid = Grid::new(3, 4).unwrap();
    let mut expected = vec![0.0; 8];
    expected[0] = 1.0;
    assert_close(&probabilities(&grid), &expected);
}

#[test]
fn not_gate_flips_its_wire() {
    let mut grid = Grid::new(3, 1).unwrap();
    grid.set(2, 0, GridNode::gate(GateKind::PauliX)).unwrap();
    let mut expected = vec![0.0; 8];
    expected[0b100] = 1.0;
    assert_close(&probabilities(&grid), &expected);
}

#[test]
fn trace_cells_do_not_act() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.set(0, 0, GridNode::gate(GateKind::PauliX)).unwrap();
    grid.set(2, 1, GridNode::gate(GateKind::PauliX).with_control(0))
        .unwrap();
    grid.set(1, 1, GridNode::trace()).unwrap();
    let mut expected = vec![0.0; 8];
    expected[0b101] = 1.0;
    assert_close(&probabilities(&grid), &expected);
}

#[test]
fn half_turn_y_rotation_flips() {
    let mut grid = Grid::new(1, 1).unwrap();
    grid.set(0, 0, GridNode::gate(GateKind::PauliY).with_rotation(PI))
        .unwrap();
    assert_close(&probabilities(&grid), &[0.0, 1.0]);
}

#[test]
fn controlled_swap_moves_excitation() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.set(0, 0, GridNode::gate(GateKind::PauliX)).unwrap();
    grid.set(1, 0, GridNode::gate(GateKind::PauliX)).unwrap();
    grid.set(1, 1, GridNode::swap(2).with_control(0)).unwrap();
    let mut expected = vec![0.0; 8];
    expected[0b101] = 1.0;
    assert_close(&probabilities(&grid), &expected);
}

fn arb_gate() -> impl Strategy<Value = Option<GridNode>> {
    prop_oneof![
        Just(None),
        Just(Some(GridNode::gate(GateKind::Hadamard))),
        Just(Some(GridNode::gate(GateKind::PauliX))),
        Just(Some(GridNode::gate(GateKind::T))),
        (0.0..2.0 * PI).prop_map(|t| Some(GridNode::gate(GateKind::PauliY).with_rotation(t))),
        (0.0..2.0 * PI).prop_map(|t| Some(GridNode::gate(GateKind::PauliZ).with_rotation(t))),
    ]
}

proptest! {
    /// Probabilities of any compiled grid form a distribution.
    #[test]
    fn probabilities_sum_to_one(cells in prop::collection::vec(arb_gate(), 12)) {
        let mut grid = Grid::new(3, 4).unwrap();
        for (idx, cell) in cells.into_iter().enumerate() {
            if let Some(node) = cell {
                grid.set(idx % 3, idx / 3, node).unwrap();
            }
        }
        let probs = probabilities(&grid);
        prop_assert_eq!(probs.len(), 8);
        prop_assert!(probs.iter().all(|p| *p >= 0.0));
        prop_assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
