//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

use qbreak_grid::{GateOp, MAX_WIRES, StandardGate, WireId};

use crate::error::{SimError, SimResult};

/// A 2×2 unitary in row-major order.
type Matrix = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

fn diagonal(phase: f64) -> Matrix {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, phase)]]
}

/// The single-wire unitary a gate applies to its target once its controls are set.
///
/// Swaps have no such matrix and return `None`.
fn target_matrix(gate: StandardGate) -> Option<Matrix> {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let m = match gate {
        StandardGate::I => [[ONE, ZERO], [ZERO, ONE]],
        StandardGate::X | StandardGate::CX | StandardGate::CCX => [[ZERO, ONE], [ONE, ZERO]],
        StandardGate::Y | StandardGate::CY => [[ZERO, -I], [I, ZERO]],
        StandardGate::Z | StandardGate::CZ => [[ONE, ZERO], [ZERO, -ONE]],
        StandardGate::H | StandardGate::CH => [[h, h], [h, -h]],
        StandardGate::S => diagonal(FRAC_PI_2),
        StandardGate::Sdg => diagonal(-FRAC_PI_2),
        StandardGate::T => diagonal(FRAC_PI_4),
        StandardGate::Tdg => diagonal(-FRAC_PI_4),
        StandardGate::Rx(theta) => {
            let c = Complex64::new((theta / 2.0).cos(), 0.0);
            let s = Complex64::new(0.0, -(theta / 2.0).sin());
            [[c, s], [s, c]]
        }
        StandardGate::Ry(theta) => {
            let c = Complex64::new((theta / 2.0).cos(), 0.0);
            let s = Complex64::new((theta / 2.0).sin(), 0.0);
            [[c, -s], [s, c]]
        }
        StandardGate::Rz(theta) | StandardGate::CRz(theta) => [
            [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
            [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
        ],
        StandardGate::Swap | StandardGate::CSwap => return None,
    };
    Some(m)
}

/// The state of `wires` qubits, wire `i` being bit `i` of the basis index.
#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    wires: usize,
}

impl Statevector {
    /// Create a statevector initialized to |0...0⟩.
    ///
    /// `wires` must be at most [`MAX_WIRES`]; larger counts are clamped.
    /// [`StatevectorSimulator`](crate::StatevectorSimulator) rejects them
    /// before a state is ever built.
    pub fn new(wires: usize) -> Self {
        let wires = wires.min(MAX_WIRES);
        let mut amplitudes = vec![ZERO; 1 << wires];
        amplitudes[0] = ONE;
        Self { amplitudes, wires }
    }

    /// Number of wires.
    pub fn wires(&self) -> usize {
        self.wires
    }

    /// The amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    fn mask(&self, wire: WireId) -> SimResult<usize> {
        let wire = wire.index();
        if wire >= self.wires {
            return Err(SimError::WireOutOfRange {
                wire,
                wires: self.wires,
            });
        }
        Ok(1 << wire)
    }

    /// Apply one compiled operation.
    pub fn apply(&mut self, op: &GateOp) -> SimResult<()> {
        let mut controls = 0;
        for &control in &op.controls {
            controls |= self.mask(control)?;
        }
        let target = self.mask(op.target)?;

        match target_matrix(op.gate) {
            Some(matrix) => self.apply_controlled(controls, target, &matrix),
            None => {
                let partner = op.partner.ok_or(SimError::MissingPartner {
                    wire: op.target.index(),
                })?;
                let partner = self.mask(partner)?;
                self.apply_swap(controls, target, partner);
            }
        }
        Ok(())
    }

    /// Apply `matrix` to the target bit of every basis pair whose control bits are all set.
    fn apply_controlled(&mut self, controls: usize, target: usize, matrix: &Matrix) {
        for i in 0..self.amplitudes.len() {
            if i & target != 0 || i & controls != controls {
                continue;
            }
            let j = i | target;
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = matrix[0][0] * a + matrix[0][1] * b;
            self.amplitudes[j] = matrix[1][0] * a + matrix[1][1] * b;
        }
    }

    /// Exchange the two target bits wherever the control bits are all set.
    fn apply_swap(&mut self, controls: usize, first: usize, second: usize) {
        if first == second {
            return;
        }
        for i in 0..self.amplitudes.len() {
            if i & controls == controls && i & first != 0 && i & second == 0 {
                let j = (i & !first) | second;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Draw one basis state according to the Born rule.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        let mut last_nonzero = 0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 0.0 {
                last_nonzero = i;
            }
            cumulative += p;
            if r < cumulative {
                return i;
            }
        }

        // Rounding left the cumulative sum just below 1.
        last_nonzero
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn run(wires: usize, ops: &[GateOp]) -> Statevector {
        let mut sv = Statevector::new(wires);
        for op in ops {
            sv.apply(op).unwrap();
        }
        sv
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], ONE));
        assert!(sv.amplitudes()[1..].iter().all(|a| approx_eq(*a, ZERO)));
    }

    #[test]
    fn test_bell_state() {
        let sv = run(
            2,
            &[
                GateOp::single(StandardGate::H, WireId(0)),
                GateOp::controlled(StandardGate::CX, [WireId(0)], WireId(1)),
            ],
        );
        let amp = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(sv.amplitudes()[0], amp));
        assert!(approx_eq(sv.amplitudes()[1], ZERO));
        assert!(approx_eq(sv.amplitudes()[2], ZERO));
        assert!(approx_eq(sv.amplitudes()[3], amp));
    }

    #[test]
    fn test_wire_is_bit() {
        let sv = run(3, &[GateOp::single(StandardGate::X, WireId(1))]);
        assert!(approx_eq(sv.amplitudes()[0b010], ONE));
    }

    #[test]
    fn test_y_phases() {
        let sv = run(1, &[GateOp::single(StandardGate::Y, WireId(0))]);
        assert!(approx_eq(sv.amplitudes()[1], I));
    }

    #[test]
    fn test_rotations() {
        let sv = run(1, &[GateOp::single(StandardGate::Ry(PI), WireId(0))]);
        assert!(approx_eq(sv.amplitudes()[1], ONE));

        let sv = run(1, &[GateOp::single(StandardGate::Rx(PI), WireId(0))]);
        assert!(approx_eq(sv.amplitudes()[1], -I));

        let sv = run(1, &[GateOp::single(StandardGate::Rz(PI), WireId(0))]);
        assert!((sv.probabilities()[0] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_controlled_gate_needs_control_set() {
        let sv = run(
            2,
            &[GateOp::controlled(StandardGate::CX, [WireId(1)], WireId(0))],
        );
        assert!(approx_eq(sv.amplitudes()[0], ONE));
    }

    #[test]
    fn test_toffoli() {
        let sv = run(
            3,
            &[
                GateOp::single(StandardGate::X, WireId(0)),
                GateOp::single(StandardGate::X, WireId(1)),
                GateOp::controlled(StandardGate::CCX, [WireId(0), WireId(1)], WireId(2)),
            ],
        );
        assert!(approx_eq(sv.amplitudes()[0b111], ONE));
    }

    #[test]
    fn test_swap_and_fredkin() {
        let sv = run(
            2,
            &[
                GateOp::single(StandardGate::X, WireId(0)),
                GateOp::swap(WireId(0), WireId(1)),
            ],
        );
        assert!(approx_eq(sv.amplitudes()[0b10], ONE));

        let sv = run(
            3,
            &[
                GateOp::single(StandardGate::X, WireId(1)),
                GateOp::controlled_swap(WireId(0), WireId(1), WireId(2)),
            ],
        );
        assert!(approx_eq(sv.amplitudes()[0b010], ONE));
    }

    #[test]
    fn test_wire_out_of_range() {
        let mut sv = Statevector::new(2);
        assert_eq!(
            sv.apply(&GateOp::single(StandardGate::H, WireId(2))),
            Err(SimError::WireOutOfRange { wire: 2, wires: 2 })
        );
    }

    #[test]
    fn test_sample_deterministic() {
        let sv = run(2, &[GateOp::single(StandardGate::X, WireId(1))]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sv.sample(&mut rng), 2);
        }
    }
}
