//! Simulator implementation of the grid's [`Simulator`] boundary.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;
use tracing::{debug, instrument};

use qbreak_grid::{GateOp, MAX_WIRES, Simulator};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Local statevector simulator.
///
/// Every call prepares |0...0⟩ and applies the operations in order. Sampling
/// draws from an internal generator, which can be seeded for reproducible runs.
pub struct StatevectorSimulator {
    /// Maximum number of wires accepted.
    max_wires: usize,
    /// Generator used for measurements.
    rng: Mutex<StdRng>,
}

impl StatevectorSimulator {
    /// Create a simulator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            max_wires: MAX_WIRES,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a simulator whose samples are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            max_wires: MAX_WIRES,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a simulator with a custom wire limit, capped at [`MAX_WIRES`].
    pub fn with_max_wires(max_wires: usize) -> Self {
        Self {
            max_wires: max_wires.min(MAX_WIRES),
            ..Self::new()
        }
    }

    /// Maximum number of wires accepted.
    pub fn max_wires(&self) -> usize {
        self.max_wires
    }

    /// Prepare the state produced by `ops`.
    #[instrument(skip(self, ops), fields(ops = ops.len()))]
    pub fn prepare(&self, wires: usize, ops: &[GateOp]) -> SimResult<Statevector> {
        if wires > self.max_wires {
            return Err(SimError::TooManyWires {
                wires,
                max: self.max_wires,
            });
        }

        let start = Instant::now();
        let mut sv = Statevector::new(wires);
        for op in ops {
            sv.apply(op)?;
        }
        debug!("State prepared in {:?}", start.elapsed());
        Ok(sv)
    }

    /// Measure the prepared state `shots` times, counting each basis state seen.
    #[instrument(skip(self, ops), fields(ops = ops.len()))]
    pub fn counts(
        &self,
        wires: usize,
        ops: &[GateOp],
        shots: u32,
    ) -> SimResult<BTreeMap<usize, u32>> {
        let sv = self.prepare(wires, ops)?;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            *counts.entry(sv.sample(&mut *rng)).or_insert(0) += 1;
        }
        debug!("Sampled {} shots into {} outcomes", shots, counts.len());
        Ok(counts)
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for StatevectorSimulator {
    type Error = SimError;

    fn name(&self) -> &str {
        "statevector"
    }

    fn probabilities(&self, wires: usize, ops: &[GateOp]) -> SimResult<Vec<f64>> {
        Ok(self.prepare(wires, ops)?.probabilities())
    }

    fn sample(&self, wires: usize, ops: &[GateOp]) -> SimResult<usize> {
        let sv = self.prepare(wires, ops)?;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = sv.sample(&mut *rng);
        debug!(outcome, "Measured");
        Ok(outcome)
    }
}
