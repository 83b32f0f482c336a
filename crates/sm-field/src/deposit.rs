//! Lock-free additive deposit accumulator.
//!
//! Deposits are stored as unsigned fixed-point integers with 20 fractional
//! bits and added with `fetch_add`.  Integer addition is associative, so the
//! committed sum of a cell is identical whatever order (or thread) the
//! deposits arrived in; the run stays bit-for-bit reproducible under any
//! degree of parallelism.  Resolution is 2⁻²⁰ ≈ 9.5e-7 per deposit; the
//! accepted `deposit_amount` range is enforced by `SimulationConfig::validate`.

use std::sync::atomic::{AtomicU64, Ordering};

use sm_core::{GridDims, ResourceError, deposit_from_fixed, deposit_to_fixed};

/// Per-cell pending deposits for the current tick.
pub struct DepositLayer {
    cells: Vec<AtomicU64>,
}

impl DepositLayer {
    pub fn new(dims: GridDims) -> Result<Self, ResourceError> {
        let n = dims.cells();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n)
            .map_err(|source| ResourceError::Allocation { what: "deposit layer", elements: n, source })?;
        cells.extend((0..n).map(|_| AtomicU64::new(0)));
        Ok(Self { cells })
    }

    /// Add `amount` to cell `index`.  Safe to call from many threads at once.
    #[inline]
    pub fn add(&self, index: usize, amount: f32) {
        let raw = deposit_to_fixed(amount);
        if raw > 0 {
            self.cells[index].fetch_add(raw, Ordering::Relaxed);
        }
    }

    /// Accumulated amount at cell `index`.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        deposit_from_fixed(self.cells[index].load(Ordering::Relaxed))
    }

    /// `true` if no cell holds a pending deposit.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.load(Ordering::Relaxed) == 0)
    }

    /// Add every pending deposit into `values` and zero the layer.
    ///
    /// Requires `&mut self`: no deposit can race with the commit.
    pub fn commit_into(&mut self, values: &mut [f32]) {
        debug_assert_eq!(values.len(), self.cells.len());

        #[cfg(not(feature = "parallel"))]
        {
            for (v, cell) in values.iter_mut().zip(self.cells.iter_mut()) {
                let raw = std::mem::take(cell.get_mut());
                if raw > 0 {
                    *v += deposit_from_fixed(raw);
                }
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            values
                .par_iter_mut()
                .zip(self.cells.par_iter_mut())
                .for_each(|(v, cell)| {
                    let raw = std::mem::take(cell.get_mut());
                    if raw > 0 {
                        *v += deposit_from_fixed(raw);
                    }
                });
        }
    }
}
