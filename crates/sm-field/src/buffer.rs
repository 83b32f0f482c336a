//! The double-buffered trail field.

use sm_core::{GridDims, ResourceError, SimulationConfig};
use tracing::trace;

use crate::evolve::{EvolveParams, evolve_into};
use crate::{DepositLayer, TrailField};

/// Owns the `current` and `next` trail fields and the deposit layer.
///
/// - [`sample`](Self::sample) reads `current` only.
/// - [`deposit`](Self::deposit) writes the deposit layer only, through `&self`,
///   so any number of agents may deposit concurrently while others sample.
/// - [`evolve`](Self::evolve) needs `&mut self`; the borrow checker therefore
///   guarantees every deposit has landed and no sample is in flight.
pub struct FieldBuffer {
    dims:     GridDims,
    current:  TrailField,
    next:     TrailField,
    deposits: DepositLayer,
}

impl FieldBuffer {
    /// Allocate an all-zero field.
    pub fn new(dims: GridDims) -> Result<Self, ResourceError> {
        Ok(Self {
            dims,
            current:  TrailField::zeroed(dims)?,
            next:     TrailField::zeroed(dims)?,
            deposits: DepositLayer::new(dims)?,
        })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Density of the current field at `(x mod width, y mod height)`.
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> f32 {
        self.current.get(x, y)
    }

    /// Add `amount` to the wrapped cell's pending deposit.  Invisible to
    /// [`sample`](Self::sample) until the next [`evolve`](Self::evolve).
    #[inline]
    pub fn deposit(&self, x: i64, y: i64, amount: f32) {
        self.deposits.add(self.dims.wrap_index(x, y), amount);
    }

    /// Pending (uncommitted) deposit at the wrapped cell.
    #[inline]
    pub fn pending(&self, x: i64, y: i64) -> f32 {
        self.deposits.get(self.dims.wrap_index(x, y))
    }

    /// Commit deposits, decay and diffuse every cell into `next`, then swap
    /// so the result becomes `current`.
    pub fn evolve(&mut self, config: &SimulationConfig, dt: f32) {
        let params = EvolveParams::new(config, dt);
        self.evolve_with(&params);
    }

    /// [`evolve`](Self::evolve) with precomputed kernel constants.
    pub fn evolve_with(&mut self, params: &EvolveParams) {
        self.deposits.commit_into(self.current.values_mut());
        evolve_into(self.current.values(), self.next.values_mut(), self.dims, params);
        std::mem::swap(&mut self.current, &mut self.next);
        trace!(blend = params.blend, retain = params.retain, "field evolved");
    }

    /// Read-only view of the current field.
    #[inline]
    pub fn current(&self) -> &TrailField {
        &self.current
    }

    /// Mutable access to the current field, for seeding scripted scenarios.
    /// Must not be used while a tick is in progress.
    #[inline]
    pub fn current_mut(&mut self) -> &mut TrailField {
        &mut self.current
    }
}
