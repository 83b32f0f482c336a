//! A single trail-density grid.

use sm_core::{GridDims, ResourceError, try_alloc};

/// One `width × height` grid of non-negative densities, row-major.
///
/// Two of these live inside a [`FieldBuffer`][crate::FieldBuffer]; outside
/// the crate they are handed out read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailField {
    dims:   GridDims,
    values: Vec<f32>,
}

impl TrailField {
    /// An all-zero field.
    pub fn zeroed(dims: GridDims) -> Result<Self, ResourceError> {
        let values = try_alloc("trail field", dims.cells(), 0.0_f32)?;
        Ok(Self { dims, values })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Density at cell `(x mod width, y mod height)`.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> f32 {
        self.values[self.dims.wrap_index(x, y)]
    }

    /// Overwrite the density at the wrapped cell.  Negative values are
    /// stored as 0.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, value: f32) {
        let i = self.dims.wrap_index(x, y);
        self.values[i] = value.max(0.0);
    }

    /// Row-major densities.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Sum over all cells.
    pub fn total(&self) -> f64 {
        self.values.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value (0 for an all-zero field).
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(0.0, f32::max)
    }
}
