//! Per-cell field evolution: diffusion followed by decay.
//!
//! For every cell, with `s` the committed density (previous field plus this
//! tick's deposits):
//!
//! ```text
//! avg   = mean of s over the cell's neighbors (4 or 8, wrapped)
//! blend = s + (avg - s) * w            w      = clamp(diffuse_rate * dt, 0, 1)
//! next  = max(0, blend * retain)       retain = max(0, 1 - decay_rate * dt)
//! ```
//!
//! The blend is a convex combination of non-negative values, so densities
//! stay non-negative.  Every cell gives away `w·s` spread evenly over its
//! neighbors and receives the same share back from each of them, so with
//! `decay_rate = 0` the total over the torus is conserved.

use sm_core::{GridDims, Neighborhood, SimulationConfig};

/// Per-tick constants of the evolution kernel, derived once from the config
/// and the step length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvolveParams {
    /// Diffusion weight `w` in `[0, 1]`.
    pub blend:        f32,
    /// Multiplicative decay factor in `[0, 1]`.
    pub retain:       f32,
    pub neighborhood: Neighborhood,
}

impl EvolveParams {
    pub fn new(config: &SimulationConfig, dt: f32) -> Self {
        Self {
            blend:        (config.diffuse_rate * dt).clamp(0.0, 1.0),
            retain:       (1.0 - config.decay_rate * dt).max(0.0),
            neighborhood: config.neighborhood,
        }
    }
}

/// Evolved density of cell `(x, y)` given the committed field `src`.
#[inline]
pub fn evolve_cell(src: &[f32], dims: GridDims, x: i64, y: i64, params: &EvolveParams) -> f32 {
    let s = src[dims.wrap_index(x, y)];

    let blended = if params.blend > 0.0 {
        let offsets = params.neighborhood.offsets();
        let sum: f32 = offsets
            .iter()
            .map(|&(dx, dy)| src[dims.wrap_index(x + dx, y + dy)])
            .sum();
        let avg = sum / offsets.len() as f32;
        s + (avg - s) * params.blend
    } else {
        s
    };

    (blended * params.retain).max(0.0)
}

/// Write the evolved field into `dst`.  Reads only `src`, writes only `dst`,
/// so cells may be computed in any order or concurrently.
pub fn evolve_into(src: &[f32], dst: &mut [f32], dims: GridDims, params: &EvolveParams) {
    debug_assert_eq!(src.len(), dims.cells());
    debug_assert_eq!(dst.len(), dims.cells());
    let width = dims.width as usize;

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in dst.chunks_mut(width).enumerate() {
            evolve_row(src, row, dims, y as i64, params);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        dst.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evolve_row(src, row, dims, y as i64, params));
    }
}

#[inline]
fn evolve_row(src: &[f32], row: &mut [f32], dims: GridDims, y: i64, params: &EvolveParams) {
    for (x, out) in row.iter_mut().enumerate() {
        *out = evolve_cell(src, dims, x as i64, y, params);
    }
}
