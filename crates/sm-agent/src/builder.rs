//! Fluent builder for a randomly initialized [`AgentStore`].
//!
//! # Usage
//!
//! ```rust
//! use sm_agent::AgentStoreBuilder;
//! use sm_core::GridDims;
//!
//! let store = AgentStoreBuilder::new(10_000, /*seed=*/ 42)
//!     .dims(GridDims::new(256, 256))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 10_000);
//! ```

use std::f32::consts::TAU;

use sm_core::{AgentId, AgentRng, GridDims, ResourceError, Rgba, Vec2};

use crate::{Agent, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Each agent draws its initial state from its own [`AgentRng`] seeded by
/// `(seed, AgentId)`, so agent `i` starts in the same place regardless of how
/// many agents follow it.
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
    dims:  GridDims,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed, dims: GridDims::new(1, 1) }
    }

    /// Grid the agents are scattered over.  Default: a single cell.
    pub fn dims(mut self, dims: GridDims) -> Self {
        self.dims = dims;
        self
    }

    /// Allocate the SoA arrays and draw every agent's initial state.
    ///
    /// - position: uniform over `[0, width) × [0, height)`
    /// - heading:  uniform over `[0, 2π)`
    /// - color:    uniform RGB, opaque
    pub fn build(self) -> Result<AgentStore, ResourceError> {
        let mut store = AgentStore::with_capacity(self.count)?;
        let (w, h) = (self.dims.width as f32, self.dims.height as f32);

        for i in 0..self.count as u32 {
            let mut rng = AgentRng::new(self.seed, AgentId(i));
            let position = self
                .dims
                .wrap_position(Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)));
            let heading = rng.gen_range(0.0..TAU);
            let color = Rgba::opaque(rng.random(), rng.random(), rng.random());
            store.push(Agent { position, heading, color });
        }

        Ok(store)
    }
}
