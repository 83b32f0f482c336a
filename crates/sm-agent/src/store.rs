//! Core agent storage.
//!
//! # Layout
//!
//! Positions, headings and colors live in three parallel `Vec`s indexed by
//! `AgentId`.  The update stage only touches positions and headings, so the
//! color array is never borrowed mutably after construction and is exposed
//! read-only.
//!
//! ```ignore
//! let p = store.positions()[agent.index()];  // O(1), cache-friendly
//! ```

use sm_core::{AgentId, ResourceError, Rgba, SimulationConfig, Vec2};

use crate::AgentStoreBuilder;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A by-value view of one agent, as passed to and returned from update
/// closures.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Agent {
    /// Position in `[0, width) × [0, height)`.
    pub position: Vec2,
    /// Heading in radians.
    pub heading:  f32,
    /// Fixed at creation.  Changes made to this field by an update closure
    /// are discarded.
    pub color:    Rgba,
}

impl Agent {
    pub fn new(position: Vec2, heading: f32, color: Rgba) -> Self {
        Self { position, heading, color }
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the whole population.
///
/// Every `Vec` has exactly `count` elements; the `AgentId` value is the index
/// into all of them.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    positions: Vec<Vec2>,
    headings:  Vec<f32>,
    colors:    Vec<Rgba>,
}

impl AgentStore {
    /// Allocate `config.agent_count` agents with uniformly random positions,
    /// headings and colors.  Deterministic in `seed`.
    pub fn initialize(config: &SimulationConfig, seed: u64) -> Result<Self, ResourceError> {
        AgentStoreBuilder::new(config.agent_count, seed)
            .dims(config.dims())
            .build()
    }

    /// Build a store from explicit agents, in `AgentId` order.
    pub fn from_agents(agents: &[Agent]) -> Result<Self, ResourceError> {
        let mut store = Self::with_capacity(agents.len())?;
        for agent in agents {
            store.push(*agent);
        }
        Ok(store)
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        // `with_capacity` bounds `count` to the u32 range.
        (0..self.count as u32).map(AgentId)
    }

    /// By-value view of one agent.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn get(&self, agent: AgentId) -> Agent {
        let i = agent.index();
        Agent {
            position: self.positions[i],
            heading:  self.headings[i],
            color:    self.colors[i],
        }
    }

    /// Iterator over `(AgentId, Agent)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Agent)> + '_ {
        self.agent_ids().map(|id| (id, self.get(id)))
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn headings(&self) -> &[f32] {
        &self.headings
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    // ── Bulk update ───────────────────────────────────────────────────────

    /// Apply `f` to every agent in ascending `AgentId` order and store the
    /// returned position and heading.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(AgentId, Agent) -> Agent,
    {
        let colors = &self.colors;
        for (i, (pos, heading)) in self
            .positions
            .iter_mut()
            .zip(self.headings.iter_mut())
            .enumerate()
        {
            let next = f(
                AgentId(i as u32),
                Agent { position: *pos, heading: *heading, color: colors[i] },
            );
            *pos = next.position;
            *heading = next.heading;
        }
    }

    /// Like [`for_each`](Self::for_each) but may run agents concurrently.
    ///
    /// Each call of `f` sees only its own agent; agents never observe each
    /// other's in-progress state.  With the `parallel` feature the work runs
    /// on Rayon's pool, otherwise it is the sequential loop.  Results are the
    /// same either way.
    pub fn for_each_parallel<F>(&mut self, f: F)
    where
        F: Fn(AgentId, Agent) -> Agent + Send + Sync,
    {
        #[cfg(not(feature = "parallel"))]
        {
            self.for_each(f);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let colors = &self.colors;
            self.positions
                .par_iter_mut()
                .zip(self.headings.par_iter_mut())
                .enumerate()
                .for_each(|(i, (pos, heading))| {
                    let next = f(
                        AgentId(i as u32),
                        Agent { position: *pos, heading: *heading, color: colors[i] },
                    );
                    *pos = next.position;
                    *heading = next.heading;
                });
        }
    }

    // ── Crate-private construction used by AgentStoreBuilder ──────────────

    pub(crate) fn with_capacity(count: usize) -> Result<Self, ResourceError> {
        if u32::try_from(count).is_err() {
            return Err(ResourceError::TooManyAgents { count });
        }
        let mut positions = Vec::new();
        let mut headings = Vec::new();
        let mut colors = Vec::new();
        reserve(&mut positions, count, "agent positions")?;
        reserve(&mut headings, count, "agent headings")?;
        reserve(&mut colors, count, "agent colors")?;
        Ok(Self { count: 0, positions, headings, colors })
    }

    pub(crate) fn push(&mut self, agent: Agent) {
        self.positions.push(agent.position);
        self.headings.push(agent.heading);
        self.colors.push(agent.color);
        self.count += 1;
    }
}

fn reserve<T>(v: &mut Vec<T>, n: usize, what: &'static str) -> Result<(), ResourceError> {
    v.try_reserve_exact(n)
        .map_err(|source| ResourceError::Allocation { what, elements: n, source })
}
