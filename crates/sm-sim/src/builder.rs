//! Fluent builder for a `Ready` [`Simulation`].

use sm_agent::AgentStore;
use sm_core::SimulationConfig;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimulationConfig`]
/// - the run seed
///
/// # Optional inputs
///
/// | Method        | Default                                              |
/// |---------------|------------------------------------------------------|
/// | `.agents(s)`  | `AgentStore::initialize(&config, seed)` (random)     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, 42)
///     .agents(AgentStore::from_agents(&scripted)?)
///     .build()?;
/// sim.step(1.0)?;
/// ```
pub struct SimBuilder {
    config: SimulationConfig,
    seed:   u64,
    agents: Option<AgentStore>,
}

impl SimBuilder {
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        Self { config, seed, agents: None }
    }

    /// Supply the population instead of drawing it at random.
    ///
    /// Must hold exactly `config.agent_count` agents.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate inputs, allocate the field, and return a `Ready` simulation.
    pub fn build(self) -> SimResult<Simulation> {
        if let Some(agents) = &self.agents {
            if agents.count != self.config.agent_count {
                return Err(SimError::AgentCountMismatch {
                    expected: self.config.agent_count,
                    got:      agents.count,
                });
            }
        }

        let mut sim = Simulation::new();
        sim.configure(self.config)?;
        match self.agents {
            Some(agents) => sim.install(self.seed, agents)?,
            None => sim.initialize(self.seed)?,
        };
        Ok(sim)
    }
}
