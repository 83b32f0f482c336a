//! Deterministic per-agent RNG.
//!
//! # Determinism strategy
//!
//! Every random draw an agent makes comes from a `SmallRng` seeded by mixing
//! the run's global seed with the agent's identity:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//!
//! Per-tick draws (the steering tie-break) additionally mix in the tick, so
//! the stream is a pure function of `(seed, agent, tick)`.  No RNG state is
//! shared between agents and nothing depends on which worker thread runs
//! which agent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Tick};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Second odd constant so the tick and agent terms do not cancel.
const TICK_MIXING_CONSTANT: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// Per-agent deterministic RNG.
///
/// Used once per agent at population initialization, and rebuilt per tick
/// via [`AgentRng::for_tick`] for steering decisions.  The type is `!Sync`
/// so it cannot be shared across threads by accident.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the global seed, an agent ID, and the current tick.
    pub fn for_tick(global_seed: u64, agent: AgentId, tick: Tick) -> Self {
        let seed = global_seed
            ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT)
            ^ tick.0.wrapping_add(1).wrapping_mul(TICK_MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
