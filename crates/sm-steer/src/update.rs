//! One agent, one tick.

use std::f32::consts::TAU;

use sm_agent::Agent;
use sm_core::{AgentId, AgentRng, Vec2, wrap_coord};

use crate::{Turn, UpdateContext, decide, sense};

/// A deposit write produced by an agent update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Deposit {
    pub x:      u32,
    pub y:      u32,
    pub amount: f32,
}

/// Result of [`update_agent`]: the agent's new state, the turn it took, and
/// the deposit it makes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentStep {
    pub agent:   Agent,
    pub turn:    Turn,
    pub deposit: Deposit,
}

/// Compute an agent's next heading, position, and deposit.
///
/// Pure: reads the field through `ctx`, writes nothing.  The tie-break bit is
/// drawn from an RNG seeded by `(ctx.seed, agent, ctx.tick)`, so the result
/// is independent of which thread runs which agent.
pub fn update_agent(ctx: &UpdateContext<'_>, id: AgentId, agent: Agent) -> AgentStep {
    let config = ctx.config;
    let dims = config.dims();

    let reading = sense(ctx.field, config, agent.position, agent.heading);
    let turn = decide(reading, || AgentRng::for_tick(ctx.seed, id, ctx.tick).random::<bool>());

    let heading = wrap_coord(agent.heading + turn.delta(ctx.turn_step), TAU);
    let position = dims.wrap_position(agent.position + Vec2::from_angle(heading) * ctx.move_step);
    let (x, y) = dims.cell_of(position);

    AgentStep {
        agent:   Agent { position, heading, color: agent.color },
        turn,
        deposit: Deposit { x, y, amount: config.deposit_amount },
    }
}
