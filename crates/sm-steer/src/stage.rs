//! The agent update stage over the whole population.

use sm_agent::AgentStore;

use crate::{UpdateContext, update_agent};

/// Update every agent and add its deposit to the field's deposit layer.
///
/// Agents run through [`AgentStore::for_each_parallel`]; the only shared
/// write target is the deposit layer, whose adds commute.  Returns once every
/// agent is done, which is the barrier before the field may evolve.
pub fn run_agent_stage(agents: &mut AgentStore, ctx: &UpdateContext<'_>) {
    agents.for_each_parallel(|id, agent| {
        let step = update_agent(ctx, id, agent);
        let d = step.deposit;
        ctx.field.deposit(d.x as i64, d.y as i64, d.amount);
        step.agent
    });
}
