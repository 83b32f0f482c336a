//! `sm-steer` — the per-agent update rule.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`context`]   | `UpdateContext<'a>` — read-only tick snapshot for agents   |
//! | [`sensor`]    | sensor placement and neighborhood sums                     |
//! | [`steering`]  | `Turn` and the left/center/right decision                  |
//! | [`update`]    | `update_agent` — one agent, one tick, no side effects      |
//! | [`stage`]     | `run_agent_stage` — every agent, deposits committed        |
//!
//! # One tick for one agent
//!
//! ```text
//! sense    three sensors at heading-θ, heading, heading+θ, `sensor_offset` ahead
//! steer    pick Straight / Left / Right from the three sums
//! turn     heading ± turn_speed·dt   (Left decreases the heading)
//! move     position + move_speed·dt along the new heading, wrapped
//! deposit  deposit_amount into the cell under the new position
//! ```
//!
//! Agents only read the field (through `&FieldBuffer`) and add deposits
//! through its atomic deposit layer, so every agent can be updated
//! concurrently without seeing any other agent's progress.

pub mod context;
pub mod sensor;
pub mod stage;
pub mod steering;
pub mod update;

#[cfg(test)]
mod tests;

pub use context::UpdateContext;
pub use sensor::{SensorReading, SensorSites, sense, sensor_sites};
pub use stage::run_agent_stage;
pub use steering::{Turn, decide};
pub use update::{AgentStep, Deposit, update_agent};
