//! `sm-agent` — Structure-of-Arrays storage for the agent population.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`store`]     | `Agent` (value view), `AgentStore` (SoA arrays)          |
//! | [`builder`]   | `AgentStoreBuilder` (seeded random population)           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | `AgentStore::for_each_parallel` runs on Rayon.              |
//!
//! The population size is fixed for the whole run: agents are created once
//! by the builder and only their position and heading change afterwards.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{Agent, AgentStore};
