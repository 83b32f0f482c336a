//! `sm-core` — foundational types for the slime-mold trail simulation.
//!
//! This crate is a dependency of every other `sm-*` crate.  It has no `sm-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! and `serde` + `toml` for the configuration loader).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `GridDims` (toroidal indexing), `Rgba`        |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent, per-tick)                      |
//! | [`config`]      | `SimulationConfig`, `RunConfig`, `ScenarioFile`       |
//! | [`error`]       | `ConfigError`, `ResourceError`                        |
//!
//! Every plain value type derives `Serialize`/`Deserialize`.

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEPOSIT_FRACTION_BITS, Neighborhood, RunConfig, ScenarioFile, SimulationConfig,
    deposit_from_fixed, deposit_to_fixed,
};
pub use error::{ConfigError, ConfigResult, ResourceError, try_alloc};
pub use geo::{GridDims, Rgba, Vec2, wrap_coord};
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::{SimClock, Tick};
