//! Error taxonomy shared by every `sm-*` crate.
//!
//! Two families exist and neither can occur mid-tick:
//!
//! - [`ConfigError`]: rejected parameters, raised by `configure`/`initialize`.
//! - [`ResourceError`]: storage for the field or the population could not be
//!   allocated.  Fatal; the partially built value is dropped.

use std::collections::TryReserveError;

use thiserror::Error;

/// A simulation parameter was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {axis} must be positive")]
    ZeroDimension { axis: &'static str },

    #[error("agent count must be positive")]
    ZeroAgents,

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("agent count {count} exceeds the AgentId range")]
    TooManyAgents { count: usize },

    #[error("sensor_radius {radius} spans more than the {width}×{height} grid")]
    SensorRadiusTooLarge { radius: u32, width: u32, height: u32 },

    #[error("deposit_amount {amount} cannot be accumulated exactly for {agents} agents")]
    DepositOutOfRange { amount: f32, agents: usize },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage for simulation state could not be allocated.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to allocate {elements} elements for {what}")]
    Allocation {
        what:     &'static str,
        elements: usize,
        #[source]
        source:   TryReserveError,
    },

    #[error("{count} agents exceed the AgentId range")]
    TooManyAgents { count: usize },
}

/// Shorthand result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Allocate a `Vec` of `len` copies of `value`, reporting failure instead of
/// aborting the process.
pub fn try_alloc<T: Clone>(what: &'static str, len: usize, value: T) -> Result<Vec<T>, ResourceError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source| ResourceError::Allocation { what, elements: len, source })?;
    v.resize(len, value);
    Ok(v)
}
