use sm_core::{ConfigError, ResourceError};
use thiserror::Error;

use crate::LoopState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation storage error: {0}")]
    Resource(#[from] ResourceError),

    #[error("simulation has not been configured")]
    NotConfigured,

    #[error("cannot {op} while {state}")]
    InvalidState {
        op:    &'static str,
        state: LoopState,
    },

    #[error("agent store holds {got} agents but the configuration expects {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("time step must be finite and non-negative (got {0})")]
    InvalidTimeStep(f32),
}

pub type SimResult<T> = Result<T, SimError>;
