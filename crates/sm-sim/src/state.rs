//! Lifecycle states of a [`Simulation`][crate::Simulation].

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// No storage allocated.  `configure` and `initialize` are allowed.
    Uninitialized,
    /// Storage allocated, no tick run yet.
    Ready,
    /// At least one tick has started.
    Running,
    /// Storage released.  Terminal.
    Stopped,
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoopState::Uninitialized => "uninitialized",
            LoopState::Ready => "ready",
            LoopState::Running => "running",
            LoopState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}
