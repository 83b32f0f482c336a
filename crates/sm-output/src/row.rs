//! Plain data row types written by output backends.

/// One agent's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    /// Radians in `[0, 2π)`.
    pub heading:  f32,
    pub r:        f32,
    pub g:        f32,
    pub b:        f32,
    pub a:        f32,
}

/// Field statistics for one completed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub elapsed:       f64,
    pub total_density: f64,
    pub max_density:   f32,
}
