//! What the loop hands to the renderer and observers after each tick.

use sm_agent::AgentStore;
use sm_core::Tick;
use sm_field::TrailField;

/// Post-tick agent list and trail field, borrowed from the simulation.
#[derive(Copy, Clone)]
pub struct RenderSnapshot<'a> {
    /// Ticks completed when the snapshot was taken.
    pub tick:    Tick,
    /// Simulated time after the tick.
    pub elapsed: f64,
    /// Positions, headings and colors of every agent.
    pub agents:  &'a AgentStore,
    /// The current (post-swap) field.
    pub field:   &'a TrailField,
}

impl RenderSnapshot<'_> {
    /// Aggregate field statistics.  O(cells).
    pub fn stats(&self) -> TickStats {
        TickStats {
            tick:          self.tick,
            elapsed:       self.elapsed,
            total_density: self.field.total(),
            max_density:   self.field.max(),
        }
    }
}

/// Per-tick summary passed to [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickStats {
    pub tick:          Tick,
    pub elapsed:       f64,
    pub total_density: f64,
    pub max_density:   f32,
}
