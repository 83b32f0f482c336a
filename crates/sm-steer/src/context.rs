//! Read-only state shared by every agent update in one tick.

use sm_core::{SimulationConfig, Tick};
use sm_field::FieldBuffer;

/// A read-only snapshot of the simulation passed to every agent update.
///
/// Built once per tick by the loop and shared immutably across all agents.
/// The field borrow lasts for the whole agent stage, which is what keeps the
/// evolve pass (it needs `&mut FieldBuffer`) from starting early.
pub struct UpdateContext<'a> {
    /// The trail field.  Sampled from `current`; deposits go to the
    /// deposit layer.
    pub field: &'a FieldBuffer,

    pub config: &'a SimulationConfig,

    /// Tick being computed.  Feeds the steering tie-break.
    pub tick: Tick,

    /// Run seed.  Feeds the steering tie-break.
    pub seed: u64,

    /// `turn_speed * dt`.
    pub turn_step: f32,

    /// `move_speed * dt`.
    pub move_step: f32,
}

impl<'a> UpdateContext<'a> {
    /// Build the context for one tick of length `dt`.
    #[inline]
    pub fn new(
        field:  &'a FieldBuffer,
        config: &'a SimulationConfig,
        tick:   Tick,
        seed:   u64,
        dt:     f32,
    ) -> Self {
        Self {
            field,
            config,
            tick,
            seed,
            turn_step: config.turn_speed * dt,
            move_step: config.move_speed * dt,
        }
    }
}
