//! Simulation observer trait for progress reporting and data collection.

use sm_core::Tick;

use crate::{RenderSnapshot, TickStats};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: total density {:.2}", stats.tick, stats.total_density);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with aggregate field statistics.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the agents and the current field so that
    /// renderers and output writers can record a frame without the loop
    /// needing to know about any specific format.
    fn on_snapshot(&mut self, _snapshot: &RenderSnapshot<'_>) {}

    /// Called once after the last tick of a run, including runs cut short by
    /// a stop request.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan out every callback to both observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.0.on_tick_end(stats);
        self.1.on_tick_end(stats);
    }

    fn on_snapshot(&mut self, snapshot: &RenderSnapshot<'_>) {
        self.0.on_snapshot(snapshot);
        self.1.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

impl<T: SimObserver + ?Sized> SimObserver for &mut T {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        (**self).on_tick_end(stats);
    }

    fn on_snapshot(&mut self, snapshot: &RenderSnapshot<'_>) {
        (**self).on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}
