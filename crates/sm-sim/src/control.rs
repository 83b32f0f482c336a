//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable flag asking a running simulation to stop.
///
/// The loop checks it at the top of every tick, never mid-tick, so a stopped
/// run always ends on a tick boundary.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop before its next tick.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear a previous request so the loop can be driven again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}
