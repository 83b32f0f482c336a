//! The steering decision.

use crate::SensorReading;

/// Which way an agent turns this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Straight,
    /// Toward the left sensor: the heading decreases.
    Left,
    /// Toward the right sensor: the heading increases.
    Right,
}

impl Turn {
    /// Signed heading change for a turn of magnitude `step`.
    #[inline]
    pub fn delta(self, step: f32) -> f32 {
        match self {
            Turn::Straight => 0.0,
            Turn::Left => -step,
            Turn::Right => step,
        }
    }
}

/// Choose a turn from the three sensor sums.
///
/// | Condition                  | Turn                         |
/// |----------------------------|------------------------------|
/// | `C > L` and `C > R`        | `Straight`                   |
/// | `L > R`                    | `Left`                       |
/// | `R > L`                    | `Right`                      |
/// | `L == R`, both above `C`   | `tie_break()` ? Right : Left |
/// | `L == R == C`              | `Straight` (flat field)      |
///
/// `tie_break` is only called in the symmetric case, so callers can make it
/// lazy.
pub fn decide(reading: SensorReading, tie_break: impl FnOnce() -> bool) -> Turn {
    let SensorReading { left, center, right } = reading;

    if center > left && center > right {
        Turn::Straight
    } else if left > right {
        Turn::Left
    } else if right > left {
        Turn::Right
    } else if left > center {
        if tie_break() { Turn::Right } else { Turn::Left }
    } else {
        Turn::Straight
    }
}
