//! Sensor placement and sampling.

use sm_core::{SimulationConfig, Vec2};
use sm_field::FieldBuffer;

/// Densities summed around the three sensors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SensorReading {
    pub left:   f32,
    pub center: f32,
    pub right:  f32,
}

/// Wrapped cells under the three sensors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SensorSites {
    pub left:   (u32, u32),
    pub center: (u32, u32),
    pub right:  (u32, u32),
}

/// Cells under the left, center and right sensors of an agent at `position`
/// facing `heading`.
pub fn sensor_sites(config: &SimulationConfig, position: Vec2, heading: f32) -> SensorSites {
    let dims = config.dims();
    let site = |angle: f32| -> (u32, u32) {
        dims.cell_of(position + Vec2::from_angle(angle) * config.sensor_offset)
    };
    SensorSites {
        left:   site(heading - config.sensor_angle),
        center: site(heading),
        right:  site(heading + config.sensor_angle),
    }
}

/// Sum the current field over the `(2r+1)²` square around each sensor.
pub fn sense(field: &FieldBuffer, config: &SimulationConfig, position: Vec2, heading: f32) -> SensorReading {
    let sites = sensor_sites(config, position, heading);
    let r = config.sensor_radius as i64;
    SensorReading {
        left:   square_sum(field, sites.left, r),
        center: square_sum(field, sites.center, r),
        right:  square_sum(field, sites.right, r),
    }
}

fn square_sum(field: &FieldBuffer, (cx, cy): (u32, u32), r: i64) -> f32 {
    let (cx, cy) = (cx as i64, cy as i64);
    let mut sum = 0.0;
    for dy in -r..=r {
        for dx in -r..=r {
            sum += field.sample(cx + dx, cy + dy);
        }
    }
    sum
}

