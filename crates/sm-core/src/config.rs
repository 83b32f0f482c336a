//! Simulation and run configuration.
//!
//! [`SimulationConfig`] is the immutable per-run parameter record: grid size,
//! population, movement, sensing, and field-evolution rates.  It is set once
//! before the loop starts and never mutated while the simulation runs.
//!
//! [`RunConfig`] holds the driver's parameters (seed, tick count, step
//! length, output cadence).  Both can be loaded from a TOML file:
//!
//! ```toml
//! [simulation]
//! width         = 256
//! height        = 256
//! agent_count   = 5000
//! move_speed    = 30.0
//! turn_speed    = 6.0
//! sensor_angle  = 0.5
//! sensor_offset = 9.0
//! sensor_radius = 1
//! decay_rate    = 0.5
//! diffuse_rate  = 5.0
//!
//! [run]
//! seed        = 7
//! total_ticks = 2000
//! dt          = 0.02
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, GridDims, Tick};

// ── Neighborhood ──────────────────────────────────────────────────────────────

/// Which neighbors a cell averages over during diffusion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// The four edge-adjacent cells.
    VonNeumann,
    /// All eight surrounding cells.
    #[default]
    Moore,
}

impl Neighborhood {
    /// Offsets `(dx, dy)` of the neighbors, excluding the cell itself.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Neighborhood::VonNeumann => &[(0, -1), (-1, 0), (1, 0), (0, 1)],
            Neighborhood::Moore => &[
                (-1, -1), (0, -1), (1, -1),
                (-1,  0),          (1,  0),
                (-1,  1), (0,  1), (1,  1),
            ],
        }
    }
}

// ── Deposit encoding ──────────────────────────────────────────────────────────

/// Fractional bits of the fixed-point deposit accumulator.
pub const DEPOSIT_FRACTION_BITS: u32 = 20;

const DEPOSIT_SCALE: f64 = (1u64 << DEPOSIT_FRACTION_BITS) as f64;

/// Fixed-point encoding of one deposit.  `as` saturates: NaN and negatives
/// become 0, values past the range become `u64::MAX`.
#[inline]
pub fn deposit_to_fixed(amount: f32) -> u64 {
    (amount as f64 * DEPOSIT_SCALE).round() as u64
}

/// Inverse of [`deposit_to_fixed`].
#[inline]
pub fn deposit_from_fixed(raw: u64) -> f32 {
    (raw as f64 / DEPOSIT_SCALE) as f32
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

fn default_deposit_amount() -> f32 {
    1.0
}

/// Immutable per-run simulation parameters.
///
/// Angles are in radians, distances in cells, rates per unit of simulated
/// time (they are multiplied by `dt` each tick).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Fixed population size.
    pub agent_count: usize,
    /// Distance travelled per unit time.
    pub move_speed: f32,
    /// Maximum heading change per unit time (radians).
    pub turn_speed: f32,
    /// Angle between the center sensor and each side sensor (radians).
    pub sensor_angle: f32,
    /// Distance from the agent to each sensor.
    pub sensor_offset: f32,
    /// Half-width of the square neighborhood each sensor sums over.
    /// `0` samples the single cell under the sensor.
    pub sensor_radius: u32,
    /// Fraction of density removed per unit time.
    pub decay_rate: f32,
    /// Weight (per unit time) with which a cell blends toward its
    /// neighborhood average.  `0` disables diffusion.
    pub diffuse_rate: f32,
    /// Density each agent adds to its cell every tick.
    #[serde(default = "default_deposit_amount")]
    pub deposit_amount: f32,
    /// Diffusion kernel shape.
    #[serde(default)]
    pub neighborhood: Neighborhood,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width:          256,
            height:         256,
            agent_count:    100,
            move_speed:     30.0,
            turn_speed:     6.0,
            sensor_angle:   0.5,
            sensor_offset:  9.0,
            sensor_radius:  1,
            decay_rate:     0.5,
            diffuse_rate:   5.0,
            deposit_amount: 1.0,
            neighborhood:   Neighborhood::Moore,
        }
    }
}

impl SimulationConfig {
    /// Grid dimensions as a [`GridDims`].
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.width, self.height)
    }

    /// Reject configurations that cannot run.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroDimension`] if `width` or `height` is 0.
    /// - [`ConfigError::ZeroAgents`] if `agent_count` is 0.
    /// - [`ConfigError::NonFinite`] / [`ConfigError::Negative`] for any bad
    ///   float parameter.
    /// - [`ConfigError::TooManyAgents`] if an `AgentId` cannot address every
    ///   agent.
    /// - [`ConfigError::SensorRadiusTooLarge`] if `2 * sensor_radius + 1`
    ///   exceeds the smaller grid side.
    /// - [`ConfigError::DepositOutOfRange`] if a nonzero `deposit_amount`
    ///   encodes to 0, or `agent_count` deposits on one cell would overflow
    ///   the accumulator.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        if self.agent_count == 0 {
            return Err(ConfigError::ZeroAgents);
        }

        let floats = [
            ("move_speed",     self.move_speed),
            ("turn_speed",     self.turn_speed),
            ("sensor_angle",   self.sensor_angle),
            ("sensor_offset",  self.sensor_offset),
            ("decay_rate",     self.decay_rate),
            ("diffuse_rate",   self.diffuse_rate),
            ("deposit_amount", self.deposit_amount),
        ];
        for (field, value) in floats {
            check_non_negative(field, value)?;
        }

        if u32::try_from(self.agent_count).is_err() {
            return Err(ConfigError::TooManyAgents { count: self.agent_count });
        }

        let span = 2 * self.sensor_radius as u64 + 1;
        if span > self.width.min(self.height) as u64 {
            return Err(ConfigError::SensorRadiusTooLarge {
                radius: self.sensor_radius,
                width:  self.width,
                height: self.height,
            });
        }

        self.check_deposit_range()
    }

    /// Every deposit must survive encoding, and a full tick of deposits
    /// landing on one cell must fit the accumulator.
    fn check_deposit_range(&self) -> ConfigResult<()> {
        let amount = self.deposit_amount;
        if amount == 0.0 {
            return Ok(());
        }
        let raw = (amount as f64 * DEPOSIT_SCALE).round();
        let fits = raw >= 1.0
            && raw < u64::MAX as f64
            && (raw as u128) * (self.agent_count as u128) <= u64::MAX as u128;
        if fits {
            Ok(())
        } else {
            Err(ConfigError::DepositOutOfRange { amount, agents: self.agent_count })
        }
    }

    /// Parse a flat TOML record and validate it.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: SimulationConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a flat TOML record from `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn check_non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Parameters of one driven run.  Not part of the simulation semantics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Simulated time per tick.
    pub dt: f32,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            total_ticks:           1_000,
            dt:                    0.02,
            num_threads:           None,
            output_interval_ticks: 50,
        }
    }
}

impl RunConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check_non_negative("dt", self.dt)
    }
}

// ── ScenarioFile ──────────────────────────────────────────────────────────────

/// A TOML file with a `[simulation]` table and an optional `[run]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl ScenarioFile {
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let file: ScenarioFile = toml::from_str(s)?;
        file.simulation.validate()?;
        file.run.validate()?;
        Ok(file)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
