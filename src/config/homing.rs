//! Homing configuration from TOML.
//!
//! The sweep and centering constants are hardware-tuned per deployment:
//! the sweep target must exceed the physical travel range, the guard stops
//! the scan loop slightly short of it, and the overrun/bias offsets absorb
//! deceleration distance and the sensor zone's half-width.

use std::time::Duration;

use serde::Deserialize;

/// Parameters of the homing sweep and centering sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct HomingConfig {
    /// Commanded travel for the sweep, in steps. Must exceed the physical
    /// travel range so the stage crosses the whole home zone.
    #[serde(default = "default_sweep_target")]
    pub sweep_target_steps: i64,

    /// Loop-termination guard, in steps. The scan loop gives up once the
    /// polled position reaches this value; it is not a real target.
    #[serde(default = "default_sweep_guard")]
    pub sweep_guard_steps: i64,

    /// Extra travel commanded past the sensed end edge so the stage can
    /// clear the zone and decelerate, in steps.
    #[serde(default = "default_overrun")]
    pub overrun_steps: i64,

    /// Correction subtracted from the zone midpoint when centering, in steps.
    #[serde(default = "default_center_bias")]
    pub center_bias_steps: i64,

    /// Pause after stamping or centering, in milliseconds.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

fn default_sweep_target() -> i64 {
    17_000
}

fn default_sweep_guard() -> i64 {
    16_000
}

fn default_overrun() -> i64 {
    100
}

fn default_center_bias() -> i64 {
    50
}

fn default_settle_ms() -> u64 {
    1000
}

impl HomingConfig {
    /// Settle pause as a [`Duration`].
    #[inline]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Midpoint of a sensed home zone, with the centering bias applied.
    #[inline]
    pub fn center_of(&self, home_begin: i64, home_end: i64) -> i64 {
        (home_begin + home_end) / 2 - self.center_bias_steps
    }
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            sweep_target_steps: default_sweep_target(),
            sweep_guard_steps: default_sweep_guard(),
            overrun_steps: default_overrun(),
            center_bias_steps: default_center_bias(),
            settle_ms: default_settle_ms(),
        }
    }
}
