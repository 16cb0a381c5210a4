//! Axis configuration from TOML.

use serde::Deserialize;

/// Device-level settings applied to the axis at initialization.
///
/// Each value must lie inside the range the driver reports for the
/// corresponding register; out-of-range values are rejected at apply time.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable axis name.
    pub name: String,

    /// Acceleration in steps per second squared.
    #[serde(default = "default_acceleration", rename = "acceleration_steps_per_sec2")]
    pub acceleration: f64,

    /// Velocity limit in steps per second.
    #[serde(default = "default_velocity_limit", rename = "velocity_limit_steps_per_sec")]
    pub velocity_limit: f64,

    /// Coil current limit in amps.
    #[serde(default = "default_current_limit", rename = "current_limit_amps")]
    pub current_limit: f64,
}

fn default_acceleration() -> f64 {
    4000.0
}

fn default_velocity_limit() -> f64 {
    900.0
}

fn default_current_limit() -> f64 {
    0.7
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            name: String::from("axis"),
            acceleration: default_acceleration(),
            velocity_limit: default_velocity_limit(),
            current_limit: default_current_limit(),
        }
    }
}
