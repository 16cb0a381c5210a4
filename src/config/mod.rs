//! Configuration module for foil-stage.
//!
//! Provides types for loading and validating the axis, homing, timing, and
//! foil-table configuration from TOML files or pre-parsed strings.

mod axis;
mod homing;
mod loader;
mod system;
mod timing;
mod validation;

pub use axis::AxisConfig;
pub use homing::HomingConfig;
pub use loader::{load_config, parse_config};
pub use system::SystemConfig;
pub use timing::TimingConfig;
pub use validation::validate_config;
