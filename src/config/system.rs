//! System configuration - root configuration structure.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::axis::AxisConfig;
use super::homing::HomingConfig;
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Axis device settings.
    #[serde(default)]
    pub axis: AxisConfig,

    /// Homing sweep parameters.
    #[serde(default)]
    pub homing: HomingConfig,

    /// Polling and timeout parameters.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Named foil positions in steps.
    #[serde(default)]
    pub foils: BTreeMap<String, i64>,
}

impl SystemConfig {
    /// Get a foil position by name.
    pub fn foil(&self, name: &str) -> Option<i64> {
        self.foils.get(name).copied()
    }

    /// List all foil names.
    pub fn foil_names(&self) -> impl Iterator<Item = &str> {
        self.foils.keys().map(|s| s.as_str())
    }
}
