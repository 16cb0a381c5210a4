//! Named foil position table.

use std::collections::BTreeMap;

use crate::config::SystemConfig;

/// Immutable lookup from foil name to step position.
///
/// Positions come from the `[foils]` section of the configuration and are
/// validated against the travel range at load time.
#[derive(Debug, Clone, Default)]
pub struct FoilTable {
    positions: BTreeMap<String, i64>,
}

impl FoilTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a validated system configuration.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            positions: config.foils.clone(),
        }
    }

    /// Register a foil position.
    pub fn insert(&mut self, name: &str, position: i64) {
        self.positions.insert(name.to_owned(), position);
    }

    /// Step position of a foil, if it is known.
    pub fn position(&self, name: &str) -> Option<i64> {
        self.positions.get(name).copied()
    }

    /// Whether a foil name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Iterator over foil names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(|s| s.as_str())
    }

    /// Number of known foils.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
