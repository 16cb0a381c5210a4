//! Polling and timeout configuration from TOML.

use std::time::Duration;

use serde::Deserialize;

/// Poll intervals, settle pauses, and wait budgets for blocking moves.
///
/// Every blocking wait in the controller is bounded by one of these
/// timeouts; an elapsed budget surfaces as a distinct timeout error rather
/// than an infinite block.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Sleep between position samples while waiting for convergence, in
    /// milliseconds. Zero degenerates to a tight loop (useful with a
    /// simulated driver).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Pause around each commanded move so transients die out before a
    /// read is trusted, in milliseconds.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Wait budget for a single point-to-point move, in milliseconds.
    #[serde(default = "default_move_timeout_ms")]
    pub move_timeout_ms: u64,

    /// Wait budget for a complete homing pass, in milliseconds.
    #[serde(default = "default_homing_timeout_ms")]
    pub homing_timeout_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    5
}

fn default_settle_ms() -> u64 {
    1000
}

fn default_move_timeout_ms() -> u64 {
    60_000
}

fn default_homing_timeout_ms() -> u64 {
    120_000
}

impl TimingConfig {
    /// Poll interval as a [`Duration`].
    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Settle pause as a [`Duration`].
    #[inline]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Move wait budget as a [`Duration`].
    #[inline]
    pub fn move_timeout(&self) -> Duration {
        Duration::from_millis(self.move_timeout_ms)
    }

    /// Homing wait budget as a [`Duration`].
    #[inline]
    pub fn homing_timeout(&self) -> Duration {
        Duration::from_millis(self.homing_timeout_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            settle_ms: default_settle_ms(),
            move_timeout_ms: default_move_timeout_ms(),
            homing_timeout_ms: default_homing_timeout_ms(),
        }
    }
}
