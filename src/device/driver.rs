//! The stepper driver trait.

use crate::error::DriverError;

use super::events::DriverEvent;

/// Identity of an attached device, for diagnostic logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverInfo {
    /// Vendor device name.
    pub device_name: String,
    /// Device serial number.
    pub serial: i32,
    /// Firmware/board version.
    pub version: i32,
}

/// Register-level interface to a single-motor stepper controller.
///
/// This is the boundary the motion controller is written against. Every
/// fallible method models a device command that the underlying driver may
/// reject; callers above the [`MotorStage`] boundary never see these errors
/// raised, only degraded results.
///
/// Positions are in integer steps. Position reads are synchronous and
/// authoritative; the event queue is advisory telemetry only.
///
/// [`MotorStage`]: crate::stage::MotorStage
pub trait StepperDriver {
    /// Open the device handle.
    fn open(&mut self) -> Result<(), DriverError>;

    /// Close the device handle.
    fn close(&mut self) -> Result<(), DriverError>;

    /// Whether the physical device is attached. Must not fail; transport
    /// faults read as "not attached".
    fn is_attached(&self) -> bool;

    /// Identity of the attached device.
    fn info(&self) -> DriverInfo;

    /// Read the current-position register.
    fn current_position(&mut self) -> Result<i64, DriverError>;

    /// Rewrite the current-position register without moving the stage.
    ///
    /// Used to stamp the register to zero at a verified home location.
    fn stamp_position(&mut self, steps: i64) -> Result<(), DriverError>;

    /// Write the target-position register.
    fn set_target_position(&mut self, steps: i64) -> Result<(), DriverError>;

    /// Energize or release the motor coil driver.
    fn set_engaged(&mut self, engaged: bool) -> Result<(), DriverError>;

    /// Sample the binary home-switch input.
    fn home_switch(&mut self) -> Result<bool, DriverError>;

    /// Device-reported `(min, max)` acceleration range.
    fn acceleration_limits(&self) -> Result<(f64, f64), DriverError>;

    /// Write the acceleration register.
    fn set_acceleration(&mut self, value: f64) -> Result<(), DriverError>;

    /// Device-reported `(min, max)` velocity-limit range.
    fn velocity_limits(&self) -> Result<(f64, f64), DriverError>;

    /// Write the velocity-limit register.
    fn set_velocity_limit(&mut self, value: f64) -> Result<(), DriverError>;

    /// Device-reported `(min, max)` current-limit range.
    fn current_limits(&self) -> Result<(f64, f64), DriverError>;

    /// Write the current-limit register.
    fn set_current_limit(&mut self, value: f64) -> Result<(), DriverError>;

    /// Drain queued asynchronous notifications.
    ///
    /// The controller consumes these purely for logging; completion checks
    /// always re-read position synchronously.
    fn take_events(&mut self) -> Vec<DriverEvent>;
}
