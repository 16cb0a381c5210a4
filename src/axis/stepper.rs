//! Stepper axis state and lifecycle.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::config::{AxisConfig, HomingConfig, SystemConfig, TimingConfig};
use crate::device::{log_event, StepperDriver};
use crate::error::StageError;

/// Controller for one physical stepper axis.
///
/// Exactly one `StepperAxis` should exist per physical device. Motion
/// primitives take `&mut self`, so the borrow checker enforces the
/// one-in-flight-command rule: a second command cannot start while a
/// blocking move is in progress.
///
/// Construction never panics on absent hardware: a device that fails to
/// open leaves the axis permanently un-opened, and every subsequent
/// operation short-circuits to an unattempted/failed result.
pub struct StepperAxis<D: StepperDriver> {
    pub(crate) driver: D,
    pub(crate) axis: AxisConfig,
    pub(crate) homing: HomingConfig,
    pub(crate) timing: TimingConfig,
    pub(crate) initialized: bool,
    pub(crate) engaged: bool,
    pub(crate) target_position: i64,
    pub(crate) last_error: Option<StageError>,
}

impl<D: StepperDriver> StepperAxis<D> {
    /// Number of independent coordinates this axis accepts.
    pub const DIMENSIONS: usize = 1;

    /// Create an axis without touching the hardware.
    ///
    /// Call [`initialize`] before issuing commands, or use [`connect`].
    ///
    /// [`initialize`]: StepperAxis::initialize
    /// [`connect`]: StepperAxis::connect
    pub fn new(driver: D, config: &SystemConfig) -> Self {
        Self {
            driver,
            axis: config.axis.clone(),
            homing: config.homing.clone(),
            timing: config.timing.clone(),
            initialized: false,
            engaged: false,
            target_position: 0,
            last_error: None,
        }
    }

    /// Create, initialize, and home an axis in one pass.
    ///
    /// This is the normal construction path: open and attach the device,
    /// apply the configured limits, then run an automatic homing pass.
    /// Failures are logged and leave the axis un-opened or un-homed; they
    /// never panic.
    pub fn connect(driver: D, config: &SystemConfig) -> Self {
        let mut axis = Self::new(driver, config);
        if axis.initialize() && !axis.run_homing() {
            warn!("initial homing failed for axis '{}'", axis.axis.name);
        }
        axis
    }

    /// Open the device and apply the configured limits.
    ///
    /// Returns whether the axis reached a usable state. An open or attach
    /// failure latches the axis un-opened; limit-apply failures are logged
    /// and tolerated.
    pub fn initialize(&mut self) -> bool {
        info!("opening stepper device for axis '{}'", self.axis.name);
        if let Err(e) = self.driver.open() {
            error!("failed to open device: {}", e);
            self.initialized = false;
            self.last_error = Some(StageError::NotInitialized);
            return false;
        }
        if !self.driver.is_attached() {
            error!("device did not attach");
            let _ = self.driver.close();
            self.initialized = false;
            self.last_error = Some(StageError::NotInitialized);
            return false;
        }

        let info = self.driver.info();
        info!(
            "attached: {} (serial {}, version {})",
            info.device_name, info.serial, info.version
        );

        self.initialized = true;
        self.apply_settings();
        self.drain_events();
        true
    }

    /// Axis name from the configuration.
    pub fn name(&self) -> &str {
        &self.axis.name
    }

    /// Currently configured acceleration in steps per second squared.
    pub fn acceleration(&self) -> f64 {
        self.axis.acceleration
    }

    /// Last target position commanded through this axis, in steps.
    pub fn target_position(&self) -> i64 {
        self.target_position
    }

    /// Whether the coil driver is energized.
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Reason behind the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<&StageError> {
        self.last_error.as_ref()
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the underlying driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Write the configured limits to the device, logging failures.
    fn apply_settings(&mut self) {
        let acceleration = self.axis.acceleration;
        if let Err(e) = self.apply_acceleration(acceleration) {
            warn!("could not apply acceleration: {}", e);
        }

        let velocity_limit = self.axis.velocity_limit;
        if let Err(e) = self.driver.set_velocity_limit(velocity_limit) {
            warn!("could not apply velocity limit: {}", e);
        }

        let current_limit = self.axis.current_limit;
        if let Err(e) = self.driver.set_current_limit(current_limit) {
            warn!("could not apply current limit: {}", e);
        }

        self.settle(self.timing.settle());
    }

    /// Range-check and apply an acceleration value.
    pub(crate) fn apply_acceleration(&mut self, value: f64) -> Result<(), StageError> {
        let (min, max) = self.driver.acceleration_limits()?;
        if value < min || value > max {
            return Err(StageError::AccelerationOutOfRange {
                requested: value,
                min,
                max,
            });
        }
        self.driver.set_acceleration(value)?;
        self.axis.acceleration = value;
        Ok(())
    }

    /// Drain and log the driver's queued notifications.
    pub(crate) fn drain_events(&mut self) {
        for event in self.driver.take_events() {
            log_event(&event);
        }
    }

    /// Pause for a settle interval, if one is configured.
    pub(crate) fn settle(&self, pause: Duration) {
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    /// Poll the position register until it equals `target`.
    ///
    /// `budget` is only used to report how long the wait was allowed to
    /// take; `deadline` bounds it.
    pub(crate) fn wait_for_position(
        &mut self,
        target: i64,
        deadline: Instant,
        budget: Duration,
    ) -> Result<(), StageError> {
        loop {
            self.drain_events();
            if self.driver.current_position()? == target {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(StageError::Timeout {
                    target,
                    waited_ms: budget.as_millis() as u64,
                });
            }
            thread::sleep(self.timing.poll_interval());
        }
    }

    /// Record a failed operation and report it.
    pub(crate) fn fail(&mut self, error: StageError) -> crate::stage::Outcome {
        warn!("axis '{}': {}", self.axis.name, error);
        self.last_error = Some(error);
        crate::stage::Outcome::Failed
    }
}

impl<D: StepperDriver> Drop for StepperAxis<D> {
    fn drop(&mut self) {
        if let Err(e) = self.driver.set_engaged(false) {
            debug!("disengage on teardown failed: {}", e);
        }
        if let Err(e) = self.driver.close() {
            debug!("close on teardown failed: {}", e);
        }
    }
}
