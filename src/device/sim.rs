//! Simulated stepper driver.
//!
//! A deterministic, hardware-free [`StepperDriver`] used by the test suite
//! and the demos. The simulated stage advances toward its target by a
//! configurable number of steps on every position read, a binary switch
//! zone drives the home input, and every mutating command is recorded so
//! tests can assert the exact command traffic an operation produced.

use std::collections::VecDeque;
use std::ops::Range;

use crate::error::DriverError;

use super::driver::{DriverInfo, StepperDriver};
use super::events::DriverEvent;

/// Simulated register-level stepper controller.
#[derive(Debug, Clone)]
pub struct SimDriver {
    attached: bool,
    open: bool,
    engaged: bool,
    position: i64,
    target: i64,
    /// Steps traveled per position read; 0 means the stage arrives
    /// instantly on the next read.
    step_rate: i64,
    /// Half-open step range in which the home switch reads active.
    switch_zone: Option<Range<i64>>,
    /// Position past which the stage never advances (mechanical jam).
    stall_at: Option<i64>,
    /// When set, every mutating command is rejected.
    reject_commands: bool,
    commanded_targets: Vec<i64>,
    stamps: Vec<i64>,
    engage_commands: usize,
    events: VecDeque<DriverEvent>,
    acceleration: f64,
    acceleration_range: (f64, f64),
    velocity_limit: f64,
    velocity_range: (f64, f64),
    current_limit: f64,
    current_range: (f64, f64),
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create an attached, closed simulated device at step 0.
    pub fn new() -> Self {
        Self {
            attached: true,
            open: false,
            engaged: false,
            position: 0,
            target: 0,
            step_rate: 0,
            switch_zone: None,
            stall_at: None,
            reject_commands: false,
            commanded_targets: Vec::new(),
            stamps: Vec::new(),
            engage_commands: 0,
            events: VecDeque::new(),
            acceleration: 4000.0,
            acceleration_range: (1.0, 1_000_000.0),
            velocity_limit: 900.0,
            velocity_range: (1.0, 10_000.0),
            current_limit: 0.7,
            current_range: (0.1, 4.0),
        }
    }

    /// Set the step range in which the home switch reads active.
    pub fn with_switch_zone(mut self, zone: Range<i64>) -> Self {
        self.switch_zone = Some(zone);
        self
    }

    /// Set the steps traveled per position read.
    pub fn with_step_rate(mut self, rate: i64) -> Self {
        self.step_rate = rate;
        self
    }

    /// Start the stage at a specific position.
    pub fn starting_at(mut self, position: i64) -> Self {
        self.position = position;
        self.target = position;
        self
    }

    /// Jam the stage at a position; it never advances past it.
    pub fn with_stall_at(mut self, position: i64) -> Self {
        self.stall_at = Some(position);
        self
    }

    /// Override the device-reported acceleration range.
    pub fn with_acceleration_range(mut self, min: f64, max: f64) -> Self {
        self.acceleration_range = (min, max);
        self
    }

    /// Start in the detached state.
    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    /// Detach the device mid-run.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Reject every subsequent mutating command.
    pub fn reject_commands(&mut self, reject: bool) {
        self.reject_commands = reject;
    }

    /// Raw stage position, without advancing the simulation.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Whether the coil driver is energized.
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Configured acceleration register value.
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Configured velocity-limit register value.
    pub fn velocity_limit(&self) -> f64 {
        self.velocity_limit
    }

    /// Configured current-limit register value.
    pub fn current_limit(&self) -> f64 {
        self.current_limit
    }

    /// Every target-position command issued, in order.
    pub fn commanded_targets(&self) -> &[i64] {
        &self.commanded_targets
    }

    /// Every position-register stamp issued, in order.
    pub fn stamps(&self) -> &[i64] {
        &self.stamps
    }

    /// Total mutating commands the device has received.
    pub fn command_count(&self) -> usize {
        self.commanded_targets.len() + self.stamps.len() + self.engage_commands
    }

    fn command_gate(&self) -> Result<(), DriverError> {
        if !self.attached {
            return Err(DriverError::NotAttached);
        }
        if !self.open {
            return Err(DriverError::Rejected {
                code: 5,
                message: String::from("device not open"),
            });
        }
        if self.reject_commands {
            return Err(DriverError::Rejected {
                code: 17,
                message: String::from("command rejected"),
            });
        }
        Ok(())
    }

    /// Advance the stage toward the target by one read's worth of travel.
    fn advance(&mut self) {
        if !self.open || !self.engaged || self.position == self.target {
            return;
        }

        let mut next = if self.step_rate <= 0 {
            self.target
        } else if self.target > self.position {
            (self.position + self.step_rate).min(self.target)
        } else {
            (self.position - self.step_rate).max(self.target)
        };

        if let Some(stall) = self.stall_at {
            if self.position <= stall && next > stall {
                next = stall;
            } else if self.position >= stall && next < stall {
                next = stall;
            }
        }

        if next != self.position {
            self.position = next;
            self.events.push_back(DriverEvent::PositionChanged { steps: next });
        }
    }
}

impl StepperDriver for SimDriver {
    fn open(&mut self) -> Result<(), DriverError> {
        if !self.attached {
            return Err(DriverError::NotAttached);
        }
        self.open = true;
        self.events.push_back(DriverEvent::Attached {
            serial: self.info().serial,
        });
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.open = false;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn info(&self) -> DriverInfo {
        DriverInfo {
            device_name: String::from("Simulated Stepper"),
            serial: 424242,
            version: 1,
        }
    }

    fn current_position(&mut self) -> Result<i64, DriverError> {
        if !self.attached {
            return Err(DriverError::NotAttached);
        }
        self.advance();
        Ok(self.position)
    }

    fn stamp_position(&mut self, steps: i64) -> Result<(), DriverError> {
        self.command_gate()?;
        // Re-referencing the register also rebases the target, as the
        // stage must not creep back toward a stale pre-stamp target.
        self.position = steps;
        self.target = steps;
        self.stamps.push(steps);
        Ok(())
    }

    fn set_target_position(&mut self, steps: i64) -> Result<(), DriverError> {
        self.command_gate()?;
        self.target = steps;
        self.commanded_targets.push(steps);
        Ok(())
    }

    fn set_engaged(&mut self, engaged: bool) -> Result<(), DriverError> {
        self.command_gate()?;
        self.engaged = engaged;
        self.engage_commands += 1;
        Ok(())
    }

    fn home_switch(&mut self) -> Result<bool, DriverError> {
        if !self.attached {
            return Err(DriverError::NotAttached);
        }
        Ok(self
            .switch_zone
            .as_ref()
            .is_some_and(|zone| zone.contains(&self.position)))
    }

    fn acceleration_limits(&self) -> Result<(f64, f64), DriverError> {
        Ok(self.acceleration_range)
    }

    fn set_acceleration(&mut self, value: f64) -> Result<(), DriverError> {
        self.command_gate()?;
        let (min, max) = self.acceleration_range;
        if value < min || value > max {
            return Err(DriverError::Rejected {
                code: 7,
                message: String::from("acceleration out of range"),
            });
        }
        self.acceleration = value;
        Ok(())
    }

    fn velocity_limits(&self) -> Result<(f64, f64), DriverError> {
        Ok(self.velocity_range)
    }

    fn set_velocity_limit(&mut self, value: f64) -> Result<(), DriverError> {
        self.command_gate()?;
        let (min, max) = self.velocity_range;
        if value < min || value > max {
            return Err(DriverError::Rejected {
                code: 7,
                message: String::from("velocity limit out of range"),
            });
        }
        self.velocity_limit = value;
        Ok(())
    }

    fn current_limits(&self) -> Result<(f64, f64), DriverError> {
        Ok(self.current_range)
    }

    fn set_current_limit(&mut self, value: f64) -> Result<(), DriverError> {
        self.command_gate()?;
        let (min, max) = self.current_range;
        if value < min || value > max {
            return Err(DriverError::Rejected {
                code: 7,
                message: String::from("current limit out of range"),
            });
        }
        self.current_limit = value;
        Ok(())
    }

    fn take_events(&mut self) -> Vec<DriverEvent> {
        self.events.drain(..).collect()
    }
}
