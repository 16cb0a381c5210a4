//! Blocking motion primitives.
//!
//! All three primitives share the same failure policy: device-layer faults
//! are caught here, logged, recorded as the last error, and degraded to a
//! [`Outcome::Failed`] result. Nothing below this layer reaches callers as
//! a raised fault.

use std::time::Instant;

use crate::device::StepperDriver;
use crate::error::StageError;
use crate::stage::{MotorStage, Outcome};

use super::stepper::StepperAxis;

impl<D: StepperDriver> StepperAxis<D> {
    /// Command a move to `target` and block until it is verifiably reached.
    ///
    /// The sequence is: write the target register, energize, settle, poll
    /// the position register until it equals the target (bounded by the
    /// move timeout), settle again, and verify with one final read. The
    /// final read is the only evidence of success; the poll loop alone is
    /// not trusted across the second settle.
    pub(crate) fn run_move(&mut self, target: i64) -> Result<(), StageError> {
        self.driver.set_target_position(target)?;
        self.driver.set_engaged(true)?;
        self.engaged = true;
        self.target_position = target;

        self.settle(self.timing.settle());

        let budget = self.timing.move_timeout();
        self.wait_for_position(target, Instant::now() + budget, budget)?;

        self.settle(self.timing.settle());

        let actual = self.driver.current_position()?;
        if actual == target {
            Ok(())
        } else {
            Err(StageError::PositionNotHeld { target, actual })
        }
    }

    /// Validate coordinate arity against the axis dimensions.
    fn check_arity(&self, coords: &[i64]) -> Result<(), StageError> {
        if coords.len() != Self::DIMENSIONS {
            return Err(StageError::DimensionMismatch {
                expected: Self::DIMENSIONS,
                got: coords.len(),
            });
        }
        Ok(())
    }
}

impl<D: StepperDriver> MotorStage for StepperAxis<D> {
    fn dimensions(&self) -> usize {
        Self::DIMENSIONS
    }

    fn is_open(&self) -> bool {
        self.driver.is_attached() && self.initialized
    }

    fn move_absolute(&mut self, coords: &[i64]) -> Outcome {
        if !self.is_open() {
            return Outcome::Unattempted;
        }
        if let Err(e) = self.check_arity(coords) {
            // Caller error, rejected before any device command.
            return self.fail(e);
        }

        match self.run_move(coords[0]) {
            Ok(()) => {
                self.last_error = None;
                Outcome::Completed
            }
            Err(e) => self.fail(e),
        }
    }

    fn move_relative(&mut self, coords: &[i64]) -> Outcome {
        if !self.is_open() {
            return Outcome::Unattempted;
        }
        if let Err(e) = self.check_arity(coords) {
            return self.fail(e);
        }

        let current = match self.driver.current_position() {
            Ok(position) => position,
            Err(e) => return self.fail(e.into()),
        };

        // Fresh absolute target; the caller's slice stays untouched.
        let absolute = [current + coords[0]];
        self.move_absolute(&absolute)
    }

    fn set_acceleration(&mut self, value: f64) -> Outcome {
        if !self.is_open() {
            return Outcome::Unattempted;
        }

        match self.apply_acceleration(value) {
            Ok(()) => {
                self.last_error = None;
                Outcome::Completed
            }
            Err(e) => self.fail(e),
        }
    }

    fn home(&mut self) -> bool {
        self.run_homing()
    }
}
