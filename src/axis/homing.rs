//! Homing and calibration.
//!
//! Establishes the absolute zero reference from a single binary home
//! switch whose active zone spans a range of steps. The sweep assumes
//! monotonic travel, so the first active sample and the first inactive
//! sample after it bracket one contiguous zone.

use std::thread;
use std::time::Instant;

use log::{debug, info};

use crate::device::StepperDriver;
use crate::error::StageError;
use crate::stage::MotorStage;

use super::stepper::StepperAxis;

impl<D: StepperDriver> StepperAxis<D> {
    /// Run the full homing sequence.
    ///
    /// On success the position register reads 0 at a verified
    /// switch-active location. On failure the register is left
    /// uncorrected and the reason is available from `last_error()`.
    pub(crate) fn run_homing(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        match self.homing_sequence() {
            Ok(()) => {
                info!("axis '{}' homed, position is zero", self.name());
                self.last_error = None;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    fn homing_sequence(&mut self) -> Result<(), StageError> {
        // Seek origin: a plain absolute move to step 0.
        self.run_move(0)?;

        // Already inside the home zone: re-reference in place.
        if self.driver.home_switch()? {
            debug!("home switch active at origin");
            self.driver.set_engaged(true)?;
            self.engaged = true;
            self.driver.stamp_position(0)?;
            self.settle(self.homing.settle());
            return Ok(());
        }

        self.sweep_for_switch()?;

        // Verify and zero. An inactive switch here means the sweep never
        // bracketed the zone; the position register stays uncorrected.
        if !self.driver.home_switch()? {
            return Err(StageError::HomeNotFound);
        }
        self.driver.stamp_position(0)?;
        self.settle(self.homing.settle());
        Ok(())
    }

    /// Sweep toward the far end of travel, bracketing the home zone's
    /// edges by polling, then park at its center.
    ///
    /// The loop ends when the stage is centered, or when the polled
    /// position reaches the sweep guard without both edges being seen.
    fn sweep_for_switch(&mut self) -> Result<(), StageError> {
        let sweep_target = self.homing.sweep_target_steps;
        let guard = self.homing.sweep_guard_steps;
        let overrun = self.homing.overrun_steps;

        debug!("sweeping for home switch toward {}", sweep_target);
        self.driver.set_target_position(sweep_target)?;
        self.driver.set_engaged(true)?;
        self.engaged = true;
        self.target_position = sweep_target;

        let budget = self.timing.homing_timeout();
        let deadline = Instant::now() + budget;

        let mut home_begin: Option<i64> = None;
        let mut home_end: Option<i64> = None;

        loop {
            self.drain_events();
            let position = self.driver.current_position()?;
            if position >= guard {
                debug!("sweep guard {} reached without centering", guard);
                break;
            }

            let active = self.driver.home_switch()?;
            match (home_begin, home_end) {
                (None, None) if active => {
                    debug!("found home zone begin at {}", position);
                    home_begin = Some(position);
                }
                (Some(_), None) if !active => {
                    debug!("found home zone end at {}", position);
                    home_end = Some(position);
                    // Overshoot past the end edge so the stage clears the
                    // zone and has room to decelerate.
                    self.driver.set_target_position(position + overrun)?;
                    self.target_position = position + overrun;
                }
                (Some(begin), Some(end)) if position >= end + overrun => {
                    let center = self.homing.center_of(begin, end);
                    debug!("home zone [{}, {}], centering at {}", begin, end, center);
                    self.driver.set_target_position(center)?;
                    self.target_position = center;
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    self.wait_for_position(center, deadline, remaining)?;
                    self.settle(self.homing.settle());
                    break;
                }
                _ => {}
            }

            if Instant::now() >= deadline {
                return Err(StageError::Timeout {
                    target: sweep_target,
                    waited_ms: budget.as_millis() as u64,
                });
            }
            thread::sleep(self.timing.poll_interval());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::test_util::fast_config;
    use crate::device::sim::SimDriver;

    fn open_axis(driver: SimDriver) -> StepperAxis<SimDriver> {
        let mut axis = StepperAxis::new(driver, &fast_config());
        assert!(axis.initialize());
        axis
    }

    #[test]
    fn test_already_home_zeroes_without_sweep() {
        let mut axis = open_axis(SimDriver::new().with_switch_zone(-100..200));

        assert!(axis.home());
        // Only the seek-origin target was commanded; no sweep.
        assert_eq!(axis.driver().commanded_targets(), &[0]);
        assert_eq!(axis.driver().stamps(), &[0]);
        assert_eq!(axis.driver().position(), 0);
    }

    #[test]
    fn test_sweep_brackets_zone_and_centers() {
        let mut axis = open_axis(
            SimDriver::new()
                .with_switch_zone(4000..4300)
                .with_step_rate(100),
        );

        assert!(axis.home());
        // Seek origin, sweep, overrun past the end edge, then center.
        assert_eq!(axis.driver().commanded_targets(), &[0, 17_000, 4400, 4100]);
        assert_eq!(axis.driver().stamps(), &[0]);
        assert_eq!(axis.driver().position(), 0);
    }

    #[test]
    fn test_sweep_centers_at_biased_midpoint() {
        // Asymmetric zone; center is (5000 + 5600) / 2 - 50 = 5250.
        let mut axis = open_axis(
            SimDriver::new()
                .with_switch_zone(5000..5600)
                .with_step_rate(100),
        );

        assert!(axis.home());
        assert_eq!(axis.driver().commanded_targets(), &[0, 17_000, 5700, 5250]);
    }

    #[test]
    fn test_switch_never_trips_fails_without_stamp() {
        let mut axis = open_axis(SimDriver::new().with_step_rate(500));

        assert!(!axis.home());
        assert_eq!(axis.driver().commanded_targets(), &[0, 17_000]);
        assert!(axis.driver().stamps().is_empty());
        assert!(matches!(
            axis.last_error(),
            Some(StageError::HomeNotFound)
        ));
    }

    #[test]
    fn test_homing_on_closed_axis_is_false() {
        let mut axis = StepperAxis::new(SimDriver::new(), &fast_config());
        assert!(!axis.home());
        assert_eq!(axis.driver().command_count(), 0);
    }

    #[test]
    fn test_reset_reruns_homing() {
        let mut axis = open_axis(SimDriver::new().with_switch_zone(-100..200));
        assert!(axis.home());
        assert!(axis.reset());
        assert_eq!(axis.driver().stamps(), &[0, 0]);
    }

    #[test]
    fn test_stalled_sweep_times_out() {
        let mut axis = open_axis(SimDriver::new().with_step_rate(100).with_stall_at(700));
        axis.timing.homing_timeout_ms = 20;
        axis.timing.poll_interval_ms = 1;

        assert!(!axis.home());
        assert!(axis.driver().stamps().is_empty());
        assert!(matches!(
            axis.last_error(),
            Some(StageError::Timeout { .. })
        ));
    }
}
