//! The concrete stepper axis controller.
//!
//! [`StepperAxis`] binds the [`MotorStage`] contract to one physical
//! register-level device: it owns the device configuration, tracks
//! engagement, and implements the blocking motion primitives and the
//! homing state machine.
//!
//! [`MotorStage`]: crate::stage::MotorStage

mod homing;
mod motion;
mod stepper;

pub use stepper::StepperAxis;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::config::SystemConfig;

    /// Configuration with all pauses zeroed so tests run instantly.
    pub fn fast_config() -> SystemConfig {
        let mut config = SystemConfig::default();
        config.timing.poll_interval_ms = 0;
        config.timing.settle_ms = 0;
        config.timing.move_timeout_ms = 1000;
        config.timing.homing_timeout_ms = 1000;
        config.homing.settle_ms = 0;
        config
    }
}
