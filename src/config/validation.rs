//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Axis limits are positive
/// - Sweep guard lies strictly between 0 and the sweep target
/// - Overrun and centering offsets are sane
/// - Timeouts are nonzero
/// - Foil positions fall inside the travel range
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_axis(config)?;
    validate_homing(config)?;
    validate_timing(config)?;
    validate_foils(config)?;

    Ok(())
}

fn validate_axis(config: &SystemConfig) -> Result<()> {
    let axis = &config.axis;

    if axis.acceleration <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            axis.acceleration,
        )));
    }

    if axis.velocity_limit <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVelocityLimit(
            axis.velocity_limit,
        )));
    }

    if axis.current_limit <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidCurrentLimit(
            axis.current_limit,
        )));
    }

    Ok(())
}

fn validate_homing(config: &SystemConfig) -> Result<()> {
    let homing = &config.homing;

    if homing.sweep_guard_steps <= 0 || homing.sweep_guard_steps >= homing.sweep_target_steps {
        return Err(Error::Config(ConfigError::InvalidSweepRange {
            target: homing.sweep_target_steps,
            guard: homing.sweep_guard_steps,
        }));
    }

    if homing.overrun_steps <= 0 {
        return Err(Error::Config(ConfigError::InvalidOverrun(
            homing.overrun_steps,
        )));
    }

    if homing.center_bias_steps < 0 {
        return Err(Error::Config(ConfigError::InvalidCenterBias(
            homing.center_bias_steps,
        )));
    }

    Ok(())
}

fn validate_timing(config: &SystemConfig) -> Result<()> {
    let timing = &config.timing;

    if timing.move_timeout_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroTimeout("move_timeout_ms")));
    }

    if timing.homing_timeout_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroTimeout(
            "homing_timeout_ms",
        )));
    }

    Ok(())
}

fn validate_foils(config: &SystemConfig) -> Result<()> {
    let max = config.homing.sweep_guard_steps;

    for (name, &position) in &config.foils {
        if position < 0 || position > max {
            return Err(Error::Config(ConfigError::FoilOutOfRange {
                name: name.clone(),
                position,
                max,
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SystemConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SystemConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_acceleration() {
        let mut config = SystemConfig::default();
        config.axis.acceleration = -1.0;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidAcceleration(_)))
        ));
    }

    #[test]
    fn test_guard_must_be_below_target() {
        let mut config = SystemConfig::default();
        config.homing.sweep_guard_steps = config.homing.sweep_target_steps;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSweepRange { .. }))
        ));
    }

    #[test]
    fn test_foil_beyond_travel_rejected() {
        let mut config = SystemConfig::default();
        config.foils.insert(String::from("W"), 20_000);

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::FoilOutOfRange { .. }))
        ));
    }
}
