//! Unit tests for configuration validation.

use foil_stage::config::{parse_config, validate_config, SystemConfig};
use foil_stage::error::{ConfigError, Error};

/// The built-in defaults must validate.
#[test]
fn test_defaults_are_valid() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

/// Non-positive axis limits are rejected.
#[test]
fn test_rejects_non_positive_axis_limits() {
    let mut config = SystemConfig::default();
    config.axis.velocity_limit = 0.0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidVelocityLimit(_)))
    ));

    let mut config = SystemConfig::default();
    config.axis.current_limit = -0.5;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidCurrentLimit(_)))
    ));
}

/// The sweep guard must sit strictly inside (0, sweep_target).
#[test]
fn test_rejects_guard_outside_sweep() {
    for guard in [0, -1, 17_000, 18_000] {
        let mut config = SystemConfig::default();
        config.homing.sweep_guard_steps = guard;
        assert!(
            matches!(
                validate_config(&config),
                Err(Error::Config(ConfigError::InvalidSweepRange { .. }))
            ),
            "guard {} should be rejected",
            guard
        );
    }
}

/// Overrun must be positive, bias non-negative.
#[test]
fn test_rejects_bad_offsets() {
    let mut config = SystemConfig::default();
    config.homing.overrun_steps = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidOverrun(0)))
    ));

    let mut config = SystemConfig::default();
    config.homing.center_bias_steps = -1;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidCenterBias(-1)))
    ));
}

/// Zero timeouts would reintroduce an unbounded busy-wait.
#[test]
fn test_rejects_zero_timeouts() {
    let mut config = SystemConfig::default();
    config.timing.move_timeout_ms = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::ZeroTimeout("move_timeout_ms")))
    ));

    let mut config = SystemConfig::default();
    config.timing.homing_timeout_ms = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::ZeroTimeout("homing_timeout_ms")))
    ));
}

/// Foil positions are bounded by the travel range.
#[test]
fn test_rejects_foil_outside_travel() {
    let toml_str = r#"
[axis]
name = "axis"

[foils]
W = 16500
"#;

    match parse_config(toml_str) {
        Err(Error::Config(ConfigError::FoilOutOfRange {
            name,
            position,
            max,
        })) => {
            assert_eq!(name, "W");
            assert_eq!(position, 16_500);
            assert_eq!(max, 16_000);
        }
        other => panic!("expected FoilOutOfRange, got {:?}", other),
    }
}

/// Negative foil positions are rejected too.
#[test]
fn test_rejects_negative_foil_position() {
    let mut config = SystemConfig::default();
    config.foils.insert(String::from("Ag"), -10);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::FoilOutOfRange { .. }))
    ));
}
