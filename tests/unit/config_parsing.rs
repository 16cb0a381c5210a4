//! Unit tests for TOML configuration parsing.

use foil_stage::config::parse_config;

/// Test parsing a complete configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[axis]
name = "uic xray box"
acceleration_steps_per_sec2 = 4000.0
velocity_limit_steps_per_sec = 900.0
current_limit_amps = 0.7

[homing]
sweep_target_steps = 17000
sweep_guard_steps = 16000
overrun_steps = 100
center_bias_steps = 50
settle_ms = 1000

[timing]
poll_interval_ms = 5
settle_ms = 1000
move_timeout_ms = 60000
homing_timeout_ms = 120000

[foils]
Ag = 0
Mo = 2667
Cu = 5333
Tb = 8000
Sn = 10667
In = 13333
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.axis.name, "uic xray box");
    assert_eq!(config.axis.acceleration, 4000.0);
    assert_eq!(config.axis.velocity_limit, 900.0);
    assert_eq!(config.axis.current_limit, 0.7);

    assert_eq!(config.homing.sweep_target_steps, 17_000);
    assert_eq!(config.homing.sweep_guard_steps, 16_000);
    assert_eq!(config.homing.overrun_steps, 100);
    assert_eq!(config.homing.center_bias_steps, 50);

    assert_eq!(config.timing.poll_interval_ms, 5);
    assert_eq!(config.timing.move_timeout_ms, 60_000);

    assert_eq!(config.foils.len(), 6);
    assert_eq!(config.foil("Tb"), Some(8000));
}

/// Omitted sections fall back to defaults.
#[test]
fn test_parse_defaults() {
    let config = parse_config("[axis]\nname = \"axis\"\n").expect("Failed to parse TOML");

    assert_eq!(config.axis.acceleration, 4000.0);
    assert_eq!(config.homing.sweep_target_steps, 17_000);
    assert_eq!(config.homing.sweep_guard_steps, 16_000);
    assert_eq!(config.timing.settle_ms, 1000);
    assert!(config.foils.is_empty());
}

/// Unparseable TOML is a parse error, not a panic.
#[test]
fn test_parse_malformed_toml() {
    assert!(parse_config("[axis\nname = ").is_err());
}

/// Foil names map preserves every entry.
#[test]
fn test_foil_names() {
    let toml_str = r#"
[axis]
name = "axis"

[foils]
Ag = 0
Mo = 2667
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let names: Vec<&str> = config.foil_names().collect();
    assert_eq!(names, ["Ag", "Mo"]);
}
