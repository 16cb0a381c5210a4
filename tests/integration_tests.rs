//! Integration tests for the foil-stage library.
//!
//! These tests verify the complete workflow from TOML parsing through
//! homing and foil positioning, running against the simulated driver.

use foil_stage::error::StageError;
use foil_stage::{
    parse_config, FoilTable, MotorStage, Outcome, SimDriver, StepperAxis, SystemConfig,
};

use proptest::prelude::*;

// =============================================================================
// Test configuration data
// =============================================================================

/// Full deployment configuration with all pauses zeroed for test speed.
const TEST_CONFIG: &str = r#"
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
settle_ms = 0

[timing]
poll_interval_ms = 0
settle_ms = 0
move_timeout_ms = 1000
homing_timeout_ms = 1000

[foils]
Ag = 0
Mo = 2667
Cu = 5333
Tb = 8000
Sn = 10667
In = 13333
"#;

fn test_config() -> SystemConfig {
    parse_config(TEST_CONFIG).expect("test config is valid")
}

/// Axis that is open but deliberately un-homed, for scenario control.
fn open_axis(driver: SimDriver) -> StepperAxis<SimDriver> {
    let mut axis = StepperAxis::new(driver, &test_config());
    assert!(axis.initialize());
    axis
}

// =============================================================================
// Full workflow: config -> connect -> home -> foil moves
// =============================================================================

#[test]
fn test_foil_positioning_workflow() {
    let config = test_config();
    let table = FoilTable::from_config(&config);

    // Home zone straddles the origin, so the automatic homing pass takes
    // the already-home path.
    let driver = SimDriver::new().with_switch_zone(-100..200);
    let mut axis = StepperAxis::connect(driver, &config);

    assert!(axis.is_open());
    assert!(axis.test_communication());
    assert_eq!(axis.driver().position(), 0);

    for name in ["Mo", "Cu", "Ag", "In"] {
        let position = table.position(name).expect("foil is configured");
        assert_eq!(axis.move_absolute(&[position]), Outcome::Completed);
        assert_eq!(axis.driver().position(), position);
    }

    assert_eq!(table.position("W"), None);
}

// =============================================================================
// Homing scenarios
// =============================================================================

#[test]
fn test_homing_already_home() {
    let mut axis = open_axis(SimDriver::new().with_switch_zone(-100..200));

    assert!(axis.home());
    assert_eq!(axis.driver().position(), 0);
    // Seek-origin only; the sweep was never commanded.
    assert_eq!(axis.driver().commanded_targets(), &[0]);
}

#[test]
fn test_homing_typical_sweep() {
    let mut axis = open_axis(
        SimDriver::new()
            .with_switch_zone(4000..4300)
            .with_step_rate(100),
    );

    assert!(axis.home());
    // Edges at 4000/4300: overrun to 4400, center at (4000+4300)/2 - 50.
    assert_eq!(axis.driver().commanded_targets(), &[0, 17_000, 4400, 4100]);
    assert_eq!(axis.driver().stamps(), &[0]);
    assert_eq!(axis.driver().position(), 0);
}

#[test]
fn test_homing_sensor_never_trips() {
    let mut axis = open_axis(SimDriver::new().with_step_rate(500));

    assert!(!axis.home());
    assert_eq!(axis.driver().commanded_targets(), &[0, 17_000]);
    assert!(axis.driver().stamps().is_empty());
    assert!(matches!(axis.last_error(), Some(StageError::HomeNotFound)));
}

// =============================================================================
// Degraded results, never raised faults
// =============================================================================

#[test]
fn test_closed_device_unattempted() {
    let mut axis = StepperAxis::new(SimDriver::new(), &test_config());

    assert!(!axis.is_open());
    assert_eq!(axis.move_absolute(&[100]), Outcome::Unattempted);
    assert_eq!(axis.move_relative(&[100]), Outcome::Unattempted);
    assert_eq!(axis.set_acceleration(2000.0), Outcome::Unattempted);
    assert!(!axis.home());
    assert_eq!(axis.driver().command_count(), 0);
}

#[test]
fn test_never_opened_when_hardware_absent() {
    let mut axis = StepperAxis::new(SimDriver::new().detached(), &test_config());
    assert!(!axis.initialize());
    assert!(!axis.is_open());
    assert!(!axis.test_communication());
    assert_eq!(axis.move_absolute(&[0]), Outcome::Unattempted);
}

#[test]
fn test_rejected_commands_surface_as_failed() {
    let mut axis = open_axis(SimDriver::new());
    axis.driver_mut().reject_commands(true);

    assert_eq!(axis.move_absolute(&[100]), Outcome::Failed);
    assert!(!axis.home());
    assert!(matches!(axis.last_error(), Some(StageError::Driver(_))));
}

#[test]
fn test_acceleration_range_enforced() {
    let mut axis = open_axis(SimDriver::new().with_acceleration_range(500.0, 8000.0));

    assert_eq!(axis.set_acceleration(10_000.0), Outcome::Failed);
    assert_eq!(axis.acceleration(), 4000.0);
    assert!(matches!(
        axis.last_error(),
        Some(StageError::AccelerationOutOfRange {
            min,
            max,
            ..
        }) if *min == 500.0 && *max == 8000.0
    ));

    assert_eq!(axis.set_acceleration(6000.0), Outcome::Completed);
    assert_eq!(axis.acceleration(), 6000.0);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// move_relative([d]) from p0 lands where move_absolute([p0 + d]) does.
    #[test]
    fn prop_relative_matches_absolute(p0 in -10_000i64..10_000, d in -10_000i64..10_000) {
        let mut relative = open_axis(SimDriver::new());
        prop_assert_eq!(relative.move_absolute(&[p0]), Outcome::Completed);
        prop_assert_eq!(relative.move_relative(&[d]), Outcome::Completed);

        let mut absolute = open_axis(SimDriver::new());
        prop_assert_eq!(absolute.move_absolute(&[p0 + d]), Outcome::Completed);

        prop_assert_eq!(relative.driver().position(), absolute.driver().position());
    }

    /// Any coordinate slice of the wrong arity is rejected before the
    /// device sees a command.
    #[test]
    fn prop_wrong_arity_rejected(coords in proptest::collection::vec(-1000i64..1000, 0..6)) {
        prop_assume!(coords.len() != 1);

        let mut axis = open_axis(SimDriver::new());
        let baseline = axis.driver().command_count();

        prop_assert_eq!(axis.move_absolute(&coords), Outcome::Failed);
        prop_assert_eq!(axis.move_relative(&coords), Outcome::Failed);
        prop_assert_eq!(axis.driver().command_count(), baseline);
    }
}
