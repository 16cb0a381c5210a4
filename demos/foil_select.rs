//! Interactive foil selection demo.
//!
//! Stands in for the measurement front end: reads foil names from stdin
//! and drives the stage to the matching position. Runs entirely against
//! the simulated driver, so no hardware is needed.
//!
//! Run with `RUST_LOG=debug` to watch the homing sweep.

use std::io::{self, BufRead, Write};

use foil_stage::{parse_config, FoilTable, MotorStage, Outcome, SimDriver, StepperAxis};

const CONFIG: &str = r#"
[axis]
name = "uic xray box"
acceleration_steps_per_sec2 = 4000.0
velocity_limit_steps_per_sec = 900.0
current_limit_amps = 0.7

[timing]
poll_interval_ms = 1
settle_ms = 10

[homing]
settle_ms = 10

[foils]
Ag = 0
Mo = 2667
Cu = 5333
Tb = 8000
Sn = 10667
In = 13333
"#;

fn main() {
    env_logger::init();

    let config = parse_config(CONFIG).expect("demo config is valid");
    let table = FoilTable::from_config(&config);

    // Simulated hardware: home zone just below the far end of travel.
    let driver = SimDriver::new()
        .with_switch_zone(15_000..15_600)
        .with_step_rate(400);

    println!("Connecting and homing...");
    let mut axis = StepperAxis::connect(driver, &config);
    if !axis.is_open() {
        eprintln!("Device failed to open");
        return;
    }

    let names: Vec<&str> = table.names().collect();
    println!("Known foils: {}", names.join("/"));

    let stdin = io::stdin();
    loop {
        print!("Enter target foil: ");
        io::stdout().flush().expect("stdout flush");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("stdin read") == 0 {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        let Some(position) = table.position(name) else {
            println!("Valid arguments are {}", names.join("/"));
            continue;
        };

        match axis.move_absolute(&[position]) {
            Outcome::Completed => println!("{} in position ({} steps)", name, position),
            Outcome::Failed => println!(
                "Move failed: {}",
                axis.last_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| String::from("unknown"))
            ),
            Outcome::Unattempted => {
                println!("Device not open");
                break;
            }
        }
    }
}
