//! # foil-stage
//!
//! Single-axis stepper stage control for positioning interchangeable
//! filter foils at predefined linear positions.
//!
//! ## Features
//!
//! - **Capability contract**: the [`MotorStage`] trait any positioning
//!   device must satisfy, with no hardware knowledge
//! - **Blocking motion**: synchronous point-to-point moves verified by
//!   re-reading the device position, bounded by configurable timeouts
//! - **Homing**: a sweep/bracket/center calibration sequence driven by a
//!   single binary home-switch sensor
//! - **Explicit device boundary**: the [`StepperDriver`] trait isolates
//!   the vendor driver, so everything runs against [`SimDriver`] without
//!   hardware
//! - **Configuration-driven**: axis limits, homing constants, timing, and
//!   the foil table all come from TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use foil_stage::{load_config, FoilTable, MotorStage, StepperAxis};
//!
//! let config = load_config("stage.toml")?;
//! let table = FoilTable::from_config(&config);
//!
//! // Opens the device, applies limits, and homes the axis.
//! let mut axis = StepperAxis::connect(driver, &config);
//!
//! if let Some(position) = table.position("Mo") {
//!     axis.move_absolute(&[position]);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod axis;
pub mod config;
pub mod device;
pub mod error;
pub mod foil;
pub mod stage;

// Re-exports for ergonomic API
pub use axis::StepperAxis;
pub use config::{load_config, parse_config, validate_config, SystemConfig};
pub use device::sim::SimDriver;
pub use device::{DriverEvent, DriverInfo, StepperDriver};
pub use error::{Error, Result};
pub use foil::FoilTable;
pub use stage::{MotorStage, Outcome};
