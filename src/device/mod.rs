//! Device driver boundary.
//!
//! The controller never talks to vendor hardware directly; it consumes the
//! [`StepperDriver`] trait, which any register-level stepper controller (or
//! a simulated one) can implement.

mod driver;
mod events;
pub mod sim;

pub use driver::{DriverInfo, StepperDriver};
pub use events::{log_event, DriverEvent};
