//! Asynchronous driver notifications.
//!
//! Vendor drivers report attach/detach, faults, and register changes on an
//! event channel. The controller drains these at poll points and logs them;
//! no control decision is taken from an event.

use log::{debug, info, trace, warn};

/// A notification drained from the driver's event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// Device attached.
    Attached {
        /// Serial number of the attached device
        serial: i32,
    },
    /// Device detached.
    Detached {
        /// Serial number of the detached device
        serial: i32,
    },
    /// Asynchronous driver fault.
    Fault {
        /// Driver-specific error code
        code: i32,
        /// Driver-supplied description
        message: String,
    },
    /// A digital input changed state.
    InputChanged {
        /// Input index
        index: u8,
        /// New input state
        state: bool,
    },
    /// The position register changed.
    PositionChanged {
        /// New position in steps
        steps: i64,
    },
    /// The velocity reading changed.
    VelocityChanged {
        /// New velocity in steps per second
        value: f64,
    },
    /// The current draw reading changed.
    CurrentChanged {
        /// New current draw in amps
        amps: f64,
    },
}

/// Log a drained event at a severity matching its weight.
pub fn log_event(event: &DriverEvent) {
    match event {
        DriverEvent::Attached { serial } => info!("stepper {} attached", serial),
        DriverEvent::Detached { serial } => warn!("stepper {} detached", serial),
        DriverEvent::Fault { code, message } => {
            warn!("driver fault {}: {}", code, message)
        }
        DriverEvent::InputChanged { index, state } => {
            debug!("input {} changed to {}", index, state)
        }
        DriverEvent::PositionChanged { steps } => trace!("position now {}", steps),
        DriverEvent::VelocityChanged { value } => trace!("velocity now {}", value),
        DriverEvent::CurrentChanged { amps } => trace!("current draw now {}", amps),
    }
}
