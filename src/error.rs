//! Error types for the foil-stage library.
//!
//! Provides unified error handling across configuration, the device boundary,
//! and stage operations. Stage errors never cross the [`MotorStage`]
//! boundary as raised faults; they are recorded and degraded to
//! [`Outcome`]/boolean results there, and are only surfaced through
//! `last_error()`.
//!
//! [`MotorStage`]: crate::stage::MotorStage
//! [`Outcome`]: crate::stage::Outcome

use std::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all foil-stage operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Device driver error
    Driver(DriverError),
    /// Stage operation error
    Stage(StageError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(String),
    /// File I/O error
    IoError(String),
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration(f64),
    /// Invalid velocity limit (must be > 0)
    InvalidVelocityLimit(f64),
    /// Invalid current limit (must be > 0)
    InvalidCurrentLimit(f64),
    /// Invalid sweep range (guard must satisfy 0 < guard < target)
    InvalidSweepRange {
        /// Commanded sweep target in steps
        target: i64,
        /// Loop-termination guard in steps
        guard: i64,
    },
    /// Invalid overrun margin (must be > 0)
    InvalidOverrun(i64),
    /// Invalid centering bias (must be >= 0)
    InvalidCenterBias(i64),
    /// A timeout was configured as zero
    ZeroTimeout(&'static str),
    /// Foil position outside the travel range
    FoilOutOfRange {
        /// Foil name from the configuration
        name: String,
        /// Configured step position
        position: i64,
        /// Maximum allowed position (sweep guard)
        max: i64,
    },
}

/// Errors reported by the device driver boundary.
///
/// These originate below the stage and are always caught, logged, and
/// converted to a failed/unattempted result by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// The device is not attached
    NotAttached,
    /// The driver rejected a command
    Rejected {
        /// Driver-specific error code
        code: i32,
        /// Driver-supplied description
        message: String,
    },
    /// Transport-level failure talking to the device
    Io(String),
}

/// Stage operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
    /// The axis never reached a usable state during construction
    NotInitialized,
    /// Coordinate arity does not match the stage's dimensions
    DimensionMismatch {
        /// Dimensions the stage was constructed with
        expected: usize,
        /// Length of the supplied coordinate slice
        got: usize,
    },
    /// A bounded poll loop gave up before the position converged
    Timeout {
        /// Target position in steps
        target: i64,
        /// Total wait budget that elapsed, in milliseconds
        waited_ms: u64,
    },
    /// The stage converged but a final verification read disagreed
    PositionNotHeld {
        /// Target position in steps
        target: i64,
        /// Position the verification read returned
        actual: i64,
    },
    /// Homing completed without verifying the home switch
    HomeNotFound,
    /// Requested acceleration outside the device-reported range
    AccelerationOutOfRange {
        /// Requested value
        requested: f64,
        /// Device-reported minimum
        min: f64,
        /// Device-reported maximum
        max: f64,
    },
    /// A device command failed underneath the operation
    Driver(DriverError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
            Error::Stage(e) => write!(f, "Stage error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidVelocityLimit(v) => {
                write!(f, "Invalid velocity limit: {}. Must be > 0", v)
            }
            ConfigError::InvalidCurrentLimit(v) => {
                write!(f, "Invalid current limit: {}. Must be > 0", v)
            }
            ConfigError::InvalidSweepRange { target, guard } => {
                write!(
                    f,
                    "Invalid sweep range: guard {} must satisfy 0 < guard < target {}",
                    guard, target
                )
            }
            ConfigError::InvalidOverrun(v) => {
                write!(f, "Invalid overrun margin: {}. Must be > 0", v)
            }
            ConfigError::InvalidCenterBias(v) => {
                write!(f, "Invalid center bias: {}. Must be >= 0", v)
            }
            ConfigError::ZeroTimeout(which) => {
                write!(f, "Timeout '{}' must be nonzero", which)
            }
            ConfigError::FoilOutOfRange {
                name,
                position,
                max,
            } => {
                write!(
                    f,
                    "Foil '{}' at {} steps is outside the travel range [0, {}]",
                    name, position, max
                )
            }
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::NotAttached => write!(f, "Device not attached"),
            DriverError::Rejected { code, message } => {
                write!(f, "Driver rejected command ({}): {}", code, message)
            }
            DriverError::Io(msg) => write!(f, "Device I/O failure: {}", msg),
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::NotInitialized => write!(f, "Axis never initialized"),
            StageError::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Coordinate arity mismatch: stage has {} dimension(s), got {}",
                    expected, got
                )
            }
            StageError::Timeout { target, waited_ms } => {
                write!(
                    f,
                    "Timed out after {} ms waiting for position {}",
                    waited_ms, target
                )
            }
            StageError::PositionNotHeld { target, actual } => {
                write!(
                    f,
                    "Position not held: commanded {}, verification read {}",
                    target, actual
                )
            }
            StageError::HomeNotFound => write!(f, "Cannot find home position"),
            StageError::AccelerationOutOfRange {
                requested,
                min,
                max,
            } => {
                write!(
                    f,
                    "Acceleration {} outside device range [{}, {}]",
                    requested, min, max
                )
            }
            StageError::Driver(e) => write!(f, "Device command failed: {}", e),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

impl From<StageError> for Error {
    fn from(e: StageError) -> Self {
        Error::Stage(e)
    }
}

impl From<DriverError> for StageError {
    fn from(e: DriverError) -> Self {
        StageError::Driver(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}

impl std::error::Error for DriverError {}

impl std::error::Error for StageError {}
