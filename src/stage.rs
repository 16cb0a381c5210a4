//! The motor stage capability contract.
//!
//! Any linear or rotary positioning device the apparatus can mount must
//! satisfy [`MotorStage`]; the contract carries no hardware knowledge.

/// Result of a stage operation that may not have been attempted at all.
///
/// Distinguishes "the device was not open, nothing was commanded"
/// ([`Unattempted`]) from "the operation ran and did not converge"
/// ([`Failed`]). Callers that only care about success can use
/// [`is_completed`].
///
/// [`Unattempted`]: Outcome::Unattempted
/// [`Failed`]: Outcome::Failed
/// [`is_completed`]: Outcome::is_completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran and the stage verified the requested result.
    Completed,
    /// The operation ran but did not reach the requested result, or the
    /// input was invalid.
    Failed,
    /// The device was not open; no command was issued.
    Unattempted,
}

impl Outcome {
    /// Whether the operation verifiably completed.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// Tri-state view: `Some(true)` completed, `Some(false)` failed,
    /// `None` unattempted.
    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Outcome::Completed => Some(true),
            Outcome::Failed => Some(false),
            Outcome::Unattempted => None,
        }
    }
}

/// Capability set of a positioning stage.
///
/// A stage accepts targets as a slice of exactly [`dimensions`] step
/// coordinates. Motion calls are synchronous: they return only once the
/// stage has verified arrival by re-reading its position, or given up.
/// Implementations must never let a device-layer fault escape these
/// methods; faults degrade to [`Outcome::Failed`], [`Outcome::Unattempted`],
/// or `false`.
///
/// [`dimensions`]: MotorStage::dimensions
pub trait MotorStage {
    /// Number of independent coordinates the stage accepts. Fixed at
    /// construction.
    fn dimensions(&self) -> usize;

    /// Whether the device is attached and initialization succeeded.
    /// Must not fail; device faults read as `false`.
    fn is_open(&self) -> bool;

    /// Whether the device answers. Stages without a cheaper liveness probe
    /// report openness.
    fn test_communication(&mut self) -> bool {
        self.is_open()
    }

    /// Move to an absolute position and block until it is verifiably
    /// reached.
    ///
    /// Returns [`Outcome::Unattempted`] when the device is not open and
    /// [`Outcome::Failed`] when `coords` has the wrong arity (without
    /// touching hardware) or the position was not reached.
    fn move_absolute(&mut self, coords: &[i64]) -> Outcome;

    /// Move relative to the current position and block until the target is
    /// verifiably reached.
    ///
    /// The supplied coordinates are read-only; the absolute target is
    /// computed internally.
    fn move_relative(&mut self, coords: &[i64]) -> Outcome;

    /// Set the stage acceleration.
    ///
    /// Values outside the device-reported range return
    /// [`Outcome::Failed`] and leave the configured acceleration unchanged.
    fn set_acceleration(&mut self, value: f64) -> Outcome;

    /// Establish the absolute zero reference. Blocks until the home
    /// position is verified or the attempt is abandoned.
    ///
    /// On `false`, the position register is left uncorrected and step 0 is
    /// not physically meaningful.
    fn home(&mut self) -> bool;

    /// Return the stage to a known state. Semantically a re-run of
    /// [`home`].
    ///
    /// [`home`]: MotorStage::home
    fn reset(&mut self) -> bool {
        self.home()
    }
}
