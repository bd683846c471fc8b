//! The synchronous step contract shared by all devices under test.

use std::fmt;

/// A synchronous device that advances one clock cycle per [`step`] call.
///
/// A step consumes one input vector and produces one output vector; it has no
/// observable effect beyond the returned output and the device's own state
/// mutation. All devices in a comparison advance together, one step at a
/// time, and no device may observe another's in-progress state.
///
/// Both golden models and RTL-style candidates implement this trait, which is
/// what lets the equivalence harness drive either side of a comparison
/// without knowing which one is the reference.
///
/// [`step`]: StepDevice::step
pub trait StepDevice {
    /// The per-step input vector.
    type Input;
    /// The per-step output vector, compared for exact equality by the harness.
    type Output: PartialEq + fmt::Debug;

    /// Advances the device by one clock cycle.
    fn step(&mut self, input: &Self::Input) -> Self::Output;
}
