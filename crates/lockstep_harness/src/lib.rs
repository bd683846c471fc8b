//! Cycle-accurate equivalence testing between a reference and a candidate.
//!
//! The harness drives two [`StepDevice`](lockstep_model::StepDevice)s with
//! identical stimulus, one step at a time, and demands bit-exact agreement
//! of every output at every step. Divergence stops the run immediately with
//! full repro context (step index, stimulus, both outputs); agreement over
//! the whole run produces a [`RunReport`] with an optional per-step trace.
//!
//! # Modules
//!
//! - `error` — Harness error types
//! - `harness` — The equivalence harness and run reports
//! - `stimulus` — Lazy, finite stimulus sources

#![warn(missing_docs)]

pub mod error;
pub mod harness;
pub mod stimulus;

pub use error::HarnessError;
pub use harness::{EquivalenceHarness, RunReport, TraceRow};
pub use stimulus::{RandomStimulus, SliceStimulus, StimulusSource};
