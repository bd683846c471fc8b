//! Golden software models for lockstep equivalence testing.
//!
//! This crate defines the step contract shared by every device under test
//! ([`StepDevice`]) and the reference ("golden") models whose outputs are
//! treated as ground truth: a streaming FIR filter with unbounded integer
//! accumulation and an indexed register file with a hard-wired zero register.
//!
//! # Modules
//!
//! - `device` — The [`StepDevice`] trait: one call is one clock cycle
//! - `error` — Construction and access error types
//! - `fir` — The golden streaming FIR filter
//! - `regfile` — The indexed register file

#![warn(missing_docs)]

pub mod device;
pub mod error;
pub mod fir;
pub mod regfile;

pub use device::StepDevice;
pub use error::ModelError;
pub use fir::StreamingFirFilter;
pub use regfile::{IndexedRegisterFile, RegFileInput, WriteCommand, REGISTER_COUNT};
