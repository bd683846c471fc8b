//! Parsing and validation of `lockstep.toml` scenario files.
//!
//! A scenario file describes one equivalence comparison: the filter under
//! test (taps, datapath width, candidate form), the stimulus to drive it
//! with, and how many steps to run. This crate reads the file and produces
//! a strongly-typed, validated [`ScenarioConfig`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_scenario, load_scenario_from_str};
pub use types::*;
