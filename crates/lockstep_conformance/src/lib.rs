//! Conformance test helpers for the lockstep equivalence kit.
//!
//! Provides shared functions that construct golden/candidate device pairs,
//! drive them through the equivalence harness, and build scenario TOML
//! fixtures for assertion in integration tests.

#![warn(missing_docs)]

use lockstep_harness::{EquivalenceHarness, HarnessError, RunReport, SliceStimulus};
use lockstep_model::StreamingFirFilter;
use lockstep_rtl::{DirectFormFir, TransposedFormFir};

/// Runs the golden model against a direct-form candidate over `samples`.
pub fn golden_vs_direct(
    taps: &[i64],
    width: u32,
    samples: &[i64],
) -> Result<RunReport<i64, i64>, HarnessError> {
    let golden = StreamingFirFilter::new(taps.to_vec()).expect("test taps");
    let candidate = DirectFormFir::new(taps, width).expect("test candidate");
    let mut stimulus = SliceStimulus::new(samples.to_vec());
    EquivalenceHarness::new(golden, candidate).run(&mut stimulus, samples.len())
}

/// Runs the golden model against a transposed-form candidate over `samples`.
pub fn golden_vs_transposed(
    taps: &[i64],
    width: u32,
    samples: &[i64],
) -> Result<RunReport<i64, i64>, HarnessError> {
    let golden = StreamingFirFilter::new(taps.to_vec()).expect("test taps");
    let candidate = TransposedFormFir::new(taps, width).expect("test candidate");
    let mut stimulus = SliceStimulus::new(samples.to_vec());
    EquivalenceHarness::new(golden, candidate).run(&mut stimulus, samples.len())
}

/// Runs the two structurally different RTL forms against each other.
pub fn direct_vs_transposed(
    taps: &[i64],
    width: u32,
    samples: &[i64],
) -> Result<RunReport<i64, i64>, HarnessError> {
    let reference = DirectFormFir::new(taps, width).expect("test reference");
    let candidate = TransposedFormFir::new(taps, width).expect("test candidate");
    let mut stimulus = SliceStimulus::new(samples.to_vec());
    EquivalenceHarness::new(reference, candidate).run(&mut stimulus, samples.len())
}

/// Computes the golden model's output sequence for `samples`.
pub fn golden_outputs(taps: &[i64], samples: &[i64]) -> Vec<i64> {
    let mut golden = StreamingFirFilter::new(taps.to_vec()).expect("test taps");
    samples.iter().map(|&s| golden.step(s)).collect()
}

/// Builds a minimal samples-driven scenario TOML with the given fields.
pub fn scenario_toml(name: &str, taps: &[i64], width: u32, samples: &[i64]) -> String {
    format!(
        r#"
[scenario]
name = "{name}"
steps = {steps}

[filter]
taps = {taps:?}
width = {width}

[stimulus]
kind = "samples"
samples = {samples:?}
"#,
        steps = samples.len(),
    )
}
