//! `lockstep trace` — print the golden model's per-step trace.
//!
//! Runs the scenario's golden filter alone over the scenario's stimulus and
//! prints one row per step. Useful for inspecting what the reference
//! considers correct before debugging a diverging candidate.

use lockstep_harness::StimulusSource;
use lockstep_model::StreamingFirFilter;

use crate::scenario::{build_stimulus, resolve_scenario};
use crate::{GlobalArgs, TraceArgs};

/// Runs the `lockstep trace` command.
pub fn run(args: &TraceArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    // Step 1: Load and validate the scenario
    let config = resolve_scenario(args.scenario.as_deref())?;

    if !global.quiet {
        eprintln!(
            "   Tracing {} ({} taps, golden model)",
            config.scenario.name,
            config.filter.taps.len(),
        );
    }

    // Step 2: Run the golden model over the stimulus
    let mut golden = StreamingFirFilter::new(config.filter.taps.clone())?;
    let mut stimulus = build_stimulus(&config);
    let limit = args.limit.unwrap_or(config.scenario.steps);

    if !global.quiet {
        println!("{:>6}  {:>10}  {:>14}", "step", "stimulus", "output");
    }
    for step in 0..config.scenario.steps.min(limit) {
        let Some(sample) = stimulus.next_stimulus() else {
            if !global.quiet {
                eprintln!("warning: stimulus ran dry after {step} steps");
            }
            break;
        };
        let output = golden.step(sample);
        println!("{step:>6}  {sample:>10}  {output:>14}");
    }

    Ok(0)
}
