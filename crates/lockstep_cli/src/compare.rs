//! `lockstep compare` — run a scenario's equivalence comparison.
//!
//! Loads the scenario, constructs the golden filter as reference and the
//! configured RTL-style form as candidate, drives both with the scenario's
//! stimulus, and renders a pass/fail report. Returns exit code 0 on
//! agreement, 1 on mismatch or stimulus exhaustion.

use serde::Serialize;

use lockstep_config::{CandidateForm, ScenarioConfig};
use lockstep_harness::{EquivalenceHarness, HarnessError, RunReport};
use lockstep_model::StreamingFirFilter;
use lockstep_rtl::{DirectFormFir, TransposedFormFir};

use crate::scenario::{build_stimulus, candidate_label, resolve_scenario};
use crate::{CompareArgs, GlobalArgs, ReportFormat};

/// The rendered outcome of a comparison, in JSON form.
#[derive(Serialize)]
struct CompareReport<'a> {
    /// The scenario name.
    scenario: &'a str,
    /// The candidate form compared against the golden model.
    candidate: &'a str,
    /// The candidate datapath width in bits.
    width: u32,
    /// The number of steps the scenario asked for.
    steps_requested: usize,
    /// Whether every step agreed.
    passed: bool,
    /// Steps completed (present on a pass).
    #[serde(skip_serializing_if = "Option::is_none")]
    steps_run: Option<usize>,
    /// The failure, if any (mismatch or stimulus exhaustion).
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a HarnessError>,
}

/// Runs the `lockstep compare` command.
pub fn run(args: &CompareArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    // Step 1: Load and validate the scenario
    let config = resolve_scenario(args.scenario.as_deref())?;

    if !global.quiet {
        eprintln!(
            "   Comparing {} ({} taps, width {}, {} candidate)",
            config.scenario.name,
            config.filter.taps.len(),
            config.filter.width,
            candidate_label(config.filter.candidate),
        );
    }

    // Step 2: Construct both devices and run the harness
    let outcome = run_equivalence(&config)?;

    // Step 3: Render the report
    let report = CompareReport {
        scenario: &config.scenario.name,
        candidate: candidate_label(config.filter.candidate),
        width: config.filter.width,
        steps_requested: config.scenario.steps,
        passed: outcome.is_ok(),
        steps_run: outcome.as_ref().ok().map(|r| r.steps_run),
        failure: outcome.as_ref().err(),
    };

    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => render_text(&config, &outcome, global),
    }

    Ok(if report.passed { 0 } else { 1 })
}

/// Builds the golden reference and the configured candidate, then runs the
/// harness over the scenario's stimulus.
fn run_equivalence(
    config: &ScenarioConfig,
) -> Result<Result<RunReport<i64, i64>, HarnessError>, Box<dyn std::error::Error>> {
    let golden = StreamingFirFilter::new(config.filter.taps.clone())?;
    let mut stimulus = build_stimulus(config);
    let steps = config.scenario.steps;

    let outcome = match config.filter.candidate {
        CandidateForm::Direct => {
            let candidate = DirectFormFir::new(&config.filter.taps, config.filter.width)?;
            EquivalenceHarness::new(golden, candidate).run(&mut stimulus, steps)
        }
        CandidateForm::Transposed => {
            let candidate = TransposedFormFir::new(&config.filter.taps, config.filter.width)?;
            EquivalenceHarness::new(golden, candidate).run(&mut stimulus, steps)
        }
    };
    Ok(outcome)
}

/// Renders the human-readable report.
fn render_text(
    config: &ScenarioConfig,
    outcome: &Result<RunReport<i64, i64>, HarnessError>,
    global: &GlobalArgs,
) {
    match outcome {
        Ok(report) => {
            if global.verbose {
                for row in &report.trace {
                    println!("{:>6}  in {:>8}  out {:>12}", row.step, row.stimulus, row.output);
                }
            }
            if !global.quiet {
                println!(
                    "PASS {}: {} steps, outputs agree",
                    config.scenario.name, report.steps_run
                );
            }
        }
        Err(failure) => {
            eprintln!("FAIL {}: {failure}", config.scenario.name);
        }
    }
}
