//! The equivalence harness: drive two devices in lockstep, compare every step.

use std::fmt;

use lockstep_model::StepDevice;
use serde::Serialize;

use crate::error::HarnessError;
use crate::stimulus::StimulusSource;

/// One recorded step of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRow<I, O> {
    /// The step index.
    pub step: usize,
    /// The stimulus applied at this step.
    pub stimulus: I,
    /// The (agreed) output observed at this step.
    pub output: O,
}

/// The result of a completed equivalence run with no mismatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport<I, O> {
    /// The number of steps executed.
    pub steps_run: usize,
    /// Per-step trace rows; empty when trace capture is disabled.
    pub trace: Vec<TraceRow<I, O>>,
}

/// Drives a reference and a candidate device with identical stimulus and
/// compares their outputs for exact equality at every step.
///
/// Both devices must expose the same step contract (input and output
/// types); the harness applies each stimulus to the reference first, then
/// the candidate, in strictly increasing step order, single-threaded. The
/// first divergence stops the run.
#[derive(Debug)]
pub struct EquivalenceHarness<R, C> {
    reference: R,
    candidate: C,
    capture_trace: bool,
}

impl<R, C, I, O> EquivalenceHarness<R, C>
where
    R: StepDevice<Input = I, Output = O>,
    C: StepDevice<Input = I, Output = O>,
    I: fmt::Debug,
    O: PartialEq + fmt::Debug,
{
    /// Creates a harness over independently constructed reference and
    /// candidate devices.
    pub fn new(reference: R, candidate: C) -> Self {
        Self {
            reference,
            candidate,
            capture_trace: true,
        }
    }

    /// Enables or disables per-step trace capture (enabled by default).
    ///
    /// With capture disabled, [`RunReport::trace`] stays empty and only the
    /// step count is recorded; useful for long runs.
    pub fn capture_trace(mut self, capture: bool) -> Self {
        self.capture_trace = capture;
        self
    }

    /// Runs `steps` lockstep cycles, drawing each stimulus from `stimulus`.
    ///
    /// Stops at the first diverging step with
    /// [`HarnessError::Mismatch`] carrying the step index, the stimulus, and
    /// both outputs. Fails with [`HarnessError::StimulusExhausted`] if the
    /// source runs dry early. On full agreement returns a [`RunReport`].
    pub fn run<S>(
        &mut self,
        stimulus: &mut S,
        steps: usize,
    ) -> Result<RunReport<I, O>, HarnessError>
    where
        S: StimulusSource<Item = I>,
    {
        let mut trace = Vec::new();
        for step in 0..steps {
            let input = stimulus
                .next_stimulus()
                .ok_or(HarnessError::StimulusExhausted {
                    step,
                    requested: steps,
                })?;
            let reference = self.reference.step(&input);
            let candidate = self.candidate.step(&input);
            if reference != candidate {
                return Err(HarnessError::Mismatch {
                    step,
                    stimulus: format!("{input:?}"),
                    reference: format!("{reference:?}"),
                    candidate: format!("{candidate:?}"),
                });
            }
            if self.capture_trace {
                trace.push(TraceRow {
                    step,
                    stimulus: input,
                    output: reference,
                });
            }
        }
        Ok(RunReport {
            steps_run: steps,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stimulus::SliceStimulus;

    /// Doubles its input; used as a trivially correct reference.
    struct Doubler;

    impl StepDevice for Doubler {
        type Input = i64;
        type Output = i64;

        fn step(&mut self, input: &i64) -> i64 {
            input * 2
        }
    }

    /// Doubles its input until a threshold, then drifts by one.
    struct DriftingDoubler {
        threshold: i64,
    }

    impl StepDevice for DriftingDoubler {
        type Input = i64;
        type Output = i64;

        fn step(&mut self, input: &i64) -> i64 {
            if *input >= self.threshold {
                input * 2 + 1
            } else {
                input * 2
            }
        }
    }

    #[test]
    fn equivalent_devices_pass() {
        let mut harness = EquivalenceHarness::new(Doubler, Doubler);
        let mut stimulus = SliceStimulus::new(vec![1, 2, 3, 4]);
        let report = harness.run(&mut stimulus, 4).unwrap();
        assert_eq!(report.steps_run, 4);
        assert_eq!(report.trace.len(), 4);
        assert_eq!(report.trace[2].step, 2);
        assert_eq!(report.trace[2].stimulus, 3);
        assert_eq!(report.trace[2].output, 6);
    }

    #[test]
    fn mismatch_reported_at_first_diverging_step() {
        let mut harness = EquivalenceHarness::new(Doubler, DriftingDoubler { threshold: 3 });
        let mut stimulus = SliceStimulus::new(vec![1, 2, 3, 4]);
        let err = harness.run(&mut stimulus, 4).unwrap_err();
        assert_eq!(
            err,
            HarnessError::Mismatch {
                step: 2,
                stimulus: "3".to_string(),
                reference: "6".to_string(),
                candidate: "7".to_string(),
            }
        );
    }

    #[test]
    fn exhausted_stimulus_reported() {
        let mut harness = EquivalenceHarness::new(Doubler, Doubler);
        let mut stimulus = SliceStimulus::new(vec![1, 2]);
        let err = harness.run(&mut stimulus, 5).unwrap_err();
        assert_eq!(
            err,
            HarnessError::StimulusExhausted {
                step: 2,
                requested: 5,
            }
        );
    }

    #[test]
    fn trace_capture_can_be_disabled() {
        let mut harness = EquivalenceHarness::new(Doubler, Doubler).capture_trace(false);
        let mut stimulus = SliceStimulus::new(vec![5; 10]);
        let report = harness.run(&mut stimulus, 10).unwrap();
        assert_eq!(report.steps_run, 10);
        assert!(report.trace.is_empty());
    }

    #[test]
    fn zero_steps_is_a_pass() {
        let mut harness = EquivalenceHarness::new(Doubler, DriftingDoubler { threshold: 0 });
        let mut stimulus = SliceStimulus::new(Vec::new());
        let report = harness.run(&mut stimulus, 0).unwrap();
        assert_eq!(report.steps_run, 0);
    }
}
