//! Harness error types.
//!
//! A mismatch is not retried: it signals a correctness defect in the
//! candidate (or in the test setup) and carries the full repro context in
//! its message. Stimulus exhaustion means the source ran dry before the
//! requested number of steps; sources are finite and not restartable.

use serde::Serialize;

/// Errors produced by an equivalence run.
///
/// Stimulus and output values are carried as their `Debug` renderings so
/// the error stays a plain value regardless of the device types under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum HarnessError {
    /// The reference and candidate outputs diverged.
    #[error(
        "mismatch at step {step}: stimulus {stimulus}, reference produced {reference}, \
         candidate produced {candidate}"
    )]
    Mismatch {
        /// The step index at which the outputs first diverged.
        step: usize,
        /// The stimulus applied at the diverging step.
        stimulus: String,
        /// The reference device's output.
        reference: String,
        /// The candidate device's output.
        candidate: String,
    },

    /// The stimulus source ran dry before the requested number of steps.
    #[error("stimulus exhausted at step {step} ({requested} steps requested)")]
    StimulusExhausted {
        /// The first step for which no stimulus was available.
        step: usize,
        /// The number of steps the run was asked for.
        requested: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_display() {
        let e = HarnessError::Mismatch {
            step: 3,
            stimulus: "7".to_string(),
            reference: "200".to_string(),
            candidate: "-56".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "mismatch at step 3: stimulus 7, reference produced 200, candidate produced -56"
        );
    }

    #[test]
    fn stimulus_exhausted_display() {
        let e = HarnessError::StimulusExhausted {
            step: 4,
            requested: 10,
        };
        assert_eq!(
            e.to_string(),
            "stimulus exhausted at step 4 (10 steps requested)"
        );
    }
}
