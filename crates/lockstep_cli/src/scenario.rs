//! Shared helpers for turning a scenario file into devices and stimulus.

use std::path::Path;

use lockstep_config::{load_scenario, CandidateForm, ConfigError, ScenarioConfig, StimulusKind};
use lockstep_harness::{RandomStimulus, SliceStimulus, StimulusSource};

/// Loads the scenario named on the command line, defaulting to the current
/// directory's `lockstep.toml`.
pub fn resolve_scenario(path_arg: Option<&str>) -> Result<ScenarioConfig, ConfigError> {
    let path = path_arg.unwrap_or(".");
    load_scenario(Path::new(path))
}

/// A stimulus source built from a scenario's `[stimulus]` table.
pub enum ScenarioStimulus {
    /// Explicit samples from the scenario file.
    Samples(SliceStimulus<i64>),
    /// Seeded random samples.
    Random(RandomStimulus),
}

impl StimulusSource for ScenarioStimulus {
    type Item = i64;

    fn next_stimulus(&mut self) -> Option<i64> {
        match self {
            Self::Samples(source) => source.next_stimulus(),
            Self::Random(source) => source.next_stimulus(),
        }
    }
}

/// Builds the stimulus source a scenario describes.
pub fn build_stimulus(config: &ScenarioConfig) -> ScenarioStimulus {
    match config.stimulus.kind {
        StimulusKind::Samples => {
            ScenarioStimulus::Samples(SliceStimulus::new(config.stimulus.samples.clone()))
        }
        StimulusKind::Random => ScenarioStimulus::Random(RandomStimulus::new(
            config.stimulus.count,
            config.stimulus.seed,
            config.stimulus.magnitude,
        )),
    }
}

/// Returns the scenario-file spelling of a candidate form.
pub fn candidate_label(form: CandidateForm) -> &'static str {
    match form {
        CandidateForm::Direct => "direct",
        CandidateForm::Transposed => "transposed",
    }
}
