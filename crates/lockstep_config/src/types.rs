//! Scenario types deserialized from `lockstep.toml`.

use serde::Deserialize;

/// The top-level scenario configuration parsed from `lockstep.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario metadata (name, step count).
    pub scenario: ScenarioMeta,
    /// The filter under comparison.
    pub filter: FilterConfig,
    /// The stimulus to drive both devices with.
    pub stimulus: StimulusConfig,
}

/// Scenario metadata required in every `lockstep.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMeta {
    /// The scenario name, used in reports.
    pub name: String,
    /// A brief description of what the scenario exercises.
    #[serde(default)]
    pub description: String,
    /// The number of lockstep cycles to run.
    pub steps: usize,
}

/// The filter under comparison: golden reference vs. RTL-style candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Tap coefficients, applied newest sample first.
    pub taps: Vec<i64>,
    /// Candidate datapath width in bits.
    pub width: u32,
    /// Which RTL-style structure to use as the candidate.
    #[serde(default)]
    pub candidate: CandidateForm,
}

/// The RTL-style filter structure used as the candidate device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateForm {
    /// Direct form: a shifted sample register pipeline.
    #[default]
    Direct,
    /// Transposed form: a partial-sum register chain.
    Transposed,
}

/// How the stimulus sequence is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StimulusKind {
    /// Seeded uniform random samples.
    Random,
    /// An explicit sample list given in the scenario file.
    Samples,
}

/// The stimulus section of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct StimulusConfig {
    /// Which kind of source to build.
    pub kind: StimulusKind,
    /// Number of random samples to generate (random only).
    #[serde(default)]
    pub count: usize,
    /// Seed for the random generator (random only).
    #[serde(default)]
    pub seed: u64,
    /// Samples are drawn uniform in `[-magnitude, magnitude]` (random only).
    #[serde(default = "default_magnitude")]
    pub magnitude: i64,
    /// The explicit sample list (samples only).
    #[serde(default)]
    pub samples: Vec<i64>,
}

fn default_magnitude() -> i64 {
    1000
}
