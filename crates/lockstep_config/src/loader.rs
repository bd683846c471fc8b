//! Scenario file loading and validation.

use crate::error::ConfigError;
use crate::types::{ScenarioConfig, StimulusKind};
use std::path::Path;

/// The scenario file name looked up when a directory is given.
pub const SCENARIO_FILE_NAME: &str = "lockstep.toml";

/// Loads and validates a scenario from a file or directory path.
///
/// A directory path is resolved to `<dir>/lockstep.toml`.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let scenario_path = if path.is_dir() {
        path.join(SCENARIO_FILE_NAME)
    } else {
        path.to_path_buf()
    };
    let content = std::fs::read_to_string(&scenario_path)?;
    load_scenario_from_str(&content)
}

/// Parses and validates a scenario from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_scenario_from_str(content: &str) -> Result<ScenarioConfig, ConfigError> {
    let config: ScenarioConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_scenario(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are consistent.
fn validate_scenario(config: &ScenarioConfig) -> Result<(), ConfigError> {
    if config.scenario.name.is_empty() {
        return Err(ConfigError::MissingField("scenario.name".to_string()));
    }
    if config.scenario.steps == 0 {
        return Err(ConfigError::ValidationError(
            "scenario.steps must be positive".to_string(),
        ));
    }
    if config.filter.taps.is_empty() {
        return Err(ConfigError::ValidationError(
            "filter.taps must not be empty".to_string(),
        ));
    }
    if !(1..=64).contains(&config.filter.width) {
        return Err(ConfigError::ValidationError(
            "filter.width must be 1..=64".to_string(),
        ));
    }
    match config.stimulus.kind {
        StimulusKind::Random => {
            if config.stimulus.count == 0 {
                return Err(ConfigError::ValidationError(
                    "stimulus.count must be positive for random stimulus".to_string(),
                ));
            }
            if config.stimulus.magnitude < 0 {
                return Err(ConfigError::ValidationError(
                    "stimulus.magnitude must not be negative".to_string(),
                ));
            }
        }
        StimulusKind::Samples => {
            if config.stimulus.samples.is_empty() {
                return Err(ConfigError::MissingField("stimulus.samples".to_string()));
            }
        }
    }
    Ok(())
}
