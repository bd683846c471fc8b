//! Error types for scenario loading and validation.

/// Errors that can occur when loading or validating a `lockstep.toml`
/// scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the scenario file.
    #[error("failed to read scenario: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse scenario: {0}")]
    ParseError(String),

    /// A required field is missing from the scenario.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A scenario value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse scenario: expected '=' at line 3"
        );
    }

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("stimulus.samples".to_string());
        assert_eq!(format!("{err}"), "missing required field: stimulus.samples");
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("filter.width must be 1..=64".to_string());
        assert_eq!(
            format!("{err}"),
            "validation error: filter.width must be 1..=64"
        );
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read scenario:"));
    }
}
