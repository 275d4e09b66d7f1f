//! Configuration errors.

use thiserror::Error;

/// Error returned when resolution options or breakpoint tables fail to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("invalid JSON configuration"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_yaml_error_display() {
        let source = serde_yaml::from_str::<u32>("[1").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("invalid YAML configuration"));
    }
}
