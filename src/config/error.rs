//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("aperture.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("aperture.toml"));

        let validation_err = ConfigError::Validation("posts_per_page must be at least 1".into());
        let display = format!("{validation_err}");
        assert!(display.contains("posts_per_page must be at least 1"));
    }

    #[test]
    fn test_config_error_from_toml() {
        let bad = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: ConfigError = bad.into();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
