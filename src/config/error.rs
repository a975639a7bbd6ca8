//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Server port must not be 0")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("CORS origin '{0}' is not a valid origin value")]
    InvalidCorsOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_have_readable_messages() {
        assert_eq!(
            ValidationError::InvalidPort.to_string(),
            "Server port must not be 0"
        );
        assert!(ValidationError::InvalidCorsOrigin("nope".into())
            .to_string()
            .contains("nope"));
    }
}
