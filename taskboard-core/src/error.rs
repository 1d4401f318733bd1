/// Structured error types for taskboard-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// Everything here is fatal at startup: a missing or unusable
/// configuration value means no database handle can be produced.

use thiserror::Error;

/// Main error type for taskboard-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Required configuration variable is not set
    #[error("Missing required configuration variable '{name}'")]
    MissingVar { name: &'static str },

    /// Configuration variable is set but empty
    #[error("Configuration variable '{name}' is empty")]
    EmptyVar { name: &'static str },

    /// Port value does not parse as a TCP port
    #[error("Invalid port '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Result type alias for taskboard-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a missing variable error
    pub fn missing_var(name: &'static str) -> Self {
        Self::MissingVar { name }
    }

    /// Create an empty variable error
    pub fn empty_var(name: &'static str) -> Self {
        Self::EmptyVar { name }
    }

    /// Create an invalid port error
    pub fn invalid_port(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPort {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
