//! Error type for ass-qc operations
//!
//! Malformed subtitle content is never an error here: it is what the checks
//! report as violations. `QcError` only covers caller mistakes such as a
//! configuration naming a check that does not exist.

use thiserror::Error;

/// Main error type for ass-qc operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QcError {
    /// Configuration references a check id that is not registered
    #[error("Unknown check: {0}")]
    UnknownCheck(String),

    /// Event index outside the list
    #[error("Event index {index} out of range (list has {len} events)")]
    EventOutOfRange { index: usize, len: usize },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QcError {
    /// Create configuration error from message
    pub fn invalid_config<T: core::fmt::Display>(message: T) -> Self {
        Self::InvalidConfig(message.to_string())
    }

    /// Suggestion for fixing the error, if one applies
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCheck(_) => Some(
                "Valid ids: durations, punctuation, ass-tags, double-words, line-continuation",
            ),
            Self::EventOutOfRange { .. } => None,
            Self::InvalidConfig(_) => Some("Thresholds must be positive and short <= long"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, QcError>;
