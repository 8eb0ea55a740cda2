//! Structured errors for sequence construction and access
//!
//! Errors are plain values. Construction validates eagerly and access checks
//! bounds per call; nothing in the sequence types panics on user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
}

/// Failure raised while building or indexing a sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Parameters cannot be reconciled into a sequence (e.g. negative count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Access beyond `[0, len)`
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Value outside the domain of a transform (e.g. log of zero)
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl SpaceError {
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::DomainError(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            Self::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            Self::DomainError(_) => codes::DOMAIN_ERROR,
        }
    }

    /// Hint for fixing the call, if there is an obvious one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidArgument(_) => {
                Some("Check that count is non-negative and step points from start towards stop".to_string())
            }
            Self::IndexOutOfRange { len: 0, .. } => Some("Sequence is empty".to_string()),
            Self::IndexOutOfRange { len, .. } => Some(format!("Use an index in 0..{}", len)),
            Self::DomainError(_) => Some("Use strictly positive endpoints".to_string()),
        }
    }

    /// Serializable report of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Structured error as reported to callers outside the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&SpaceError> for ErrorReport {
    fn from(err: &SpaceError) -> Self {
        let report = Self::new(err.code(), err.to_string());
        match err.suggestion() {
            Some(s) => report.with_suggestion(s),
            None => report,
        }
    }
}

impl From<SpaceError> for ErrorReport {
    fn from(err: SpaceError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

/// Result alias used throughout gspaces
pub type Result<T> = std::result::Result<T, SpaceError>;
