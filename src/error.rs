//! Structured error types for configuration loading and lookup.

use serde::Serialize;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    SourceUnreadable,
    MalformedDocument,
    TaskNotFound,
    InvalidPattern,
}

/// Errors raised while loading or querying a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document source could not be read. The underlying I/O error is
    /// passed through untouched.
    #[error(transparent)]
    SourceUnreadable(#[from] std::io::Error),

    /// The document is not valid YAML or does not match the schema.
    #[error("failed to parse config document: {0}")]
    MalformedDocument(#[from] serde_yaml::Error),

    #[error("can't find task '{name}' in configuration")]
    TaskNotFound { name: String },

    /// A `aws_dimensions_select_regex` entry does not compile.
    #[error("invalid pattern for dimension '{dimension}': {pattern}: {reason}")]
    InvalidPattern {
        dimension: String,
        pattern: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn task_not_found(name: &str) -> Self {
        Self::TaskNotFound {
            name: name.to_string(),
        }
    }

    pub fn invalid_pattern(dimension: &str, pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            dimension: dimension.to_string(),
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::SourceUnreadable(_) => ErrorCode::SourceUnreadable,
            ConfigError::MalformedDocument(_) => ErrorCode::MalformedDocument,
            ConfigError::TaskNotFound { .. } => ErrorCode::TaskNotFound,
            ConfigError::InvalidPattern { .. } => ErrorCode::InvalidPattern,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_names_the_task() {
        let err = ConfigError::task_not_found("nonexistent");
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
        assert_eq!(
            err.to_string(),
            "can't find task 'nonexistent' in configuration"
        );
    }

    #[test]
    fn test_io_error_message_is_passed_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = ConfigError::from(io);
        assert_eq!(err.code(), ErrorCode::SourceUnreadable);
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::MalformedDocument).unwrap();
        assert_eq!(json, "\"MALFORMED_DOCUMENT\"");
    }
}
