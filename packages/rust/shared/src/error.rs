//! Error types for job posting structured data.
//!
//! Library crates use [`JobPostingError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all job posting operations.
#[derive(Debug, thiserror::Error)]
pub enum JobPostingError {
    /// A required field was absent or empty when the document was built.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A field holds a value outside its allowed set.
    #[error("invalid value '{value}' for {field}: expected one of {allowed}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A job record could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (malformed URL, negative salary, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON serialization of the structured-data document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, JobPostingError>;

impl JobPostingError {
    /// Create a missing-field error for the given record field.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Create an invalid-enum error listing the accepted values.
    pub fn invalid_enum(field: &'static str, value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = JobPostingError::missing("datePosted");
        assert_eq!(err.to_string(), "missing required field: datePosted");

        let err = JobPostingError::invalid_enum("baseSalaryUnitText", "FORTNIGHT", &["HOUR", "DAY"]);
        assert_eq!(
            err.to_string(),
            "invalid value 'FORTNIGHT' for baseSalaryUnitText: expected one of HOUR, DAY"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: JobPostingError = source.into();
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
