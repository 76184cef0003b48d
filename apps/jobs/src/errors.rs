use std::path::PathBuf;

use thiserror::Error;

/// A date string did not match the format it was read with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot parse '{input}' as {format}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub format: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(input: &str, format: impl Into<String>, reason: impl ToString) -> Self {
        ParseError {
            input: input.to_string(),
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}

/// The job repository could not produce its records.
#[derive(Debug, Error)]
pub enum DataUnavailableError {
    #[error("Cannot read job data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed job data in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application-level error type.
/// The binary funnels everything through this before reporting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Date parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] DataUnavailableError),
}

impl AppError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::DataUnavailable(_) => "DATA_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_input_and_format() {
        let err = ParseError::new("yesterday", "RFC 1123", "input contains invalid characters");
        assert_eq!(
            err.to_string(),
            "Cannot parse 'yesterday' as RFC 1123: input contains invalid characters"
        );
    }

    #[test]
    fn test_app_error_from_parse_error() {
        let err: AppError = ParseError::new("x", "ISO", "bad").into();
        assert_eq!(err.code(), "PARSE_ERROR");
        assert!(err.to_string().starts_with("Date parse error:"));
    }

    #[test]
    fn test_app_error_from_io_failure() {
        let err: AppError = DataUnavailableError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        }
        .into();
        assert_eq!(err.code(), "DATA_UNAVAILABLE");
        assert!(err.to_string().contains("missing.json"));
    }
}
