//! Error handling for strutil
//!
//! The conversion, case-mapping and hex operations are total and never fail.
//! This crate only backs the opt-in checked APIs (`try_from_text`), options
//! loading and the command line tool.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ErrorInfo - serializable error report
// ============================================================================

/// Serializable error information (used for `--json` output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code, e.g. `PARSE_ERROR`
    pub code: String,
    /// Error message
    pub message: String,
    /// Offending input text, when the error is about input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Detailed error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInfo {
    /// Create a new ErrorInfo with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: "UNKNOWN_ERROR".to_string(),
            message: message.into(),
            input: None,
            details: None,
        }
    }

    /// Set the error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Attach the offending input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Add details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ============================================================================
// StrUtilError - Main error type
// ============================================================================

/// Main error type for strutil
#[derive(Debug, Error)]
pub enum StrUtilError {
    // ======================================
    // Input Errors
    // ======================================
    #[error("Parse error: {input:?} has no valid {target} prefix")]
    Parse { input: String, target: &'static str },

    #[error("Out of range: {input:?} does not fit in {target}")]
    OutOfRange { input: String, target: &'static str },

    // ======================================
    // Configuration Errors
    // ======================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    // ======================================
    // File & I/O Errors
    // ======================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ======================================
    // Catch-all for other errors
    // ======================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StrUtilError
pub type StrUtilResult<T> = Result<T, StrUtilError>;

/// Error category - used for exit codes and log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Internal,
}

impl StrUtilError {
    pub fn parse(input: impl Into<String>, target: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            target,
        }
    }

    pub fn out_of_range(input: impl Into<String>, target: &'static str) -> Self {
        Self::OutOfRange {
            input: input.into(),
            target,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get error code (for logs and `--json` output)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "PARSE_ERROR",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Other(_) => "OTHER_ERROR",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse { .. } | Self::OutOfRange { .. } => ErrorCategory::Input,
            Self::Configuration(_) | Self::InvalidConfig { .. } => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Io,
            Self::Serialization(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Process exit status for the command line tool (sysexits-style)
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 65,
            ErrorCategory::Configuration => 78,
            ErrorCategory::Io => 74,
            ErrorCategory::Internal => 70,
        }
    }

    /// Get log level
    pub fn log_level(&self) -> tracing::Level {
        match self.category() {
            ErrorCategory::Input => tracing::Level::INFO,
            ErrorCategory::Configuration | ErrorCategory::Io => tracing::Level::WARN,
            ErrorCategory::Internal => tracing::Level::ERROR,
        }
    }

    /// Convert to a serializable ErrorInfo
    pub fn to_error_info(&self) -> ErrorInfo {
        let mut error_info = ErrorInfo::new(self.to_string()).with_code(self.error_code());

        match self {
            Self::Parse { input, target } | Self::OutOfRange { input, target } => {
                error_info = error_info
                    .with_input(input.clone())
                    .with_details(format!("target type: {}", target));
            },
            Self::InvalidConfig { field, reason } => {
                error_info = error_info.with_details(format!("{}: {}", field, reason));
            },
            _ => {},
        }

        error_info
    }
}

impl From<serde_json::Error> for StrUtilError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// Helper macros for creating errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::StrUtilError::Configuration($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::StrUtilError::Configuration(format!($fmt, $($arg)*))
    };
}

// Tests
#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StrUtilError::parse("abc", "i32").error_code(), "PARSE_ERROR");
        assert_eq!(
            StrUtilError::out_of_range("300", "u8").error_code(),
            "OUT_OF_RANGE"
        );
        assert_eq!(
            StrUtilError::config("bad file").error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(StrUtilError::parse("abc", "i32").exit_code(), 65);
        assert_eq!(
            StrUtilError::invalid_config("precision", "too large").exit_code(),
            78
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(StrUtilError::from(io).exit_code(), 74);
    }

    #[test]
    fn test_error_display() {
        let err = StrUtilError::parse("abc", "i32");
        assert_eq!(err.to_string(), "Parse error: \"abc\" has no valid i32 prefix");
    }

    #[test]
    fn test_error_info() {
        let info = StrUtilError::out_of_range("300", "u8").to_error_info();
        assert_eq!(info.code, "OUT_OF_RANGE");
        assert_eq!(info.input.as_deref(), Some("300"));
        assert_eq!(info.details.as_deref(), Some("target type: u8"));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["code"], "OUT_OF_RANGE");
    }

    #[test]
    fn test_config_error_macro() {
        let err = config_error!("unsupported extension: {}", "ini");
        assert_eq!(
            err.to_string(),
            "Configuration error: unsupported extension: ini"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
