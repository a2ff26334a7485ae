//! Error types and exit codes for roster
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (duplicate id, missing student)

mod macros;

use thiserror::Error;

/// Exit codes for the roster binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - duplicate id, student not found (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RosterError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RosterError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RosterError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        RosterError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RosterError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Shorthand for a missing student id
    pub fn student_not_found(id: &str) -> Self {
        Self::not_found("student", id)
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RosterError::UnknownFormat(_)
            | RosterError::UsageError(_)
            | RosterError::InvalidValue { .. } => ExitCode::Usage,

            RosterError::AlreadyExists { .. } | RosterError::NotFound { .. } => ExitCode::Data,

            RosterError::Io(_)
            | RosterError::Json(_)
            | RosterError::Toml(_)
            | RosterError::FailedOperationWithTarget { .. }
            | RosterError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RosterError::UnknownFormat(_) => "unknown_format",
            RosterError::UsageError(_) => "usage_error",
            RosterError::InvalidValue { .. } => "invalid_value",
            RosterError::AlreadyExists { .. } => "already_exists",
            RosterError::NotFound { .. } => "not_found",
            RosterError::Io(_) => "io_error",
            RosterError::Json(_) => "json_error",
            RosterError::Toml(_) => "toml_error",
            RosterError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RosterError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
