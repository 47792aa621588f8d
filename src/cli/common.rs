//! Shared CLI error and exit-code handling.

use std::fmt;

use crate::error::LayoutError;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub kind: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Input validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LayoutError> for CliError {
    fn from(err: LayoutError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Serializes a value as JSON, pretty or compact.
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
    }

    #[test]
    fn test_layout_error_is_validation() {
        let err: CliError = LayoutError::InvalidSiteDimensions { width: 0, depth: 1 }.into();
        assert_eq!(err.kind, ExitCode::ValidationError);
        assert!(err.message.contains("0x1"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&serde_json::json!({"a": 1}), false).unwrap();
        assert_eq!(json, r#"{"a":1}"#);
    }
}
