// file: src/error.rs
// version: 1.0.0
// guid: 4b8e2a9c-1f63-47d5-b0a8-6c2e9d1f5a3b

use thiserror::Error;

/// Result type alias for the wrapper
pub type Result<T> = std::result::Result<T, WrapperError>;

/// Error types for the PROS wrapper CLI
///
/// A delegate that runs and exits non-zero is not an error here: its exit
/// code is relayed verbatim and the wrapper adds no diagnostic of its own.
#[derive(Error, Debug)]
pub enum WrapperError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} did not finish within {seconds} seconds")]
    Timeout { program: String, seconds: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WrapperError {
    /// Create a new tool-not-found error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code reported to the shell for this failure.
    ///
    /// Follows the shell conventions: 127 for a missing command, 126 for a
    /// command that exists but cannot be run, 124 for a timeout.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolNotFound(_) => 127,
            Self::Launch { .. } => 126,
            Self::Timeout { .. } => 124,
            Self::Config(_) | Self::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_sentinels() {
        assert_eq!(WrapperError::tool_not_found("pros").exit_code(), 127);
        assert_eq!(
            WrapperError::Launch {
                program: "pros".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
            126
        );
        assert_eq!(
            WrapperError::Timeout {
                program: "pros".to_string(),
                seconds: 30,
            }
            .exit_code(),
            124
        );
        assert_eq!(WrapperError::config("bad toml").exit_code(), 1);
    }

    #[test]
    fn test_tool_not_found_message_names_the_tool() {
        let err = WrapperError::tool_not_found("pros");
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("pros"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        let err: WrapperError = io_err.into();
        assert!(matches!(err, WrapperError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
