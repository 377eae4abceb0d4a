//! Error types for the portscout-core library.

use thiserror::Error;

/// Result type alias for portscout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing ports and attributing processes.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// The external tool is not installed (or not on `PATH`).
    #[error("Command not found: {0}")]
    ToolNotFound(String),

    /// Permission denied for an operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// The socket listing had no usable row for the port.
    #[error("no process found in {tool} output for port {port}")]
    NoProcessFound { tool: &'static str, port: u16 },

    /// Port number outside 1-65535 (or a malformed port argument).
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}
