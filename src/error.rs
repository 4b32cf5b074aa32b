//! Structured error types for directory operations.

use std::fmt;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No room matched the requested name.
    RoomNotFound,
    /// The rooms source could not be read or fetched.
    SourceUnreadable,
}

/// Structured error for directory operations.
#[derive(Debug)]
pub struct DirectoryError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl DirectoryError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors

    pub fn room_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::RoomNotFound,
            format!("Room not found: {}", name),
        )
    }

    pub fn source_unreadable(source: &str, err: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::SourceUnreadable,
            format!("Cannot read rooms source: {}", source),
        )
        .with_details(err.to_string())
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details {
            Some(ref details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Result type for directory operations.
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
