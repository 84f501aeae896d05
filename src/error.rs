//! Error types for tasker
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad description, unknown id, invalid status)
//! - 3: Corrupt task file (exists but cannot be parsed)
//! - 4: Operation failed (I/O, serialization)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tasker CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const CORRUPT_STORE: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tasker operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid status '{0}': must be todo, in-progress or done")]
    InvalidStatus(String),

    #[error("Invalid filter '{0}': must be todo, in-progress, done or not-done")]
    InvalidFilter(String),

    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Corrupt task file (exit code 3)
    #[error("Task file is not a valid task list: {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::EmptyDescription
            | Error::InvalidStatus(_)
            | Error::InvalidFilter(_)
            | Error::TaskNotFound(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            // Corrupt store
            Error::CorruptStore { .. } => exit_codes::CORRUPT_STORE,

            // Operation failures
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tasker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    pub kind: &'static str,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        let kind = match err.exit_code() {
            exit_codes::USER_ERROR => "user_error",
            exit_codes::CORRUPT_STORE => "corrupt_store",
            _ => "operation_failed",
        };
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            kind,
        }
    }
}
