//! Errors that end a run with a non-zero exit code.

use std::io;

use thiserror::Error;

/// Problems with the `n m e` header or the edge list.
#[derive(Debug, Error)]
pub enum InputError {
    /// A token could not be read as an integer.
    #[error("Malformed {what}: '{token}' is not an integer")]
    Malformed { what: &'static str, token: String },

    /// Input ended before a required number.
    #[error("Missing {what}: input ended early")]
    MissingToken { what: &'static str },

    /// A vertex count was zero or negative.
    #[error("The {what} must be positive, got {value}")]
    NonPositiveCount { what: &'static str, value: i64 },

    /// The edge count was negative.
    #[error("The edge count must not be negative, got {0}")]
    NegativeEdgeCount(i64),
}

impl InputError {
    /// Create a malformed-number error.
    pub fn malformed(what: &'static str, token: impl Into<String>) -> Self {
        Self::Malformed {
            what,
            token: token.into(),
        }
    }

    /// Create a missing-number error.
    pub const fn missing(what: &'static str) -> Self {
        Self::MissingToken { what }
    }
}

/// Any failure of the command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input was rejected.
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON output could not be written.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
