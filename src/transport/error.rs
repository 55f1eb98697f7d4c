//! Transport error types

use thiserror::Error;

/// Failure to assemble a client configuration.
///
/// Both settings are required at construction time; a missing one is a
/// startup failure, never a per-call one.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// A failed request against the remote API.
///
/// Transport failures are faults, not validation outcomes: they indicate an
/// environment or network problem and abort whatever fetch was in flight.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Programmer error: only GET and POST are supported
    #[error("Invalid request method: {0}")]
    InvalidMethod(String),

    /// The API answered with a non-success status
    #[error("HTTP Error {status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("Request timed out.")]
    Timeout,

    #[error("Connection error occurred: {0}")]
    Connection(String),

    /// Any other transport-level fault, including malformed response bodies
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
