// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the webjobs SDK
//!
//! Every failure surfaced by the client is a single [`Error`] value. Errors
//! produced by the polling engines embed the operation label of the call
//! that failed and keep the last underlying failure reachable through
//! [`std::error::Error::source`].

use std::time::Duration;

use thiserror::Error;

/// Result type alias for webjobs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the webjobs SDK
#[derive(Error, Debug)]
pub enum Error {
    /// The start call answered without a job id
    #[error("{message}")]
    MissingJobId { message: String },

    /// The retry engine used up its attempt budget
    #[error("{operation} failed after {attempts} attempts: {source}")]
    AttemptsExhausted {
        operation: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    /// Wait budget exceeded before the job reached a terminal status
    #[error("Timed out waiting for {operation} after {max_wait:?}")]
    PollTimeout { operation: String, max_wait: Duration },

    /// Too many consecutive status checks failed
    #[error("Failed to poll {operation} after {failures} attempts: {source}")]
    PollFailures {
        operation: String,
        failures: u32,
        #[source]
        source: Box<Error>,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// Transport level failure without a reqwest error behind it
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response for {operation}: {source}")]
    Parse {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a missing job id error
    pub fn missing_job_id(message: impl Into<String>) -> Self {
        Error::MissingJobId {
            message: message.into(),
        }
    }

    /// Wrap the last failure of a retried operation
    pub fn attempts_exhausted(operation: impl Into<String>, attempts: u32, last: Error) -> Self {
        Error::AttemptsExhausted {
            operation: operation.into(),
            attempts,
            source: Box::new(last),
        }
    }

    /// Create a poll timeout error
    pub fn timeout(operation: impl Into<String>, max_wait: Duration) -> Self {
        Error::PollTimeout {
            operation: operation.into(),
            max_wait,
        }
    }

    /// Wrap the last failure of a status check that hit the failure cap
    pub fn poll_failures(operation: impl Into<String>, failures: u32, last: Error) -> Self {
        Error::PollFailures {
            operation: operation.into(),
            failures,
            source: Box::new(last),
        }
    }

    /// Create a parse error
    pub fn parse(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Parse {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this error already names the operation it failed in.
    ///
    /// Labelled errors pass through the retry engine unchanged instead of
    /// being wrapped a second time.
    pub fn is_labelled(&self) -> bool {
        matches!(
            self,
            Error::MissingJobId { .. }
                | Error::AttemptsExhausted { .. }
                | Error::PollTimeout { .. }
                | Error::PollFailures { .. }
                | Error::Parse { .. }
        )
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::PollTimeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http(_))
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::AttemptsExhausted { source, .. } | Error::PollFailures { source, .. } => {
                source.status_code()
            }
            _ => None,
        }
    }

    /// Get the operation label if the error carries one
    pub fn operation(&self) -> Option<&str> {
        match self {
            Error::AttemptsExhausted { operation, .. }
            | Error::PollTimeout { operation, .. }
            | Error::PollFailures { operation, .. }
            | Error::Parse { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
