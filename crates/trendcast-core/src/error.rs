//! Error types for the trendcast pipeline.
//!
//! Only transport-level faults and rejected publish calls surface as
//! errors; malformed catalog pages and missing item fields are handled
//! leniently inside the catalog and record layers and never reach here.

use std::fmt;
use thiserror::Error;

/// The unified error type for trendcast operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, protocol).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The publish sink rejected a message.
    #[error("publish error: {0}")]
    Publish(ApiError),

    /// A record could not be encoded for publishing.
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// An error response from an upstream Google API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Upstream error code (e.g. "PERMISSION_DENIED"), if present.
    pub code: Option<String>,
    /// Error message from the service.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
