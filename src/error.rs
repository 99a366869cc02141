//! Error handling for inventory sync operations.
//!
//! Parsing never fails: ragged rows and unparsable numbers are recovered
//! where they occur. The variants here cover the stages that can abort a
//! run: reading the input, talking to the catalog service and writing
//! exports.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for inventory sync operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Input export missing or unreadable
    #[error("Cannot read inventory file '{}': {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Request never produced an HTTP response (refused, DNS, timeout)
    #[error("Transport failure calling {endpoint}: {message}")]
    Transport {
        endpoint: String,
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Catalog service answered with a non-2xx status
    #[error("Catalog service rejected request to {endpoint} with status {status}: {body}")]
    ServiceRejection {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    ResponseDecode { endpoint: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export destination could not be written
    #[error("Cannot write inventory export to {destination}: {source}")]
    OutputWrite {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an input access error for the given path
    pub fn input_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a transport error, describing timeouts and connection failures
    /// in operator-friendly terms
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            format!("request timed out ({})", source)
        } else if source.is_connect() {
            format!("connection failed ({})", source)
        } else {
            source.to_string()
        };

        Self::Transport {
            endpoint: endpoint.into(),
            message,
            source,
        }
    }

    /// Create a service rejection error
    pub fn service_rejection(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::ServiceRejection {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a response decode error
    pub fn response_decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResponseDecode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(destination: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            destination: destination.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True when no HTTP response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
