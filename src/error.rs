//! Error types for parqshift
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for parqshift
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Startup Errors (fatal)
    // ============================================================================
    /// Malformed storage URI (missing scheme, empty container)
    #[error("Invalid storage path '{uri}': {message}")]
    Path { uri: String, message: String },

    /// Client construction failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Listing Errors (fatal)
    // ============================================================================
    /// Storage listing call failed; no partial object list is acted on
    #[error("Failed to list objects under '{prefix}': {message}")]
    Listing { prefix: String, message: String },

    // ============================================================================
    // Per-object Errors (recoverable)
    // ============================================================================
    /// One object could not be read
    #[error("Failed to read object '{key}': {message}")]
    Read { key: String, message: String },

    /// One object's bytes are not valid delimited text
    #[error("CSV parsing error: {message}")]
    Parse { message: String },

    /// One converted buffer could not be written
    #[error("Failed to write object '{key}': {message}")]
    Write { key: String, message: String },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    /// Arrow-level failure while building record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet serialization failure
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    // ============================================================================
    // Trigger Errors
    // ============================================================================
    /// Malformed storage-change notification
    #[error("Failed to parse event notification: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The job-management API rejected the script update
    #[error("Job update failed: {message}")]
    JobUpdate { message: String },

    // ============================================================================
    // I/O and Generic Errors
    // ============================================================================
    /// IO failure outside the storage boundary
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all with a rendered message
    #[error("{0}")]
    Other(String),

    /// Wrapped error from an embedding application
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a path error
    pub fn path(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Path {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a listing error
    pub fn listing(prefix: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Listing {
            prefix: prefix.into(),
            message: message.into(),
        }
    }

    /// Create a read error for one object
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a write error for one object
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a job update error
    pub fn job_update(message: impl Into<String>) -> Self {
        Self::JobUpdate {
            message: message.into(),
        }
    }

    /// Check if this error aborts the whole run
    ///
    /// Startup and listing errors are fatal; errors scoped to a single
    /// object are recovered by the driver (logged, object skipped).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Path { .. } | Error::Config { .. } | Error::Listing { .. }
        )
    }
}

/// Result type alias for parqshift
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::path("bucket/in", "missing s3:// scheme");
        assert_eq!(
            err.to_string(),
            "Invalid storage path 'bucket/in': missing s3:// scheme"
        );

        let err = Error::listing("in/", "no such bucket");
        assert_eq!(
            err.to_string(),
            "Failed to list objects under 'in/': no such bucket"
        );

        let err = Error::parse("ragged row at line 3");
        assert_eq!(err.to_string(), "CSV parsing error: ragged row at line 3");
    }

    #[test]
    fn test_is_fatal() {
        assert!(Error::path("x", "bad").is_fatal());
        assert!(Error::config("bad client").is_fatal());
        assert!(Error::listing("in/", "denied").is_fatal());

        assert!(!Error::read("in/a.csv", "gone").is_fatal());
        assert!(!Error::parse("ragged").is_fatal());
        assert!(!Error::write("out/a.parquet", "denied").is_fatal());
    }
}
