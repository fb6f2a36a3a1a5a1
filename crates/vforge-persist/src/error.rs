//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;

use thiserror::Error;
use vforge_validate::ValidationReport;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize specification")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse specification document")]
    Deserialization {
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but did not pass validation.
    #[error("Imported specification has {} error(s)", .report.error_count())]
    Rejected { report: ValidationReport },

    /// Temp file written but could not be renamed over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Background task failed")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Serialization { .. } => {
                "An error occurred while writing the specification.".to_string()
            }
            Self::Deserialization { source } => format!(
                "The document is not a valid component specification (line {}, column {}).",
                source.line(),
                source.column()
            ),
            Self::Rejected { report } => {
                let first = report
                    .errors
                    .first()
                    .map(|d| d.message.as_str())
                    .unwrap_or("unknown error");
                format!(
                    "The specification was not imported: {} error(s), first: {}",
                    report.error_count(),
                    first
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::Task { .. } => "The save or load task was interrupted.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } | Self::Task { .. } => None,
            Self::Deserialization { .. } => {
                Some("Check the document against an exported specification.".into())
            }
            Self::Rejected { .. } => {
                Some("Run `vforge validate --fix` to list and repair the errors.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
